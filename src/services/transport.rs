// ============================================================================
// TRANSPORT - Envío HTTP crudo (gloo-net en el navegador)
// ============================================================================
// Sin lógica de sesión: solo mueve peticiones y respuestas.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Busca una cabecera sin distinguir mayúsculas en el nombre.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request build error: {0}")]
    Build(String),
    #[error("Network error: {0}")]
    Network(String),
}

#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `fetch` vía gloo-net. Los timeouts son los del navegador.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (key, value)| b.header(key, value));

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError::Build(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
pub mod mock {
    //! Transport con respuestas programadas para tests unitarios.

    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;

    pub enum Reply {
        Now(Result<ApiResponse, TransportError>),
        Gate(oneshot::Receiver<Result<ApiResponse, TransportError>>),
    }

    /// Respuestas en cola por `"METHOD /path"`, con la base quitada de la URL.
    /// Llamadas sin respuesta programada devuelven 404.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        base: String,
        replies: Rc<RefCell<HashMap<String, VecDeque<Reply>>>>,
        sent: Rc<RefCell<Vec<ApiRequest>>>,
    }

    impl ScriptedTransport {
        pub fn new(base: &str) -> Self {
            Self {
                base: base.to_string(),
                ..Self::default()
            }
        }

        fn push(&self, route: &str, reply: Reply) {
            self.replies
                .borrow_mut()
                .entry(route.to_string())
                .or_default()
                .push_back(reply);
        }

        pub fn reply(&self, route: &str, status: u16, body: &str) {
            self.push(
                route,
                Reply::Now(Ok(ApiResponse {
                    status,
                    body: body.to_string(),
                })),
            );
        }

        pub fn fail(&self, route: &str, message: &str) {
            self.push(
                route,
                Reply::Now(Err(TransportError::Network(message.to_string()))),
            );
        }

        /// Respuesta retenida hasta que dispare el sender devuelto.
        pub fn gate(&self, route: &str) -> oneshot::Sender<Result<ApiResponse, TransportError>> {
            let (tx, rx) = oneshot::channel();
            self.push(route, Reply::Gate(rx));
            tx
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.sent.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    pub fn response(status: u16, body: &str) -> Result<ApiResponse, TransportError> {
        Ok(ApiResponse {
            status,
            body: body.to_string(),
        })
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            let path = request
                .url
                .strip_prefix(&self.base)
                .unwrap_or(&request.url)
                .to_string();
            let route = format!("{} {}", request.method.as_str(), path);
            self.sent.borrow_mut().push(request);

            let next = self
                .replies
                .borrow_mut()
                .get_mut(&route)
                .and_then(|queue| queue.pop_front());

            match next {
                Some(Reply::Now(result)) => result,
                Some(Reply::Gate(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".into()))),
                None => response(404, ""),
            }
        }
    }
}
