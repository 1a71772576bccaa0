// ============================================================================
// API CLIENT - Gateway HTTP autenticado (único punto de salida al backend)
// ============================================================================
// - Saliente: adjunta `Authorization: Bearer <token>` si hay token guardado
//   (se lee en cada petición, nunca se cachea)
// - Entrante: un 401 limpia token + usuario y emite la señal de logout;
//   el error se sigue devolviendo al llamador
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::AppConfig;
use crate::services::token_storage::CredentialStore;
use crate::services::transport::{
    ApiRequest, ApiResponse, FetchTransport, HttpMethod, Transport, TransportError,
};
use crate::state::{LogoutBus, LogoutEvent};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] TransportError),
    #[error("HTTP 401: unauthorized")]
    Unauthorized { body: String },
    #[error("HTTP {status}")]
    Http { status: u16, body: String },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("Serialization error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Despachador compartido. Los clones comparten store, transport y bus.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    store: CredentialStore,
    transport: Rc<dyn Transport>,
    logout_bus: LogoutBus,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        store: CredentialStore,
        transport: Rc<dyn Transport>,
        logout_bus: LogoutBus,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            store,
            transport,
            logout_bus,
        }
    }

    /// Cliente de navegador contra la base configurada.
    pub fn from_config(config: &AppConfig, store: CredentialStore, logout_bus: LogoutBus) -> Self {
        Self::new(config.api_base(), store, Rc::new(FetchTransport), logout_bus)
    }

    pub fn logout_bus(&self) -> &LogoutBus {
        &self.logout_bus
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn prepare(&self, method: HttpMethod, path: &str, body: Option<String>) -> ApiRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.store.get_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        ApiRequest {
            method,
            url: self.url(path),
            headers,
            body,
        }
    }

    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(method, path, body);
        log::debug!("🌐 [API] {} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] {} {}: {}", method.as_str(), path, e);
            ApiError::from(e)
        })?;

        if response.status == 401 {
            self.handle_unauthorized(path);
            return Err(ApiError::Unauthorized {
                body: response.body,
            });
        }

        if !response.ok() {
            log::warn!("⚠️ [API] {} {} -> HTTP {}", method.as_str(), path, response.status);
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response)
    }

    /// Primero el store, después la señal.
    fn handle_unauthorized(&self, path: &str) {
        log::warn!("🔒 [API] 401 en {}, limpiando sesión y emitiendo logout", path);
        self.store.clear();
        self.logout_bus.publish(&LogoutEvent::unauthorized());
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(HttpMethod::Get, path, None).await?;
        decode(&response)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.send(HttpMethod::Post, path, Some(json)).await?;
        decode(&response)
    }
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::mock::ScriptedTransport;
    use crate::utils::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::RefCell;

    const BASE: &str = "https://api.example.com";

    struct Fixture {
        medium: MemoryStorage,
        store: CredentialStore,
        transport: ScriptedTransport,
        bus: LogoutBus,
        client: ApiClient,
    }

    fn fixture() -> Fixture {
        let medium = MemoryStorage::new();
        let store = CredentialStore::new(Rc::new(medium.clone()));
        let transport = ScriptedTransport::new(BASE);
        let bus = LogoutBus::new();
        let client = ApiClient::new(
            format!("{}/", BASE),
            store.clone(),
            Rc::new(transport.clone()),
            bus.clone(),
        );
        Fixture {
            medium,
            store,
            transport,
            bus,
            client,
        }
    }

    #[test]
    fn attaches_bearer_token_when_stored() {
        let f = fixture();
        f.store.set_token("abc");
        f.transport.reply("GET /auth/me", 200, r#"{"email":"ada@example.com"}"#);

        block_on(f.client.send(HttpMethod::Get, "/auth/me", None)).unwrap();

        let sent = f.transport.requests();
        assert_eq!(sent[0].url, "https://api.example.com/auth/me");
        assert_eq!(sent[0].header("authorization"), Some("Bearer abc"));
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn omits_authorization_without_token() {
        let f = fixture();
        f.transport.reply("GET /health", 200, "{}");

        block_on(f.client.send(HttpMethod::Get, "health", None)).unwrap();

        let sent = f.transport.requests();
        assert_eq!(sent[0].url, "https://api.example.com/health");
        assert_eq!(sent[0].header("Authorization"), None);
    }

    #[test]
    fn token_is_read_per_request() {
        let f = fixture();
        f.transport.reply("GET /a", 200, "{}");
        f.transport.reply("GET /a", 200, "{}");
        f.transport.reply("GET /a", 200, "{}");

        block_on(f.client.send(HttpMethod::Get, "/a", None)).unwrap();
        f.store.set_token("first");
        block_on(f.client.send(HttpMethod::Get, "/a", None)).unwrap();
        f.store.set_token("second");
        block_on(f.client.send(HttpMethod::Get, "/a", None)).unwrap();

        let auth: Vec<Option<String>> = f
            .transport
            .requests()
            .iter()
            .map(|r| r.header("Authorization").map(str::to_string))
            .collect();
        assert_eq!(
            auth,
            vec![None, Some("Bearer first".into()), Some("Bearer second".into())]
        );
    }

    #[test]
    fn unauthorized_clears_store_broadcasts_and_propagates() {
        let f = fixture();
        f.store.set_token("abc");
        f.store.set_user(&crate::models::UserProfile::with_email("ada@example.com"));
        f.transport.reply("GET /tasks", 401, r#"{"detail":"expired"}"#);

        let events = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let events = events.clone();
            let medium = f.medium.clone();
            f.bus.subscribe(move |e: &LogoutEvent| {
                // durable state is already cleared when listeners run
                events.borrow_mut().push((e.reason.clone(), medium.is_empty()));
            })
        };

        let err = block_on(f.client.get_json::<serde_json::Value>("/tasks")).unwrap_err();

        assert_eq!(
            err,
            ApiError::Unauthorized {
                body: r#"{"detail":"expired"}"#.into()
            }
        );
        assert_eq!(*events.borrow(), vec![("unauthorized".to_string(), true)]);
        assert_eq!(f.store.get_token(), None);
    }

    #[test]
    fn other_failures_do_not_touch_the_session() {
        let f = fixture();
        f.store.set_token("abc");
        f.transport.reply("GET /tasks", 500, "boom");
        f.transport.fail("GET /tasks", "offline");

        let published = Rc::new(RefCell::new(0));
        let _sub = {
            let published = published.clone();
            f.bus.subscribe(move |_| *published.borrow_mut() += 1)
        };

        let http = block_on(f.client.send(HttpMethod::Get, "/tasks", None)).unwrap_err();
        assert_eq!(
            http,
            ApiError::Http {
                status: 500,
                body: "boom".into()
            }
        );
        let net = block_on(f.client.send(HttpMethod::Get, "/tasks", None)).unwrap_err();
        assert!(matches!(net, ApiError::Network(TransportError::Network(_))));

        assert_eq!(*published.borrow(), 0);
        assert_eq!(f.store.get_token().as_deref(), Some("abc"));
    }

    #[test]
    fn json_helpers_encode_and_decode() {
        let f = fixture();
        f.transport.reply("POST /echo", 200, r#"{"ok":true}"#);
        f.transport.reply("GET /garbage", 200, "not json");

        let value: serde_json::Value =
            block_on(f.client.post_json("/echo", &serde_json::json!({"a": 1}))).unwrap();
        assert_eq!(value, serde_json::json!({"ok": true}));
        assert_eq!(f.transport.requests()[0].body.as_deref(), Some(r#"{"a":1}"#));

        let err = block_on(f.client.get_json::<serde_json::Value>("/garbage")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
