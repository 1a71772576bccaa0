// ============================================================================
// AUTH SERVICE - Llamadas de autenticación (/auth/login, /auth/me)
// ============================================================================
// SOLO comunicación API: el estado de sesión lo decide el SessionManager.
// ============================================================================

use crate::models::{ApiErrorBody, LoginRequest, LoginResponse, UserProfile};
use crate::services::api_client::{ApiClient, ApiError};
use crate::utils::{AUTH_LOGIN_ENDPOINT, AUTH_ME_ENDPOINT};

pub const GENERIC_LOGIN_ERROR: &str = "Login failed. Please check your credentials and try again.";

/// Fallo del intercambio de credenciales. `Display` es el texto que ve el usuario.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Rejected(String),
    #[error("Login failed: the server did not return a session token.")]
    MissingToken,
    #[error("{0}")]
    Transport(String),
}

impl LoginError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match &err {
            ApiError::Unauthorized { body } | ApiError::Http { body, .. } => {
                let message = ApiErrorBody::parse(body)
                    .and_then(|b| b.best_message())
                    .unwrap_or_else(|| GENERIC_LOGIN_ERROR.to_string());
                LoginError::Rejected(message)
            }
            ApiError::Network(e) => LoginError::Transport(e.to_string()),
            ApiError::Decode(_) | ApiError::Encode(_) => {
                LoginError::Rejected(GENERIC_LOGIN_ERROR.to_string())
            }
        }
    }
}

/// `POST /auth/login`. Un 2xx sin token sigue siendo un fallo.
pub async fn perform_login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
    log::info!("🔐 [AUTH] Login de {}", request.identifier);

    let response: LoginResponse = client.post_json(AUTH_LOGIN_ENDPOINT, request).await.map_err(|e| {
        log::warn!("❌ [AUTH] Login rechazado: {}", e);
        LoginError::from(e)
    })?;

    match response.token.as_deref() {
        Some(token) if !token.is_empty() => Ok(response),
        _ => {
            log::error!("❌ [AUTH] Respuesta de login sin token");
            Err(LoginError::MissingToken)
        }
    }
}

/// `GET /auth/me` con el token que tenga el store en ese momento.
pub async fn fetch_current_user(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get_json::<UserProfile>(AUTH_ME_ENDPOINT).await
}
