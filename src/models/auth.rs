use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cuerpo de `POST /auth/login`. El backend llama a los campos `email`/`password`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "email")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Identidad autenticada. Solo se interpreta `email`;
/// el resto de lo que envía el backend se conserva tal cual.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            extra: Map::new(),
        }
    }

    /// Línea "Signed in as ..." de la vista de aterrizaje.
    pub fn signed_in_label(profile: Option<&UserProfile>) -> String {
        match profile.and_then(|p| p.email.as_deref()) {
            Some(email) if !email.is_empty() => format!("Signed in as {}", email),
            _ => "Signed in".to_string(),
        }
    }
}

/// Cuerpo de error que devuelve el backend en respuestas no 2xx.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// `message`, si no `detail` cuando es un string plano.
    pub fn best_message(&self) -> Option<String> {
        let message = self.message.as_deref().map(str::trim).filter(|m| !m.is_empty());
        if let Some(message) = message {
            return Some(message.to_string());
        }
        match &self.detail {
            Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.trim().to_string()),
            _ => None,
        }
    }
}
