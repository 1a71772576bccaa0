// ============================================================================
// ROUTE GUARD - Decisión pura por navegación
// ============================================================================
// loading -> Suspend | sin token -> Redirect a /login (recordando destino) | Allow
// ============================================================================

use crate::state::SessionState;
use crate::utils::LOGIN_PATH;

/// Adónde va el usuario y, tras una redirección del guard, adónde quería ir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub path: String,
    pub from: Option<String>,
}

impl NavigationIntent {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from: None,
        }
    }

    pub fn redirected(path: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from: Some(from.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Sesión aún desconocida; no se renderiza nada.
    Suspend,
    Redirect { to: String, from: String },
    Allow,
}

pub fn evaluate(state: &SessionState, intent: &NavigationIntent) -> GuardDecision {
    if state.loading {
        GuardDecision::Suspend
    } else if !state.is_authenticated() {
        GuardDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            from: intent.path.clone(),
        }
    } else {
        GuardDecision::Allow
    }
}
