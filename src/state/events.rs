// ============================================================================
// EVENTS - Señal global de logout forzado
// ============================================================================
// Desacopla el cliente HTTP (que detecta 401) del dueño del estado de sesión.
// ============================================================================

use super::reactivity::EventBus;
use crate::utils::{LOGOUT_REASON_UNAUTHORIZED, LOGOUT_REASON_USER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutEvent {
    pub reason: String,
}

impl LogoutEvent {
    pub fn unauthorized() -> Self {
        Self {
            reason: LOGOUT_REASON_UNAUTHORIZED.to_string(),
        }
    }

    pub fn user() -> Self {
        Self {
            reason: LOGOUT_REASON_USER.to_string(),
        }
    }
}

/// Señal global de "logout".
pub type LogoutBus = EventBus<LogoutEvent>;
