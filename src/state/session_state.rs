// ============================================================================
// SESSION STATE - {token, user, loading}
// ============================================================================

use crate::models::UserProfile;

/// Posición en la máquina de estados de sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Bootstrapping,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// True solo durante el bootstrap inicial; nunca vuelve a true.
    pub loading: bool,
}

impl SessionState {
    /// Estado inicial, antes de que el bootstrap mire el storage.
    pub fn bootstrapping() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Perfil a mostrar. Sin token no se confía en el perfil.
    pub fn current_user(&self) -> Option<&UserProfile> {
        if self.is_authenticated() {
            self.user.as_ref()
        } else {
            None
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Bootstrapping
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::bootstrapping()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bootstrapping() {
        let state = SessionState::default();
        assert!(state.loading);
        assert_eq!(state.phase(), SessionPhase::Bootstrapping);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn authentication_is_derived_from_token() {
        let mut state = SessionState::unauthenticated();
        state.user = Some(UserProfile::with_email("ada@example.com"));
        assert_eq!(state.phase(), SessionPhase::Unauthenticated);
        assert!(state.current_user().is_none());

        state.token = Some("abc".into());
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert_eq!(
            state.current_user().and_then(|u| u.email.as_deref()),
            Some("ada@example.com")
        );
    }
}
