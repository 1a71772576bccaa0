// ============================================================================
// ROUTER CORE - Navegación + guard sin DOM
// ============================================================================
// Flujo: petición -> alias -> ruta -> guard -> resolución
// La intención de navegación (destino original) se guarda al redirigir a
// /login y se consume una sola vez tras el login.
// ============================================================================

use super::guard::{evaluate, GuardDecision, NavigationIntent};
use super::route::{normalize_path, AppRoute};
use crate::state::SessionState;
use crate::utils::{DEFAULT_PROTECTED_PATH, LOGIN_PATH};

/// Resultado de una navegación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Vista a renderizar; `None` mientras el guard suspende.
    pub route: Option<AppRoute>,
    /// Ruta que debe quedar en la barra de direcciones.
    pub location: String,
    /// La ruta pedida fue reescrita (alias o redirección del guard).
    pub redirected: bool,
}

/// Qué hacer con la entrada actual del historial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    Push,
    Replace,
    None,
}

impl Resolution {
    /// Solo una navegación del usuario sin redirección añade entrada;
    /// una ruta reescrita nunca deja la original detrás del botón Atrás.
    pub fn history_update(&self, user_initiated: bool, current: &str) -> HistoryUpdate {
        if user_initiated && !self.redirected {
            HistoryUpdate::Push
        } else if self.location != current {
            HistoryUpdate::Replace
        } else {
            HistoryUpdate::None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouterCore {
    location: String,
    pending: Option<NavigationIntent>,
}

impl RouterCore {
    pub fn new(initial_path: &str) -> Self {
        Self {
            location: normalize_path(initial_path),
            pending: None,
        }
    }

    pub fn navigate(&mut self, path: &str, state: &SessionState) -> Resolution {
        let requested = normalize_path(path);
        let (target, aliased) = match AppRoute::alias_target(&requested) {
            Some(alias) => (alias.to_string(), true),
            None => (requested, false),
        };

        let mut resolution = if AppRoute::from_path(&target).requires_auth() {
            self.resolve_guarded(target, state)
        } else {
            self.resolve_login(target, state)
        };
        resolution.redirected |= aliased;

        self.location = resolution.location.clone();
        resolution
    }

    /// Re-evalúa la ubicación actual, p.ej. tras un cambio de sesión.
    pub fn refresh(&mut self, state: &SessionState) -> Resolution {
        let current = self.location.clone();
        self.navigate(&current, state)
    }

    /// Consume el destino recordado; `/tasks` si no hay ninguno.
    pub fn take_resume_target(&mut self) -> String {
        self.pending
            .take()
            .and_then(|intent| intent.from)
            .unwrap_or_else(|| DEFAULT_PROTECTED_PATH.to_string())
    }

    /// Sale de /login hacia el destino recordado, salvo que otra navegación ya lo hiciera.
    pub fn resume_after_login(&mut self, state: &SessionState) -> Option<Resolution> {
        if self.location != LOGIN_PATH {
            return None;
        }
        let target = self.take_resume_target();
        Some(self.navigate(&target, state))
    }

    fn resolve_login(&mut self, path: String, state: &SessionState) -> Resolution {
        if !state.is_authenticated() {
            return Resolution {
                route: Some(AppRoute::Login),
                location: path,
                redirected: false,
            };
        }

        let target = normalize_path(&self.take_resume_target());
        log::info!("🧭 [ROUTER] Sesión activa en /login, redirigiendo a {}", target);
        let mut resolution = self.resolve_guarded(target, state);
        resolution.redirected = true;
        resolution
    }

    fn resolve_guarded(&mut self, path: String, state: &SessionState) -> Resolution {
        let intent = NavigationIntent::to(path.clone());
        match evaluate(state, &intent) {
            GuardDecision::Suspend => Resolution {
                route: None,
                location: path,
                redirected: false,
            },
            GuardDecision::Redirect { to, from } => {
                log::info!("🔒 [ROUTER] Acceso denegado a {}, redirigiendo a {}", from, to);
                self.pending = Some(NavigationIntent::redirected(to.clone(), from));
                Resolution {
                    route: Some(AppRoute::Login),
                    location: to,
                    redirected: true,
                }
            }
            GuardDecision::Allow => Resolution {
                route: Some(AppRoute::from_path(&path)),
                location: path,
                redirected: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn anonymous() -> SessionState {
        SessionState::unauthenticated()
    }

    fn signed_in() -> SessionState {
        SessionState {
            token: Some("abc".into()),
            user: Some(UserProfile::with_email("ada@example.com")),
            loading: false,
        }
    }

    #[test]
    fn protected_path_redirects_and_resumes_after_login() {
        let mut router = RouterCore::new("/");

        let denied = router.navigate("/tasks", &anonymous());
        assert_eq!(denied.route, Some(AppRoute::Login));
        assert_eq!(denied.location, "/login");
        assert!(denied.redirected);

        let resumed = router.resume_after_login(&signed_in()).unwrap();
        assert_eq!(resumed.route, Some(AppRoute::Tasks));
        assert_eq!(resumed.location, "/tasks");
        assert!(router.resume_after_login(&signed_in()).is_none());
    }

    #[test]
    fn redirects_and_resume_replace_the_history_entry() {
        let mut router = RouterCore::new("/");

        let denied = router.navigate("/reports/7", &anonymous());
        assert_eq!(denied.history_update(true, "/tasks"), HistoryUpdate::Replace);

        // la vuelta tras el login no debe dejar /login detrás de Atrás
        let resumed = router.resume_after_login(&signed_in()).unwrap();
        assert_eq!(resumed.location, "/reports/7");
        assert_eq!(resumed.history_update(false, "/login"), HistoryUpdate::Replace);

        let plain = router.navigate("/login", &anonymous());
        assert!(!plain.redirected);
        assert_eq!(plain.history_update(true, "/reports/7"), HistoryUpdate::Push);

        let alias = router.navigate("/app", &signed_in());
        assert_eq!(alias.history_update(true, "/login"), HistoryUpdate::Replace);
        assert_eq!(alias.history_update(false, "/tasks"), HistoryUpdate::None);
    }

    #[test]
    fn resume_target_is_the_original_path_and_consumed_once() {
        let mut router = RouterCore::new("/");
        router.navigate("/reports/42", &anonymous());

        assert_eq!(router.take_resume_target(), "/reports/42");
        assert_eq!(router.take_resume_target(), "/tasks");
    }

    #[test]
    fn aliases_rewrite_to_tasks() {
        let mut router = RouterCore::new("/");
        for alias in ["/", "/app"] {
            let res = router.navigate(alias, &signed_in());
            assert_eq!(res.location, "/tasks");
            assert_eq!(res.route, Some(AppRoute::Tasks));
            assert!(res.redirected);
        }

        let res = router.navigate("/app", &anonymous());
        assert_eq!(res.location, "/login");
        assert_eq!(router.take_resume_target(), "/tasks");
    }

    #[test]
    fn unknown_paths_are_guarded_fallbacks() {
        let mut router = RouterCore::new("/");
        let res = router.navigate("/no/such/page", &signed_in());
        assert_eq!(res.route, Some(AppRoute::Tasks));
        assert_eq!(res.location, "/no/such/page");
        assert!(!res.redirected);
    }

    #[test]
    fn bootstrapping_suspends_then_resolves() {
        let mut router = RouterCore::new("/tasks");
        let suspended = router.refresh(&SessionState::bootstrapping());
        assert_eq!(suspended.route, None);
        assert_eq!(suspended.location, "/tasks");

        let res = router.refresh(&signed_in());
        assert_eq!(res.route, Some(AppRoute::Tasks));

        let mut router = RouterCore::new("/tasks");
        router.refresh(&SessionState::bootstrapping());
        assert_eq!(router.refresh(&anonymous()).location, "/login");
    }

    #[test]
    fn login_page_when_already_signed_in_goes_to_resume_target() {
        let mut router = RouterCore::new("/");
        router.navigate("/reports", &anonymous());

        let res = router.refresh(&signed_in());
        assert_eq!(res.location, "/reports");
        assert_eq!(res.route, Some(AppRoute::Tasks));
        assert!(res.redirected);

        assert_eq!(router.navigate("/login", &signed_in()).location, "/tasks");
        assert!(router.resume_after_login(&signed_in()).is_none());
    }

    #[test]
    fn sign_out_then_login_link_pushes_a_plain_entry() {
        let mut router = RouterCore::new("/tasks");
        router.refresh(&signed_in());

        let res = router.navigate("/login", &anonymous());
        assert_eq!(res.route, Some(AppRoute::Login));
        assert!(!res.redirected);
        assert_eq!(res.history_update(true, "/tasks"), HistoryUpdate::Push);
        assert_eq!(router.take_resume_target(), "/tasks");
    }

    #[test]
    fn logout_on_protected_view_redirects_to_login() {
        let mut router = RouterCore::new("/tasks");
        router.refresh(&signed_in());

        let res = router.refresh(&anonymous());
        assert_eq!(res.route, Some(AppRoute::Login));
        assert_eq!(router.take_resume_target(), "/tasks");
    }
}
