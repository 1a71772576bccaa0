//! Tabla de rutas. Pura: sin acceso al DOM.
//!
//! `/login` es la única ruta pública. Cualquier otra, declarada o no,
//! acaba en la vista protegida de tareas.

use crate::utils::{DEFAULT_PROTECTED_PATH, LOGIN_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Tasks,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match normalize_path(path).as_str() {
            LOGIN_PATH => Self::Login,
            _ => Self::Tasks,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Rutas que son alias de otra y se reescriben.
    pub fn alias_target(path: &str) -> Option<&'static str> {
        match path {
            "/" | "/app" => Some(DEFAULT_PROTECTED_PATH),
            _ => None,
        }
    }
}

/// Con barra inicial, sin barra final (la raíz queda `/`), sin query ni fragmento.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_login_is_public() {
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert!(!AppRoute::Login.requires_auth());

        for path in ["/tasks", "/", "/app", "/reports/2024", "/register"] {
            let route = AppRoute::from_path(path);
            assert_eq!(route, AppRoute::Tasks, "{path}");
            assert!(route.requires_auth());
        }
    }

    #[test]
    fn root_and_app_alias_tasks() {
        assert_eq!(AppRoute::alias_target("/"), Some("/tasks"));
        assert_eq!(AppRoute::alias_target("/app"), Some("/tasks"));
        assert_eq!(AppRoute::alias_target("/tasks"), None);
        assert_eq!(AppRoute::alias_target("/elsewhere"), None);
    }

    #[test]
    fn paths_are_normalized() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("tasks/"), "/tasks");
        assert_eq!(normalize_path("/tasks?page=2#top"), "/tasks");
    }
}
