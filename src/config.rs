// ============================================================================
// CONFIG - Build-time configuration (API base, proxy target, logging)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Base relativa usada cuando no hay origen de backend explícito.
/// Depende de un proxy de desarrollo que reenvíe `/api/*` al backend.
pub const RELATIVE_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: Option<String>,
    pub proxy_target: Option<String>,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            proxy_target: None,
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("PROXY_TARGET"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Construye la config desde valores crudos. Un string vacío cuenta como no definido.
    pub fn from_values(
        api_base_url: Option<&str>,
        proxy_target: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        };

        Self {
            api_base_url: non_empty(api_base_url),
            proxy_target: non_empty(proxy_target),
            environment: non_empty(environment).unwrap_or_else(|| "development".to_string()),
            enable_logging: enable_logging
                .unwrap_or("true")
                .trim()
                .parse()
                .unwrap_or(true),
        }
    }

    /// Base de todas las peticiones: la URL explícita gana, si no `/api`.
    pub fn api_base(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => RELATIVE_API_BASE.to_string(),
        }
    }

    /// True cuando se usa la base relativa pero nada la reenvía.
    pub fn missing_proxy_target(&self) -> bool {
        self.api_base_url.is_none() && self.proxy_target.is_none()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log según entorno
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if self.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        }
    }

    /// Registra el endpoint resuelto una vez al arrancar.
    pub fn log_summary(&self) {
        log::info!("🌐 [CONFIG] API base: {} ({})", self.api_base(), self.environment);
        if self.missing_proxy_target() {
            log::warn!(
                "⚠️ [CONFIG] No PROXY_TARGET or API_BASE_URL set. Calls to {}/* will likely return 404.",
                RELATIVE_API_BASE
            );
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
