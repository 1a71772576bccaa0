// Claves de localStorage
pub const STORAGE_KEY_TOKEN: &str = "auth_token";
pub const STORAGE_KEY_USER: &str = "auth_user";
pub const STORAGE_KEY_THEME: &str = "theme";

// Rutas
pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_PROTECTED_PATH: &str = "/tasks";

// Backend endpoints (relativos a la base resuelta)
pub const AUTH_LOGIN_ENDPOINT: &str = "/auth/login";
pub const AUTH_ME_ENDPOINT: &str = "/auth/me";

/// Motivo del logout cuando el backend responde 401
pub const LOGOUT_REASON_UNAUTHORIZED: &str = "unauthorized";
/// Motivo cuando el usuario cierra sesión explícitamente
pub const LOGOUT_REASON_USER: &str = "user";
