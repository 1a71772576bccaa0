// ============================================================================
// ROUTER - Tabla de rutas, guard y binding con el navegador
// ============================================================================

pub mod navigator;
pub mod guard;
pub mod history;
pub mod route;

pub use navigator::{HistoryUpdate, Resolution, RouterCore};
pub use guard::{evaluate, GuardDecision, NavigationIntent};
pub use route::AppRoute;
