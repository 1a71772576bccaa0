// ============================================================================
// TASK PORTAL - FRONTEND (RUST + WASM)
// ============================================================================
// Capas:
// - Components/Hooks: vistas Yew, sin lógica de sesión
// - ViewModels: SessionManager (estado + transiciones)
// - Services: SOLO comunicación API + almacenamiento de credenciales
// - State: SessionState, señal de logout con Rc<RefCell>
// - Router: tabla de rutas + guard puros, binding con History API
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
