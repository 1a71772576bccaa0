// ============================================================================
// STATE MODULE - Estado de sesión + notificaciones
// ============================================================================

pub mod events;
pub mod reactivity;
pub mod session_state;

pub use events::{LogoutBus, LogoutEvent};
pub use reactivity::{EventBus, Subscription};
pub use session_state::{SessionPhase, SessionState};
