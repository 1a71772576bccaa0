// ============================================================================
// USE SESSION HOOK - Estado de sesión reactivo para componentes
// ============================================================================

use yew::prelude::*;

use crate::state::SessionState;
use crate::viewmodels::SessionManager;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    /// `None` fuera de un `SessionProvider`.
    pub manager: Option<SessionManager>,
    pub state: SessionState,
}

impl UseSessionHandle {
    pub fn logout(&self) {
        match &self.manager {
            Some(manager) => manager.logout(),
            None => log::error!("❌ [SESSION] logout() sin SessionProvider"),
        }
    }
}

/// Snapshot de la sesión; re-renderiza al llamador en cada cambio.
#[hook]
pub fn use_session() -> UseSessionHandle {
    let manager = use_context::<SessionManager>();
    let snapshot = {
        let manager = manager.clone();
        use_state_eq(move || manager.map(|m| m.state()).unwrap_or_default())
    };

    {
        let snapshot = snapshot.clone();
        use_effect_with(manager.clone(), move |manager| {
            let subscription = manager.as_ref().map(|manager| {
                snapshot.set(manager.state());
                let snapshot = snapshot.clone();
                manager.subscribe(move |state| snapshot.set(state.clone()))
            });
            move || drop(subscription)
        });
    }

    UseSessionHandle {
        manager,
        state: (*snapshot).clone(),
    }
}
