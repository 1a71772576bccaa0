// ============================================================================
// SESSION CONTEXT - Compartir el SessionManager entre componentes
// ============================================================================
// Usa Context API de Yew. El provider lanza el bootstrap al montarse y
// libera el manager al desmontarse.
// ============================================================================

use yew::prelude::*;

use crate::viewmodels::SessionManager;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub session: SessionManager,
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    use_effect_with(props.session.clone(), |session| {
        log::info!("🔐 [SESSION] Bootstrap de sesión...");
        let bootstrapping = session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            bootstrapping.bootstrap().await;
        });

        let session = session.clone();
        move || session.dispose()
    });

    html! {
        <ContextProvider<SessionManager> context={props.session.clone()}>
            {props.children.clone()}
        </ContextProvider<SessionManager>>
    }
}
