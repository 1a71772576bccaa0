// ============================================================================
// APP - Shell: toggle de tema + sesión + router
// ============================================================================

use yew::prelude::*;

use crate::components::{RouterOutlet, ThemeToggle};
use crate::hooks::SessionProvider;
use crate::utils::Theme;
use crate::viewmodels::SessionManager;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub session: SessionManager,
    #[prop_or_default]
    pub initial_theme: Theme,
    /// Persiste el tema tras cada cambio.
    #[prop_or_default]
    pub on_theme_change: Callback<Theme>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme = use_state_eq(|| props.initial_theme);

    use_effect_with(*theme, |theme| {
        theme.apply();
        || ()
    });

    let on_toggle = {
        let theme = theme.clone();
        let on_theme_change = props.on_theme_change.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            log::info!("🎨 [THEME] {} -> {}", theme.as_str(), next.as_str());
            theme.set(next);
            on_theme_change.emit(next);
        })
    };

    html! {
        <div class="App">
            <header class="App-header">
                <ThemeToggle theme={*theme} {on_toggle} />
                <SessionProvider session={props.session.clone()}>
                    <RouterOutlet session={props.session.clone()} />
                </SessionProvider>
            </header>
        </div>
    }
}
