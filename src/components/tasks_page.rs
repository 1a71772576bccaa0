use yew::prelude::*;

use crate::components::use_navigator;
use crate::hooks::use_session;
use crate::models::UserProfile;
use crate::utils::LOGIN_PATH;

/// Vista de aterrizaje tras el login. La lista de tareas aún no existe.
#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let session = use_session();
    let subtitle = UserProfile::signed_in_label(session.state.current_user());

    let navigator = use_navigator();

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            if let Some(navigator) = &navigator {
                navigator.navigate(LOGIN_PATH);
            }
        })
    };

    html! {
        <div class="tasks-container">
            <div class="tasks-header">
                <h2>{"Your Tasks"}</h2>
                <p class="tasks-subtitle">{ subtitle }</p>
                <button type="button" class="sign-out" onclick={on_sign_out}>{"Sign out"}</button>
            </div>
            <div class="tasks-empty">
                <p>{"Task list UI not implemented yet. This is the post-login landing page."}</p>
            </div>
        </div>
    }
}
