use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::router_outlet::use_navigator;
use crate::hooks::use_session;

const EMPTY_FIELDS_ERROR: &str = "Please enter your email and password.";

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let manager = session.manager.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let identifier = email.trim().to_string();
            let secret = (*password).clone();
            if identifier.is_empty() || secret.is_empty() {
                error.set(Some(EMPTY_FIELDS_ERROR.to_string()));
                return;
            }

            let Some(manager) = manager.clone() else {
                log::error!("❌ [LOGIN] SessionManager no disponible");
                return;
            };

            error.set(None);
            submitting.set(true);

            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match manager.login(&identifier, &secret).await {
                    Ok(_) => {
                        submitting.set(false);
                        if let Some(navigator) = navigator {
                            navigator.resume_after_login();
                        }
                    }
                    Err(e) => {
                        log::warn!("❌ [LOGIN] {}", e);
                        error.set(Some(e.user_message()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    // "Register" todavía no existe: el enlace no navega
    let on_register = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <div class="login-container">
            <div class="login-card" role="region" aria-labelledby="login-title">
                <div class="login-header">
                    <h1 id="login-title">{"Welcome back"}</h1>
                    <p class="login-subtitle">{"Sign in to continue to your tasks"}</p>
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="login-error" role="alert" aria-live="assertive">
                        { message }
                    </div>
                }

                <form class="login-form" onsubmit={on_submit} novalidate=true>
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email}
                        disabled={*submitting}
                    />

                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        autocomplete="current-password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password}
                        disabled={*submitting}
                    />

                    <button
                        type="submit"
                        class="login-button"
                        disabled={*submitting}
                        aria-busy={if *submitting { "true" } else { "false" }}
                    >
                        { if *submitting { "Signing in…" } else { "Sign in" } }
                    </button>
                </form>

                <div class="login-footer">
                    <span class="muted">{"Don’t have an account?"}</span>
                    {" "}
                    <a href="/register" onclick={on_register}>{"Register (coming soon)"}</a>
                </div>
            </div>
        </div>
    }
}
