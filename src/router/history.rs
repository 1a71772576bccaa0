// ============================================================================
// HISTORY - Binding con window.history / popstate
// ============================================================================
// Único módulo que toca la History API. Fallos se registran y se ignoran:
// la vista sigue el estado del router aunque la barra de direcciones no.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::navigator::{HistoryUpdate, Resolution};

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("⚠️ [HISTORY] pushState({}) falló: {:?}", path, e);
        }
    }
}

pub fn replace(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("⚠️ [HISTORY] replaceState({}) falló: {:?}", path, e);
        }
    }
}

/// Alinea la barra de direcciones con la resolución.
pub fn sync(resolution: &Resolution, user_initiated: bool) {
    match resolution.history_update(user_initiated, &current_path()) {
        HistoryUpdate::Push => push(&resolution.location),
        HistoryUpdate::Replace => replace(&resolution.location),
        HistoryUpdate::None => {}
    }
}

/// Suscripción a `popstate`; el listener se elimina en drop.
pub struct PopStateListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl PopStateListener {
    pub fn new<F>(mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(String) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            on_change(current_path());
        }) as Box<dyn FnMut(web_sys::Event)>);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        Ok(Self { closure })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
