//! Tema claro/oscuro. El tema activo se escribe en `data-theme` de `<html>`
//! y se recuerda en el storage.

use super::constants::STORAGE_KEY_THEME;
use super::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Texto del botón: muestra el tema al que se cambiaría
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }

    pub fn toggle_aria_label(&self) -> String {
        format!("Switch to {} mode", self.toggled().as_str())
    }

    /// Preferencia guardada; `Light` si falta o no se reconoce.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(STORAGE_KEY_THEME)
            .ok()
            .flatten()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        if let Err(e) = store.set(STORAGE_KEY_THEME, self.as_str()) {
            log::warn!("⚠️ [THEME] No se pudo guardar el tema: {}", e);
        }
    }

    /// Aplica el tema al elemento raíz del documento. Solo navegador.
    pub fn apply(&self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        if let Some(el) = root {
            if let Err(e) = el.set_attribute("data-theme", self.as_str()) {
                log::warn!("⚠️ [THEME] data-theme no aplicado: {:?}", e);
            }
        }
    }
}
