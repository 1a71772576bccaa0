use std::rc::Rc;

use task_portal::components::{App, AppProps};
use task_portal::config::CONFIG;
use task_portal::services::{ApiClient, CredentialStore};
use task_portal::state::LogoutBus;
use task_portal::utils::{BrowserStorage, KeyValueStore, MemoryStorage, Theme};
use task_portal::viewmodels::SessionManager;
use yew::Callback;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Task Portal starting...");
    CONFIG.log_summary();

    let medium: Rc<dyn KeyValueStore> = if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        log::warn!("⚠️ [STORAGE] localStorage no disponible, la sesión no sobrevivirá a recargas");
        Rc::new(MemoryStorage::new())
    };

    let store = CredentialStore::new(medium.clone());
    let api = ApiClient::from_config(&CONFIG, store.clone(), LogoutBus::new());
    let session = SessionManager::new(api, store);

    let props = AppProps {
        session,
        initial_theme: Theme::load(medium.as_ref()),
        on_theme_change: Callback::from(move |theme: Theme| theme.save(medium.as_ref())),
    };

    yew::Renderer::<App>::with_props(props).render();
}
