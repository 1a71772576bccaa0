// ============================================================================
// ROUTER OUTLET - Renderiza la vista que decide el RouterCore
// ============================================================================
// - Navegación del usuario -> pushState (replaceState si hubo redirección)
// - popstate / cambios de sesión / vuelta tras login -> replaceState si la ruta cambió
// Los cambios de sesión se agrupan en un Timeout(0) para re-evaluar una vez.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{LoginScreen, TasksPage};
use crate::router::history::{self, PopStateListener};
use crate::router::{AppRoute, Resolution, RouterCore};
use crate::viewmodels::SessionManager;

/// Handle de navegación compartido con las vistas vía contexto.
#[derive(Clone)]
pub struct Navigator {
    core: Rc<RefCell<RouterCore>>,
    session: SessionManager,
    render: UseStateSetter<Option<Resolution>>,
}

impl PartialEq for Navigator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

impl Navigator {
    fn new(initial_path: String, session: SessionManager, render: UseStateSetter<Option<Resolution>>) -> Self {
        Self {
            core: Rc::new(RefCell::new(RouterCore::new(&initial_path))),
            session,
            render,
        }
    }

    /// Navegación del usuario (enlaces, botones).
    pub fn navigate(&self, path: &str) {
        let resolution = self.core.borrow_mut().navigate(path, &self.session.state());
        history::sync(&resolution, true);
        self.show(resolution);
    }

    /// Tras un login correcto; no hace nada si una redirección ya salió de `/login`.
    pub fn resume_after_login(&self) {
        let resolution = self.core.borrow_mut().resume_after_login(&self.session.state());
        if let Some(resolution) = resolution {
            history::sync(&resolution, false);
            self.show(resolution);
        }
    }

    fn follow(&self, path: &str) {
        let resolution = self.core.borrow_mut().navigate(path, &self.session.state());
        history::sync(&resolution, false);
        self.show(resolution);
    }

    fn refresh(&self) {
        let resolution = self.core.borrow_mut().refresh(&self.session.state());
        history::sync(&resolution, false);
        self.show(resolution);
    }

    fn show(&self, resolution: Resolution) {
        log::debug!("🧭 [ROUTER] {} -> {:?}", resolution.location, resolution.route);
        self.render.set(Some(resolution));
    }
}

#[hook]
pub fn use_navigator() -> Option<Navigator> {
    use_context::<Navigator>()
}

#[derive(Properties, PartialEq)]
pub struct RouterOutletProps {
    pub session: SessionManager,
}

#[function_component(RouterOutlet)]
pub fn router_outlet(props: &RouterOutletProps) -> Html {
    let resolution = use_state_eq(|| None::<Resolution>);

    let navigator = {
        let render = resolution.setter();
        use_memo(props.session.clone(), move |session| {
            Navigator::new(history::current_path(), session.clone(), render)
        })
    };

    use_effect_with(navigator.clone(), |navigator| {
        navigator.refresh();

        let popstate = {
            let navigator = (**navigator).clone();
            match PopStateListener::new(move |path| navigator.follow(&path)) {
                Ok(listener) => Some(listener),
                Err(e) => {
                    log::error!("❌ [ROUTER] No se pudo escuchar popstate: {:?}", e);
                    None
                }
            }
        };

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let subscription = {
            let session = navigator.session.clone();
            let navigator = (**navigator).clone();
            let pending = pending.clone();
            session.subscribe(move |_| {
                let navigator = navigator.clone();
                *pending.borrow_mut() = Some(Timeout::new(0, move || navigator.refresh()));
            })
        };

        move || {
            drop(subscription);
            drop(popstate);
            pending.borrow_mut().take();
        }
    });

    let view = match (*resolution).as_ref().and_then(|r| r.route) {
        None => html! {},
        Some(AppRoute::Login) => html! { <LoginScreen /> },
        Some(AppRoute::Tasks) => html! { <TasksPage /> },
    };

    html! {
        <ContextProvider<Navigator> context={(*navigator).clone()}>
            { view }
        </ContextProvider<Navigator>>
    }
}
