// ============================================================================
// SESSION VIEWMODEL - Dueño único del estado de sesión
// ============================================================================
// BOOTSTRAPPING -> {AUTHENTICATED, UNAUTHENTICATED}, luego AUTHENTICATED <-> UNAUTHENTICATED
// - bootstrap(): rehidrata desde storage y valida con GET /auth/me
// - login(): POST /auth/login, persiste token (+ perfil)
// - logout() / señal de logout forzado: limpia memoria + storage
// Resultados async obsoletos se descartan con un contador de generación.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::models::{LoginRequest, LoginResponse, UserProfile};
use crate::services::{fetch_current_user, perform_login, ApiClient, CredentialStore, LoginError};
use crate::state::{EventBus, LogoutEvent, SessionState, Subscription};

struct Inner {
    api: ApiClient,
    store: CredentialStore,
    state: RefCell<SessionState>,
    generation: Cell<u64>,
    changes: EventBus<SessionState>,
    logout_subscription: RefCell<Option<Subscription>>,
    disposed: Cell<bool>,
}

/// Handle clonable; todos los clones manejan la misma sesión.
#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<Inner>,
}

impl PartialEq for SessionManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionManager {
    /// Arranca en `Bootstrapping` y escucha el bus de logout del cliente.
    pub fn new(api: ApiClient, store: CredentialStore) -> Self {
        let bus = api.logout_bus().clone();
        let inner = Rc::new(Inner {
            api,
            store,
            state: RefCell::new(SessionState::bootstrapping()),
            generation: Cell::new(0),
            changes: EventBus::new(),
            logout_subscription: RefCell::new(None),
            disposed: Cell::new(false),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let subscription = bus.subscribe(move |event: &LogoutEvent| {
            if let Some(inner) = weak.upgrade() {
                SessionManager { inner }.on_logout_signal(event);
            }
        });
        *inner.logout_subscription.borrow_mut() = Some(subscription);

        Self { inner }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Se invoca con el nuevo estado tras cada cambio.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&SessionState) + 'static,
    {
        self.inner.changes.subscribe(callback)
    }

    fn next_generation(&self) -> u64 {
        let next = self.inner.generation.get() + 1;
        self.inner.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.inner.disposed.get() && self.inner.generation.get() == generation
    }

    fn set_state(&self, next: SessionState) {
        let previous = {
            let mut state = self.inner.state.borrow_mut();
            if *state == next {
                return;
            }
            std::mem::replace(&mut *state, next.clone())
        };
        log::info!("🔄 [SESSION] {:?} -> {:?}", previous.phase(), next.phase());
        self.inner.changes.publish(&next);
    }

    // ========================================================================
    // BOOTSTRAP
    // ========================================================================

    pub async fn bootstrap(&self) {
        if !self.inner.state.borrow().loading {
            log::debug!("⏭️ [SESSION] Sesión ya resuelta, bootstrap ignorado");
            return;
        }
        let generation = self.next_generation();

        let token = match self.inner.store.get_token() {
            Some(token) => token,
            None => {
                log::info!("ℹ️ [SESSION] Sin token guardado");
                self.set_state(SessionState::unauthenticated());
                return;
            }
        };

        log::info!("🔍 [SESSION] Token encontrado, validando con /auth/me...");
        self.set_state(SessionState {
            token: Some(token.clone()),
            user: self.inner.store.get_user(),
            loading: true,
        });

        let result = fetch_current_user(&self.inner.api).await;

        if !self.is_current(generation) {
            log::debug!("⏭️ [SESSION] Resultado de bootstrap obsoleto, descartado");
            return;
        }

        match result {
            Ok(profile) => {
                self.inner.store.set_user(&profile);
                self.set_state(SessionState {
                    token: Some(token),
                    user: Some(profile),
                    loading: false,
                });
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Token inválido o backend inaccesible: {}", e);
                self.inner.store.clear();
                self.set_state(SessionState::unauthenticated());
            }
        }
    }

    // ========================================================================
    // LOGIN / LOGOUT
    // ========================================================================

    /// Sin reintentos. Ante error la sesión queda como estaba.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<LoginResponse, LoginError> {
        let request = LoginRequest {
            identifier: identifier.to_string(),
            secret: secret.to_string(),
        };
        let response = perform_login(&self.inner.api, &request).await?;
        let token = response.token.clone().ok_or(LoginError::MissingToken)?;

        self.inner.store.set_token(&token);
        let generation = self.next_generation();

        if let Some(user) = response.user.clone() {
            self.inner.store.set_user(&user);
            self.apply_login(token, Some(user));
            return Ok(response);
        }

        self.apply_login(token.clone(), None);
        match fetch_current_user(&self.inner.api).await {
            Ok(profile) if self.is_current(generation) => {
                self.inner.store.set_user(&profile);
                self.apply_login(token, Some(profile));
            }
            Ok(_) => log::debug!("⏭️ [SESSION] Perfil llegado tras cambio de sesión, descartado"),
            Err(e) => log::warn!("⚠️ [SESSION] Perfil no disponible tras login: {}", e),
        }
        Ok(response)
    }

    fn apply_login(&self, token: String, user: Option<UserProfile>) {
        log::info!("✅ [SESSION] Sesión iniciada");
        self.set_state(SessionState {
            token: Some(token),
            user,
            loading: false,
        });
    }

    pub fn logout(&self) {
        self.clear_session(&LogoutEvent::user());
    }

    fn on_logout_signal(&self, event: &LogoutEvent) {
        if self.inner.disposed.get() {
            return;
        }
        log::warn!("🔒 [SESSION] Logout forzado ({})", event.reason);
        self.clear_session(event);
    }

    fn clear_session(&self, event: &LogoutEvent) {
        self.next_generation();
        self.inner.store.clear();
        if *self.inner.state.borrow() != SessionState::unauthenticated() {
            log::info!("👋 [SESSION] Logout: {}", event.reason);
        }
        self.set_state(SessionState::unauthenticated());
    }

    /// Deja de escuchar el bus de logout e invalida cualquier bootstrap pendiente.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        self.next_generation();
        if let Some(subscription) = self.inner.logout_subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
        log::debug!(
            "🧹 [SESSION] SessionManager liberado ({} observadores aún suscritos)",
            self.inner.changes.listener_count()
        );
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &*self.inner.state.borrow())
            .field("generation", &self.inner.generation.get())
            .finish()
    }
}
