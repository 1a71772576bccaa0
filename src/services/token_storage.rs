// ============================================================================
// TOKEN STORAGE - Token de sesión + perfil de usuario persistidos
// ============================================================================
// Fallos del medio (cuota, storage deshabilitado) se tragan: escritura = no-op,
// lectura = ausente. Nunca se propagan al llamador.
// ============================================================================

use std::rc::Rc;

use crate::models::UserProfile;
use crate::utils::storage::{load_from_storage, save_to_storage, KeyValueStore};
use crate::utils::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

/// Almacén durable del token (`auth_token`) y del perfil (`auth_user`).
#[derive(Clone)]
pub struct CredentialStore {
    medium: Rc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(medium: Rc<dyn KeyValueStore>) -> Self {
        Self { medium }
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.medium.set(STORAGE_KEY_TOKEN, token) {
            log::warn!("⚠️ [TOKEN] No se pudo persistir el token: {}", e);
        }
    }

    pub fn get_token(&self) -> Option<String> {
        match self.medium.get(STORAGE_KEY_TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("⚠️ [TOKEN] Lectura fallida, sesión tratada como ausente: {}", e);
                None
            }
        }
    }

    pub fn clear_token(&self) {
        if let Err(e) = self.medium.remove(STORAGE_KEY_TOKEN) {
            log::warn!("⚠️ [TOKEN] No se pudo eliminar el token: {}", e);
        }
    }

    pub fn set_user(&self, user: &UserProfile) {
        if let Err(e) = save_to_storage(self.medium.as_ref(), STORAGE_KEY_USER, user) {
            log::warn!("⚠️ [TOKEN] No se pudo persistir el usuario: {}", e);
        }
    }

    /// Perfil cacheado. Sin token el perfil queda huérfano y se lee como ausente.
    pub fn get_user(&self) -> Option<UserProfile> {
        self.get_token()?;
        load_from_storage(self.medium.as_ref(), STORAGE_KEY_USER)
    }

    pub fn clear_user(&self) {
        if let Err(e) = self.medium.remove(STORAGE_KEY_USER) {
            log::warn!("⚠️ [TOKEN] No se pudo eliminar el usuario: {}", e);
        }
    }

    /// Primero el token, luego el perfil.
    pub fn clear(&self) {
        self.clear_token();
        self.clear_user();
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}
