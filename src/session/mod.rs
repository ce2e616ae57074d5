//! Session-scoped credential storage.
//!
//! One credential blob under one fixed key. The browser backend lives in
//! sessionStorage so the session dies with the tab; the in-memory backend
//! serves native builds and tests. Stores are injected (`Arc<dyn
//! SessionStore>`), never reached through a global.

use std::sync::{Arc, RwLock};

use crate::domain::Credential;

/// Storage key for the credential blob.
pub const SESSION_KEY: &str = "user";

/// Read/write/clear access to the persisted credential.
///
/// `clear` wipes *all* client-local storage, not just the session key:
/// logout intentionally leaves nothing behind (see DESIGN.md).
pub trait SessionStore: Send + Sync {
    fn save(&self, credential: &Credential);
    fn load(&self) -> Option<Credential>;
    fn clear(&self);
}

/// In-memory store for native builds and tests.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<Credential>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, credential: &Credential) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(credential.clone());
        }
    }

    fn load(&self) -> Option<Credential> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }
}

/// Browser sessionStorage store.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.session_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn save(&self, credential: &Credential) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("sessionStorage unavailable; credential not persisted");
            return;
        };
        match serde_json::to_string(credential) {
            Ok(json) => {
                if storage.set_item(SESSION_KEY, &json).is_err() {
                    tracing::warn!("Failed to persist credential to sessionStorage");
                }
            }
            Err(err) => tracing::warn!("Failed to encode credential: {err}"),
        }
    }

    fn load(&self) -> Option<Credential> {
        let storage = Self::storage()?;
        let json = storage.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&json) {
            Ok(credential) => Some(credential),
            Err(err) => {
                // A blob we can't parse is as good as no session
                tracing::warn!("Discarding unreadable session blob: {err}");
                let _ = storage.remove_item(SESSION_KEY);
                None
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
            let _ = storage.clear();
        }
        // Broad clear: localStorage goes too (theme preference included)
        if let Some(local) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = local.clear();
        }
    }
}

/// The store matching the current platform.
pub fn default_store() -> Arc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserSessionStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemorySessionStore::new())
    }
}
