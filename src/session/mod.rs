//! Session and role model.
//!
//! A [`Session`] is the client-held record of the current user's
//! authentication token and role claim. An anonymous visitor is a session
//! without a token, never an error. The [`SessionStore`] trait is the
//! persistence boundary: localStorage in the browser, in-memory elsewhere.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted session.
pub const STORAGE_KEY: &str = "propcare.session";

/// Closed set of authenticated roles. Anonymous visitors have no role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Supervisor,
    Cleaner,
    Guest,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Supervisor => "supervisor",
            Role::Cleaner => "cleaner",
            Role::Guest => "guest",
        }
    }

    /// Parses a backend role tag. The backend uses "provider" and
    /// "supervisor" interchangeably for the same role.
    pub fn parse(tag: &str) -> Option<Role> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "client" => Some(Role::Client),
            "supervisor" | "provider" => Some(Role::Supervisor),
            "cleaner" => Some(Role::Cleaner),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }
}

/// The authenticated identity of the current browser tab.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn anonymous() -> Session {
        Session::default()
    }

    pub fn authenticated(token: impl Into<String>, role: Role, user_id: impl Into<String>) -> Session {
        Session {
            token: Some(token.into()),
            role: Some(role),
            user_id: Some(user_id.into()),
        }
    }

    /// A session counts as authenticated only with a non-blank token.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// Decodes a persisted session; anything malformed becomes anonymous.
pub fn decode(raw: &str) -> Session {
    serde_json::from_str(raw).unwrap_or_else(|_| Session::anonymous())
}

/// Persistence boundary for the session. Implementations never error:
/// unreadable state degrades to an anonymous session.
pub trait SessionStore {
    fn load(&self) -> Session;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// In-memory store used on the server (SSR renders are per-request
/// anonymous) and in tests.
#[derive(Default)]
pub struct MemoryStore {
    slot: std::sync::Mutex<Session>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Session {
        self.slot
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|_| Session::anonymous())
    }

    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = session.clone();
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Session::anonymous();
        }
    }
}

/// Browser store over `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageStore {
    fn load(&self) -> Session {
        Self::storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .map(|raw| decode(&raw))
            .unwrap_or_else(Session::anonymous)
    }

    fn save(&self, session: &Session) {
        if let (Some(storage), Ok(raw)) = (Self::storage(), serde_json::to_string(session)) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
