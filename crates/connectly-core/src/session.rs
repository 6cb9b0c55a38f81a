//! Session Store
//!
//! Persists the session token and user profile under two keys of a
//! string key-value store (browser `localStorage` in the app).

use crate::error::StoreError;
use crate::models::{AuthSession, Session, User};

/// Raw session token
pub const SESSION_ID_KEY: &str = "session_id";
/// User profile as JSON
pub const USER_KEY: &str = "user";

/// Minimal string storage interface
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// Typed read/write/clear over the two session keys
#[derive(Debug, Clone)]
pub struct SessionStore<K> {
    storage: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    /// Stored session, trusted without contacting the server.
    ///
    /// Both keys must be present and the user must parse; anything
    /// less is cleared and treated as logged out.
    pub fn restore(&self) -> Option<AuthSession> {
        let token = self.storage.get(SESSION_ID_KEY);
        let user = self.storage.get(USER_KEY);

        let restored = match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => match serde_json::from_str::<User>(&user) {
                Ok(user) => Some(AuthSession {
                    session: Session::new(token),
                    user,
                }),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable stored user");
                    None
                }
            },
            (None, None) => return None,
            _ => None,
        };

        match &restored {
            Some(auth) => tracing::info!(user = %auth.user.name, "restored stored session"),
            None => self.clear(),
        }
        restored
    }

    pub fn persist(&self, auth: &AuthSession) -> Result<(), StoreError> {
        let user = serde_json::to_string(&auth.user)?;
        self.storage.set(SESSION_ID_KEY, auth.session.token())?;
        if let Err(e) = self.storage.set(USER_KEY, &user) {
            self.storage.remove(SESSION_ID_KEY);
            return Err(e);
        }
        tracing::info!(user = %auth.user.name, "session stored");
        Ok(())
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_ID_KEY);
        self.storage.remove(USER_KEY);
    }
}
