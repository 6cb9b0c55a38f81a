//! Backend Bindings
//!
//! Constructors for the API client and session store used by the pages.

use connectly_core::{ApiClient, ClientConfig, SessionStore};

use crate::storage::BrowserStorage;

/// Client for the backend configured at build time
pub fn client() -> ApiClient {
    ApiClient::new(ClientConfig::from_build_env())
}

/// Session store over `window.localStorage`
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
