//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use connectly_core::FeedState;
use leptos::prelude::*;
use reactive_stores::Store;

/// Feed snapshot and the active search term
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last initiatives snapshot, replaced on every fetch
    pub feed: FeedState,
    /// Search term sent with the next fetch, as typed
    pub search: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
