//! Connectly Core
//!
//! Platform-neutral layer of the Connectly client:
//! - models: entities returned by the backend
//! - api: HTTP client for the REST endpoints
//! - session: persisted login state
//! - router: which page is on screen
//! - feed: last initiative snapshot and the joined check
//! - forms: input validation before a request is sent
//! - actions: user actions combining the pieces above
//!
//! Nothing here touches the DOM, so the whole crate is tested natively.

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod forms;
pub mod models;
pub mod router;
pub mod session;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, ApiRequest, HttpBackend, Method, RawResponse, ReqwestBackend};
pub use config::ClientConfig;
pub use error::{ActionError, ApiError, ApiResult, FailureKind, FormError, Operation, StoreError};
pub use feed::{FeedState, JoinState};
pub use models::{Account, AuthSession, Initiative, LoginResponse, Participant, Role, Session, User};
pub use router::{RouteEvent, View};
pub use session::{KeyValueStore, SessionStore};
