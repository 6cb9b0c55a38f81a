//! User Actions
//!
//! What happens when the user submits a form or presses a button. The UI
//! applies the returned values to its signals and then re-fetches; nothing
//! here edits a snapshot in place.

use crate::api::{ApiClient, HttpBackend};
use crate::error::{ActionError, ApiError, ApiResult};
use crate::feed::JoinState;
use crate::forms::{InitiativeForm, RegistrationForm};
use crate::models::{AuthSession, Initiative};
use crate::session::{KeyValueStore, SessionStore};

/// Result of pressing "Join"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// Already in the participant list; no request was sent
    AlreadyJoined,
}

/// Log in and persist the session. Nothing is stored on failure.
pub async fn login<B: HttpBackend, K: KeyValueStore>(
    api: &ApiClient<B>,
    store: &SessionStore<K>,
    email: &str,
    password: &str,
) -> ApiResult<AuthSession> {
    let auth = AuthSession::from(api.login(email, password).await?);
    if let Err(e) = store.persist(&auth) {
        // Still logged in for this page load.
        tracing::warn!(error = %e, "could not persist session");
    }
    Ok(auth)
}

pub fn logout<K: KeyValueStore>(store: &SessionStore<K>) {
    store.clear();
    tracing::info!("logged out");
}

pub async fn register<B: HttpBackend>(api: &ApiClient<B>, form: &RegistrationForm) -> Result<(), ActionError> {
    let registration = form.to_registration()?;
    api.register(&registration).await?;
    tracing::info!(role = registration.role.as_str(), "registered");
    Ok(())
}

pub async fn create_initiative<B: HttpBackend>(
    api: &ApiClient<B>,
    auth: Option<&AuthSession>,
    form: &InitiativeForm,
) -> Result<(), ActionError> {
    let session = auth.map(|a| &a.session).ok_or(ApiError::MissingSession)?;
    let draft = form.to_draft()?;
    api.create_initiative(Some(session), &draft).await?;
    tracing::info!(title = %draft.title, "initiative created");
    Ok(())
}

/// Join unless the current user is already listed.
pub async fn join<B: HttpBackend>(
    api: &ApiClient<B>,
    auth: Option<&AuthSession>,
    initiative: &Initiative,
) -> ApiResult<JoinOutcome> {
    match JoinState::of(initiative, auth.map(|a| &a.user)) {
        JoinState::Joined => Ok(JoinOutcome::AlreadyJoined),
        JoinState::Anonymous => Err(ApiError::MissingSession),
        JoinState::CanJoin | JoinState::NotVolunteer => {
            api.join_initiative(auth.map(|a| &a.session), initiative.id).await?;
            Ok(JoinOutcome::Joined)
        }
    }
}

pub async fn leave<B: HttpBackend>(api: &ApiClient<B>, auth: Option<&AuthSession>, initiative_id: i64) -> ApiResult<()> {
    api.leave_initiative(auth.map(|a| &a.session), initiative_id).await
}

pub async fn delete<B: HttpBackend>(api: &ApiClient<B>, auth: Option<&AuthSession>, initiative_id: i64) -> ApiResult<()> {
    api.delete_initiative(auth.map(|a| &a.session), initiative_id).await
}
