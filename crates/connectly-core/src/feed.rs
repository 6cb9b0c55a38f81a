//! Initiative Feed State
//!
//! Holds the last full snapshot returned by the server. The snapshot is
//! never edited locally; every fetch replaces it wholesale.

use crate::error::ApiResult;
use crate::models::{Initiative, User};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Snapshot {
    #[default]
    NotFetched,
    Fetched(Vec<Initiative>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    snapshot: Snapshot,
    loading: bool,
    error: Option<String>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a fetch result. Whichever fetch resolves last wins.
    pub fn apply(&mut self, result: ApiResult<Vec<Initiative>>) {
        self.loading = false;
        match result {
            Ok(initiatives) => {
                self.snapshot = Snapshot::Fetched(initiatives);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True until the first fetch settles, and during every later one.
    pub fn is_pending(&self) -> bool {
        self.loading || (!self.is_fetched() && self.error.is_none())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self.snapshot, Snapshot::Fetched(_))
    }

    /// Snapshot contents; empty before the first successful fetch.
    pub fn initiatives(&self) -> &[Initiative] {
        match &self.snapshot {
            Snapshot::Fetched(list) => list,
            Snapshot::NotFetched => &[],
        }
    }

    pub fn find(&self, id: i64) -> Option<&Initiative> {
        self.initiatives().iter().find(|i| i.id == id)
    }
}

/// What the join control on a card should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinState {
    /// Nobody logged in
    Anonymous,
    /// Organizations do not join
    NotVolunteer,
    /// Current user's name is already in the participant list
    Joined,
    CanJoin,
}

impl JoinState {
    pub fn of(initiative: &Initiative, user: Option<&User>) -> Self {
        match user {
            None => JoinState::Anonymous,
            Some(u) if !u.is_volunteer() => JoinState::NotVolunteer,
            // Matches by display name; two volunteers with the same name collide.
            Some(u) if initiative.has_participant(&u.name) => JoinState::Joined,
            Some(_) => JoinState::CanJoin,
        }
    }
}
