//! Application Context
//!
//! Current view, logged-in session and the feed reload trigger, provided
//! via Leptos Context API. This is the single in-memory copy of the
//! session; `localStorage` only backs it across page loads.

use connectly_core::actions;
use connectly_core::{AuthSession, RouteEvent, Session, User, View};
use leptos::prelude::*;

use crate::api;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page on screen - read
    pub view: ReadSignal<View>,
    /// Page on screen - write
    set_view: WriteSignal<View>,
    /// Logged-in session, if any - read
    pub auth: ReadSignal<Option<AuthSession>>,
    /// Logged-in session, if any - write
    set_auth: WriteSignal<Option<AuthSession>>,
    /// Trigger to re-fetch the feed - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the feed - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    /// Starts on the feed, logged in when a stored session was restored.
    pub fn new(restored: Option<AuthSession>) -> Self {
        let (view, set_view) = signal(View::default());
        let (auth, set_auth) = signal(restored);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            view,
            set_view,
            auth,
            set_auth,
            reload_trigger,
            set_reload_trigger,
        }
    }

    pub fn dispatch(&self, event: RouteEvent) {
        self.set_view.update(|view| *view = view.after(event));
    }

    pub fn navigate(&self, view: View) {
        self.dispatch(RouteEvent::Navigate(view));
    }

    /// Trigger a re-fetch of the feed
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn user(&self) -> Option<User> {
        self.auth.with(|auth| auth.as_ref().map(|a| a.user.clone()))
    }

    /// Session for an authenticated call, without subscribing.
    pub fn session_untracked(&self) -> Option<AuthSession> {
        self.auth.get_untracked()
    }

    pub fn token_untracked(&self) -> Option<Session> {
        self.auth.with_untracked(|auth| auth.as_ref().map(|a| a.session.clone()))
    }

    /// Called after `actions::login` stored the session.
    pub fn signed_in(&self, auth: AuthSession) {
        self.set_auth.set(Some(auth));
        self.dispatch(RouteEvent::LoginSucceeded);
    }

    pub fn sign_out(&self) {
        actions::logout(&api::session_store());
        self.set_auth.set(None);
        self.dispatch(RouteEvent::LoggedOut);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
