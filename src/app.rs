//! Connectly Frontend App
//!
//! Root component: restores the session and renders the page for the
//! current view.

use connectly_core::View;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::context::AppContext;
use crate::pages::{AccountPage, CreateInitiativePage, InitiativesPage, LoginPage, RegisterPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Trusted as-is; a stale token surfaces on the first authenticated call.
    let restored = api::session_store().restore();

    let ctx = AppContext::new(restored);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-root">
            {move || match ctx.view.get() {
                View::Initiatives => view! { <InitiativesPage /> }.into_any(),
                View::Login => view! { <LoginPage /> }.into_any(),
                View::Register => view! { <RegisterPage /> }.into_any(),
                View::CreateInitiative => view! { <CreateInitiativePage /> }.into_any(),
                View::Account => view! { <AccountPage /> }.into_any(),
            }}
        </div>
    }
}
