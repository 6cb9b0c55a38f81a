use connectly_core::{RouteEvent, View};
use leptos::prelude::*;

use crate::components::InitiativeForm;
use crate::context::use_app_context;

#[component]
pub fn CreateInitiativePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page narrow">
            <button class="back-link" on:click=move |_| ctx.navigate(View::Initiatives)>
                "← Back to all initiatives"
            </button>
            // The feed re-fetches when it mounts again.
            <InitiativeForm on_created=move |_: ()| ctx.dispatch(RouteEvent::InitiativeCreated) />
        </div>
    }
}
