//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Keyword search over the feed; the backend does the matching.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (term, set_term) = signal(store.search().get_untracked());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        *store.search().write() = term.get();
        ctx.reload();
    };

    view! {
        <form class="search-bar" on:submit=on_search>
            <input
                type="search"
                placeholder="Search initiatives..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
