//! Initiatives Feed Page
//!
//! Fetches on mount, on search and whenever the reload trigger fires.
//! Every mutation is followed by a reload rather than a local edit.

use connectly_core::actions::{self, JoinOutcome};
use connectly_core::{Initiative, JoinState, View};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Footer, InitiativeCard, Navbar, SearchBar};
use crate::context::use_app_context;
use crate::dialog;
use crate::pages::DELETE_PROMPT;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InitiativesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load feed on mount and when trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let search = store.search().get_untracked();
        tracing::debug!(trigger, search = %search, "loading initiatives");
        store.feed().write().begin_fetch();
        spawn_local(async move {
            let result = api::client().fetch_initiatives(Some(&search)).await;
            store.feed().write().apply(result);
        });
    });

    let is_organization = move || ctx.user().is_some_and(|u| u.is_organization());

    view! {
        <Navbar />
        <main class="page">
            <header class="page-header">
                <h1>"Connectly"</h1>
                <p class="tagline">"Community initiatives, right in your neighborhood."</p>
            </header>

            <div class="feed-toolbar">
                <SearchBar />
                <Show when=is_organization>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(View::CreateInitiative)>
                        "Create New Initiative"
                    </button>
                </Show>
            </div>

            {move || {
                let feed = store.feed().read();
                if feed.is_pending() {
                    view! { <p class="feed-status">"Loading initiatives..."</p> }.into_any()
                } else if let Some(err) = feed.error() {
                    view! { <p class="feed-status error">"Error: " {err.to_string()}</p> }.into_any()
                } else if feed.initiatives().is_empty() {
                    view! { <p class="feed-status">"No initiatives found."</p> }.into_any()
                } else {
                    let initiatives = feed.initiatives().to_vec();
                    view! {
                        <div class="card-grid">
                            <For
                                each=move || initiatives.clone()
                                key=|initiative| initiative.id
                                children=move |initiative| {
                                    view! {
                                        <InitiativeCard initiative=initiative.clone()>
                                            <FeedCardActions initiative=initiative />
                                        </InitiativeCard>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
        <Footer />
    }
}

/// Join / Joined! / log in / delete, depending on who is looking
#[component]
fn FeedCardActions(initiative: Initiative) -> impl IntoView {
    let ctx = use_app_context();
    let id = initiative.id;

    let on_join = move |initiative: Initiative| {
        let auth = ctx.session_untracked();
        spawn_local(async move {
            match actions::join(&api::client(), auth.as_ref(), &initiative).await {
                Ok(JoinOutcome::Joined) => ctx.reload(),
                Ok(JoinOutcome::AlreadyJoined) => {}
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    let on_delete = move |_: ()| {
        let auth = ctx.session_untracked();
        spawn_local(async move {
            match actions::delete(&api::client(), auth.as_ref(), id).await {
                Ok(()) => ctx.reload(),
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    // Re-rendered on login/logout
    move || {
        let user = ctx.user();
        let can_delete = user.as_ref().is_some_and(|u| initiative.can_delete(u));

        let join_control = match JoinState::of(&initiative, user.as_ref()) {
            JoinState::Anonymous => view! {
                <button class="secondary-btn" on:click=move |_| ctx.navigate(View::Login)>"Log in to join"</button>
            }
            .into_any(),
            JoinState::Joined => view! {
                <button class="joined-btn" disabled>"Joined!"</button>
            }
            .into_any(),
            JoinState::CanJoin => {
                let initiative = initiative.clone();
                view! {
                    <button class="primary-btn" on:click=move |_| on_join(initiative.clone())>"Join"</button>
                }
                .into_any()
            }
            JoinState::NotVolunteer => ().into_any(),
        };

        view! {
            <div class="card-actions">
                {join_control}
                {can_delete.then(|| view! { <DeleteConfirmButton button_class="danger-btn" prompt=DELETE_PROMPT on_confirm=on_delete /> })}
            </div>
        }
    }
}
