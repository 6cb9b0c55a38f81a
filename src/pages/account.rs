//! Account Page
//!
//! Volunteers manage the initiatives they joined; organizations manage
//! the ones they created. Each mutation re-fetches the account.

use connectly_core::actions;
use connectly_core::{Account, Initiative, Role, View};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Footer, InitiativeCard, Navbar};
use crate::context::use_app_context;
use crate::dialog;
use crate::pages::DELETE_PROMPT;

#[component]
pub fn AccountPage() -> impl IntoView {
    let ctx = use_app_context();

    let (account, set_account) = signal::<Option<Account>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_account = move || {
        set_loading.set(true);
        let session = ctx.token_untracked();
        spawn_local(async move {
            match api::client().get_account(session.as_ref()).await {
                Ok(loaded) => {
                    set_account.set(Some(loaded));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    // Initial load
    Effect::new(move |_| load_account());

    let on_leave = move |id: i64| {
        let auth = ctx.session_untracked();
        spawn_local(async move {
            match actions::leave(&api::client(), auth.as_ref(), id).await {
                Ok(()) => load_account(),
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    let on_delete = move |id: i64| {
        let auth = ctx.session_untracked();
        spawn_local(async move {
            match actions::delete(&api::client(), auth.as_ref(), id).await {
                Ok(()) => load_account(),
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    let content = move || {
        if loading.get() {
            return view! { <p class="page-status">"Loading..."</p> }.into_any();
        }
        if let Some(msg) = error.get() {
            return view! { <p class="page-status error">{msg}</p> }.into_any();
        }
        let Some(Account { user, initiatives }) = account.get() else {
            return ().into_any();
        };

        let (heading, empty_text) = match user.role {
            Role::Volunteer => ("Joined initiatives", "No joined initiatives yet."),
            Role::Organization => ("Your initiatives", "No initiatives yet."),
        };
        let role = user.role;

        view! {
            <p class="account-summary">
                "Logged in as " <strong>{user.name}</strong> " (" {role.as_str()} ")"
            </p>
            <section>
                <h2>{heading}</h2>
                <Show when=move || role == Role::Organization>
                    <button class="primary-btn" on:click=move |_| ctx.navigate(View::CreateInitiative)>
                        "Create New Initiative"
                    </button>
                </Show>
                {initiatives.is_empty().then(|| view! { <p class="empty">{empty_text}</p> })}
                <div class="card-grid">
                    {initiatives
                        .into_iter()
                        .map(|initiative| account_card(initiative, role, on_leave, on_delete))
                        .collect_view()}
                </div>
            </section>
        }
        .into_any()
    };

    view! {
        <Navbar />
        <main class="page">
            <h1>"Account"</h1>
            {content}
        </main>
        <Footer />
    }
}

fn account_card(
    initiative: Initiative,
    role: Role,
    on_leave: impl Fn(i64) + Copy + Send + Sync + 'static,
    on_delete: impl Fn(i64) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = initiative.id;
    view! {
        <InitiativeCard initiative=initiative>
            {match role {
                Role::Volunteer => view! {
                    <button class="danger-btn wide" on:click=move |_| on_leave(id)>"Leave"</button>
                }
                .into_any(),
                Role::Organization => view! {
                    <DeleteConfirmButton button_class="danger-btn" prompt=DELETE_PROMPT on_confirm=move |_: ()| on_delete(id) />
                }
                .into_any(),
            }}
        </InitiativeCard>
    }
}
