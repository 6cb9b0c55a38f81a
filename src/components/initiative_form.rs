//! Initiative Form Component
//!
//! Collects a new initiative and posts it. The parent decides what happens
//! after a successful create.

use connectly_core::actions;
use connectly_core::forms::InitiativeForm as InitiativeFields;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn InitiativeForm(#[prop(into)] on_created: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (event_date, set_event_date) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let fields = InitiativeFields {
            title: title.get(),
            description: description.get(),
            location: location.get(),
            event_date: event_date.get(),
        };
        let auth = ctx.session_untracked();

        spawn_local(async move {
            match actions::create_initiative(&api::client(), auth.as_ref(), &fields).await {
                Ok(()) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_location.set(String::new());
                    set_event_date.set(String::new());
                    on_created.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="initiative-form">
            <h2>"Create a New Initiative"</h2>
            <form on:submit=on_submit>
                <input
                    name="title"
                    placeholder="Initiative Title"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    name="description"
                    placeholder="Describe your initiative..."
                    required
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <div class="form-row">
                    <input
                        name="location"
                        placeholder="Location (e.g., Moratuwa Beach)"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        name="event_date"
                        prop:value=move || event_date.get()
                        on:input=move |ev| set_event_date.set(event_target_value(&ev))
                    />
                </div>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="primary-btn">"Post Initiative"</button>
            </form>
        </div>
    }
}
