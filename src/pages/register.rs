//! Register Page
//!
//! On success, shows a confirmation and moves to the login page after
//! two seconds.

use connectly_core::actions;
use connectly_core::forms::{name_label, name_placeholder, RegistrationForm};
use connectly_core::{Role, RouteEvent, View};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;

const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();

    let (role, set_role) = signal(Role::Volunteer);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);
        let form = RegistrationForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role: role.get(),
        };

        spawn_local(async move {
            match actions::register(&api::client(), &form).await {
                Ok(()) => {
                    set_success.set(Some("Registration successful! Please log in.".to_string()));
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    // Skip if the user already left this page.
                    if ctx.view.get_untracked() == View::Register {
                        ctx.dispatch(RouteEvent::RegistrationCompleted);
                    }
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <button class="back-link" on:click=move |_| ctx.navigate(View::Initiatives)>
                    "← Back to Initiatives"
                </button>
                <h2>"Create an Account"</h2>
                <form on:submit=on_submit>
                    <label for="role">"I am a..."</label>
                    <select
                        id="role"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| set_role.set(Role::from_form_value(&event_target_value(&ev)))
                    >
                        <option value="volunteer">"Volunteer"</option>
                        <option value="organization">"Organization"</option>
                    </select>

                    <label for="name">{move || name_label(role.get())}</label>
                    <input
                        id="name"
                        required
                        placeholder=move || name_placeholder(role.get())
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        required
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        required
                        placeholder="Create a password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        required
                        placeholder="Confirm your password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    {move || success.get().map(|msg| view! { <p class="form-success">{msg}</p> })}

                    <button type="submit" class="primary-btn">"Register"</button>
                    <p class="auth-switch">
                        "Already have an account? "
                        <button type="button" class="link-btn" on:click=move |_| ctx.navigate(View::Login)>
                            "Login"
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}
