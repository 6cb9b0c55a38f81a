//! Login Page

use connectly_core::{actions, View};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let email = email.get();
        let password = password.get();

        spawn_local(async move {
            match actions::login(&api::client(), &api::session_store(), &email, &password).await {
                Ok(auth) => ctx.signed_in(auth),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <button class="back-link" on:click=move |_| ctx.navigate(View::Initiatives)>
                    "← Back to all initiatives"
                </button>
                <h2>"Login to Connectly"</h2>
                <form on:submit=on_submit>
                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <button type="submit" class="primary-btn">"Sign in"</button>
                    <p class="auth-switch">
                        "Don't have an account? "
                        <button type="button" class="link-btn" on:click=move |_| ctx.navigate(View::Register)>
                            "Sign up"
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}
