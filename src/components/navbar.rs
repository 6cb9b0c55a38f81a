//! Navigation Bar Component
//!
//! Brand link plus login/register or account/logout, depending on session.

use connectly_core::View;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |view: View| {
        set_menu_open.set(false);
        ctx.navigate(view);
    };
    let logout = move || {
        set_menu_open.set(false);
        ctx.sign_out();
    };

    // Shared by the desktop bar and the mobile menu
    let links = move || match ctx.user() {
        Some(user) => view! {
            <span class="nav-welcome">"Welcome, " {user.name} "!"</span>
            <button class="nav-link" on:click=move |_| go(View::Account)>"Account"</button>
            <button class="nav-link muted" on:click=move |_| logout()>"Logout"</button>
        }
        .into_any(),
        None => view! {
            <button class="nav-btn primary" on:click=move |_| go(View::Register)>"Register"</button>
            <button class="nav-link" on:click=move |_| go(View::Login)>"Login"</button>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar">
            <div class="navbar-row">
                <a
                    href="#"
                    class="brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go(View::Initiatives);
                    }
                >
                    "Connectly"
                </a>
                <div class="navbar-links desktop">{links}</div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar-links mobile">{links}</div>
            </Show>
        </nav>
    }
}
