//! Delete Confirm Button Component
//!
//! Destructive actions take two clicks: the first asks, the second acts.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ConfirmStep {
    #[default]
    Idle,
    Asking,
}

impl ConfirmStep {
    /// Next step after a press, and whether the action should run now.
    fn press(self, confirmed: bool) -> (ConfirmStep, bool) {
        match (self, confirmed) {
            (ConfirmStep::Idle, _) => (ConfirmStep::Asking, false),
            (ConfirmStep::Asking, confirmed) => (ConfirmStep::Idle, confirmed),
        }
    }
}

/// Inline two-step delete button.
///
/// `prompt` is shown next to the ✓/✗ buttons while asking.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, default = "Delete".to_string())] label: String,
) -> impl IntoView {
    let (step, set_step) = signal(ConfirmStep::Idle);

    let press = move |confirmed: bool| {
        let (next, run) = step.get_untracked().press(confirmed);
        set_step.set(next);
        if run {
            on_confirm.run(());
        }
    };

    move || match step.get() {
        ConfirmStep::Idle => view! {
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    press(false);
                }
            >
                {label.clone()}
            </button>
        }
        .into_any(),
        ConfirmStep::Asking => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        press(true);
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        press(false);
                    }
                >
                    "✗"
                </button>
            </span>
        }
        .into_any(),
    }
}
