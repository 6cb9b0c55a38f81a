//! Initiative Card Component
//!
//! Read-only rendering of one initiative. Actions are passed as children.

use connectly_core::Initiative;
use leptos::prelude::*;

#[component]
pub fn InitiativeCard(initiative: Initiative, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let participants = initiative.participant_label();
    let date = initiative.event_date_label();

    view! {
        <div class="initiative-card">
            <div class="card-body">
                <p class="card-creator">{initiative.creator_name}</p>
                <h3 class="card-title">{initiative.title}</h3>
                <p class="card-description">{initiative.description}</p>
                {initiative.location.filter(|l| !l.is_empty()).map(|location| view! {
                    <p class="card-location">"📍 " {location}</p>
                })}
                {date.map(|date| view! { <p class="card-date">"📅 " {date}</p> })}
            </div>
            <div class="card-footer">
                <p class="card-participants">{participants}</p>
                {children.map(|children| children())}
            </div>
        </div>
    }
}
