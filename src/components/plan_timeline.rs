//! Timeline rendering for a generated spaced-repetition plan.

use leptos::prelude::*;

use crate::net::types::{PlanResponse, ReviewSession, SessionDescription};

/// Render a session description.
///
/// The backend sends either a plain string or an ordered list of blocks
/// with no discriminant; the deserialized enum carries the distinction.
/// Text renders verbatim; each block renders its text plus a formatted
/// dump of its structured extras when present.
fn description_view(description: &SessionDescription) -> AnyView {
    match description {
        SessionDescription::Text(text) => {
            view! { <p class="plan-session__text">{text.clone()}</p> }.into_any()
        }
        SessionDescription::Blocks(blocks) => blocks
            .iter()
            .map(|block| {
                let extras = block
                    .extras
                    .as_ref()
                    .and_then(|value| serde_json::to_string_pretty(value).ok());
                view! {
                    <div class="plan-session__block">
                        <p class="plan-session__text">{block.text.clone()}</p>
                        {extras.map(|dump| {
                            view! { <pre class="plan-session__extras">{dump}</pre> }
                        })}
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any(),
    }
}

#[component]
fn SessionCard(session: ReviewSession) -> impl IntoView {
    view! {
        <div class="plan-session">
            <div class="plan-session__header">
                <span class="plan-session__badge">{session.session_type.clone()}</span>
                <span class="plan-session__date">{session.date.clone()}</span>
            </div>
            {description_view(&session.description)}
        </div>
    }
}

/// Plan summary header plus one card per session, in backend order.
#[component]
pub fn PlanTimeline(plan: PlanResponse) -> impl IntoView {
    let start = format!("Inicio: {}", plan.start_date);
    view! {
        <div class="plan-timeline">
            <div class="plan-timeline__summary">
                <h2 class="plan-timeline__topic">{plan.topic.clone()}</h2>
                <p class="plan-timeline__start">{start}</p>
                <span class="plan-timeline__badge">"Plan Generado"</span>
            </div>

            <div class="plan-timeline__sessions">
                {plan
                    .sessions
                    .into_iter()
                    .map(|session| view! { <SessionCard session=session/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
