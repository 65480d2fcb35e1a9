//! Card view for a completed event in the catalog grid.

use leptos::prelude::*;

use crate::data::ClubEvent;

/// Compact event card with mentor, summary, and a details link.
#[component]
pub fn EventCard(event: &'static ClubEvent) -> impl IntoView {
    let details_href = format!("/events/{}", event.id);

    view! {
        <article class="event-card">
            <img class="event-card__photo" src=event.photo alt=event.title />
            <div class="event-card__body">
                <div class="event-card__mentor">
                    <img class="event-card__mentor-photo" src=event.details.mentor.photo alt="mentor" />
                    <div>
                        <div class="event-card__mentor-name">{event.details.mentor.name}</div>
                        <div class="event-card__mentor-role">"Mentor"</div>
                    </div>
                </div>
                <h4 class="event-card__title">{event.title}</h4>
                <p class="event-card__brief">{event.brief}</p>
                <p class="event-card__duration">"Duration: " {event.duration}</p>
                <ul class="event-card__taught">
                    {event
                        .details
                        .taught
                        .iter()
                        .map(|topic| view! { <li>{*topic}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="event-card__actions">
                    <a href=details_href class="btn btn--outline">
                        "View details"
                    </a>
                </div>
            </div>
        </article>
    }
}
