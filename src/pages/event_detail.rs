//! Event detail page keyed by the `/events/:id` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::SiteLayout;
use crate::data::{ClubEvent, find_event};

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let event = move || {
        params
            .get()
            .get("id")
            .and_then(|id| find_event(&id))
    };

    view! {
        <SiteLayout>
            {move || match event() {
                Some(event) => event_body(event).into_any(),
                None => view! { <p class="event-detail__missing">"Event not found."</p> }.into_any(),
            }}
        </SiteLayout>
    }
}

fn event_body(event: &'static ClubEvent) -> impl IntoView {
    view! {
        <div class="event-detail">
            <a href="/events" class="event-detail__back">"\u{2190} Back to Events"</a>
            <img class="event-detail__photo" src=event.photo alt=event.title />
            <h2 class="event-detail__title">{event.title}</h2>
            <p class="event-detail__brief">{event.brief}</p>
            <p class="event-detail__duration">"Duration: " {event.duration}</p>
            <div class="event-detail__mentor">
                <img class="event-detail__mentor-photo" src=event.details.mentor.photo alt="mentor" />
                <div>"Mentor: " <b>{event.details.mentor.name}</b></div>
            </div>
            <div class="event-detail__columns">
                <div>
                    <div class="event-detail__heading">"Syllabus & Timeline"</div>
                    <ul class="event-detail__list">
                        {event
                            .details
                            .syllabus
                            .iter()
                            .map(|entry| {
                                view! {
                                    <li>
                                        <span class="event-detail__when">{entry.when} ": "</span>
                                        {entry.topic}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <div class="event-detail__heading">"Features"</div>
                    <ul class="event-detail__list">
                        {event
                            .details
                            .features
                            .iter()
                            .map(|feature| view! { <li>{*feature}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
            <div>
                <div class="event-detail__heading">"What was taught"</div>
                <ul class="event-detail__list">
                    {event
                        .details
                        .taught
                        .iter()
                        .map(|topic| view! { <li>{*topic}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
