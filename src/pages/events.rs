//! Events catalog: upcoming training with enroll action, previous trainings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Enroll is the one identity-aware action on a public route: signed-in
//! users get an informational toast, signed-out users are sent to the auth
//! entry page with history replaced.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::layout::SiteLayout;
use crate::data::{PREVIOUS_EVENTS, UPCOMING_EVENT};
use crate::state::auth::AuthState;
use crate::state::notify::{ToastKind, ToastState};
use crate::util::gate::AUTH_ENTRY;
use crate::util::nav;

#[component]
pub fn EventsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_enroll = move |_| {
        if auth.get_untracked().signed_in() {
            toasts.update(|state| {
                state.push(ToastKind::Info, "Registration will open shortly.");
            });
        } else {
            nav::replace_with(AUTH_ENTRY);
        }
    };

    view! {
        <SiteLayout>
            <section class="events">
                <h2 class="events__title">
                    <span class="events__title-accent">"Events"</span> " & Trainings"
                </h2>
                <p class="events__lede">
                    "We regularly host free and premium workshops, competitions, and hands-on training sessions for students of all backgrounds. Explore our upcoming and previous events!"
                </p>

                <div class="events__upcoming">
                    <div class="events__upcoming-meta">
                        <span class="events__upcoming-badge">"Upcoming Event"</span>
                        <span class="events__upcoming-duration">{UPCOMING_EVENT.duration}</span>
                    </div>
                    <div class="events__upcoming-card">
                        <img
                            class="events__upcoming-photo"
                            src=UPCOMING_EVENT.photo
                            alt=UPCOMING_EVENT.title
                        />
                        <div class="events__upcoming-body">
                            <h3 class="events__upcoming-title">{UPCOMING_EVENT.title}</h3>
                            <p class="events__upcoming-brief">{UPCOMING_EVENT.brief}</p>
                            <ul class="events__upcoming-taught">
                                {UPCOMING_EVENT
                                    .details
                                    .taught
                                    .iter()
                                    .map(|topic| view! { <li>{*topic}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <div class="events__upcoming-mentor">
                                <img
                                    class="events__upcoming-mentor-photo"
                                    src=UPCOMING_EVENT.details.mentor.photo
                                    alt="mentor"
                                />
                                <span>"Mentor: " <b>{UPCOMING_EVENT.details.mentor.name}</b></span>
                            </div>
                            <div class="events__upcoming-actions">
                                <button class="btn btn--primary" on:click=on_enroll>
                                    "Enroll"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>

                <h3 class="events__previous-title">"Previous Events"</h3>
                <div class="events__grid">
                    {PREVIOUS_EVENTS
                        .iter()
                        .map(|event| view! { <EventCard event=event /> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </SiteLayout>
    }
}
