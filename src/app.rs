//! Application shell: context provisioning and routing.
//!
//! ARCHITECTURE
//! ============
//! Contexts are provided once here, before any route renders: the toast
//! queue, then the session signal (which subscribes to identity changes).
//! `identity::start` kicks off session restore last so the first
//! notification always finds the session manager listening.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast::ToastHost;
use crate::net::identity;
use crate::pages::achievements::AchievementsPage;
use crate::pages::auth::AuthPage;
use crate::pages::event_detail::EventDetailPage;
use crate::pages::events::EventsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::who_we_are::WhoWeArePage;
use crate::state::notify::ToastState;
use crate::state::session::provide_session;

/// Root component: provides shared state and declares the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ToastState::default()));
    provide_session();
    identity::start();

    view! {
        <Title text="Team BlackCat" />
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/who-we-are") view=WhoWeArePage />
                <Route path=path!("/achievements") view=AchievementsPage />
                <Route path=path!("/events") view=EventsPage />
                <Route path=path!("/events/:id") view=EventDetailPage />
                <Route path=path!("/auth") view=AuthPage />
                <Route path=path!("/profile") view=ProfilePage />
            </Routes>
        </Router>
        <ToastHost />
    }
}
