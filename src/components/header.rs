//! Sticky site header with primary navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile link is identity-aware: it targets the profile page for a
//! signed-in user and the auth entry page otherwise, so the access gate on
//! the profile route is never bounced through needlessly.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

/// Site-wide header bar with brand mark and navigation links.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let profile_href = move || account_target(&auth.get());
    let profile_class = move || nav_link_class(&pathname.get(), "/profile");

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="/" class="site-header__brand">
                    "Team " <span class="site-header__brand-accent">"BlackCat"</span>
                </a>
                <nav class="site-header__nav">
                    <a href="/who-we-are" class=move || nav_link_class(&pathname.get(), "/who-we-are")>
                        "Who are we"
                    </a>
                    <a href="/achievements" class=move || nav_link_class(&pathname.get(), "/achievements")>
                        "Achievements"
                    </a>
                    <a href="/events" class=move || nav_link_class(&pathname.get(), "/events")>
                        "Events"
                    </a>
                    <a href=profile_href class=profile_class title="Your Profile">
                        "Your Profile"
                    </a>
                </nav>
            </div>
        </header>
    }
}

/// Where the account link points: profile when signed in, auth entry
/// otherwise. Resolution in progress counts as signed out; the profile
/// route's own gate settles the final destination.
fn account_target(auth: &AuthState) -> &'static str {
    if auth.signed_in() { "/profile" } else { "/auth" }
}

fn nav_link_class(current_path: &str, href: &str) -> &'static str {
    if current_path == href {
        "site-header__link site-header__link--active"
    } else {
        "site-header__link"
    }
}
