//! Profile page, gated to signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only authenticated route. While the session is resolving it renders
//! a neutral placeholder; once settled it either shows the merged identity
//! and profile or redirects to the auth entry page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::SiteLayout;
use crate::net::identity;
use crate::state::auth::AuthState;
use crate::util::gate::{RouteRequirement, install_auth_redirect};
use crate::util::nav;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    install_auth_redirect(auth, RouteRequirement::Authenticated, use_navigate());

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            identity::sign_out().await;
            nav::replace_with("/");
        });
    };

    view! {
        <SiteLayout>
            <Show
                when=move || {
                    let state = auth.get();
                    !state.loading && state.signed_in()
                }
                fallback=move || {
                    view! {
                        <p class="profile__placeholder">
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting..." }
                            }}
                        </p>
                    }
                }
            >
                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            let label = user.display_label().to_owned();
                            let avatar = format!(
                                "https://api.dicebear.com/9.x/initials/svg?seed={label}"
                            );
                            let heading = user
                                .identity
                                .display_name
                                .clone()
                                .filter(|name| !name.trim().is_empty())
                                .unwrap_or_else(|| "Unnamed".to_owned());
                            view! {
                                <div class="profile">
                                    <img class="profile__avatar" src=avatar alt="avatar" />
                                    <h3 class="profile__name">{heading}</h3>
                                    <p class="profile__email">{user.identity.email.clone()}</p>
                                    <div class="profile__rows">
                                        <Row
                                            label="Date of birth"
                                            value=field_or_dash(user.profile.dob.as_deref())
                                        />
                                        <Row
                                            label="Institution"
                                            value=field_or_dash(user.profile.institution.as_deref())
                                        />
                                        <Row
                                            label="Member since"
                                            value=member_since(user.profile.created_at.as_deref())
                                        />
                                    </div>
                                    <div class="profile__actions">
                                        <button class="btn btn--outline" on:click=on_logout>
                                            "Log out"
                                        </button>
                                        <a href="/events" class="btn btn--primary">
                                            "Browse Events"
                                        </a>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </SiteLayout>
    }
}

/// One labelled profile field.
#[component]
fn Row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="profile__row">
            <span class="profile__row-label">{label} ": "</span>
            <span class="profile__row-value">{value}</span>
        </div>
    }
}

fn field_or_dash(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_owned(),
        _ => "\u{2014}".to_owned(),
    }
}

/// Joining date shown as the date portion of the stored timestamp.
fn member_since(created_at: Option<&str>) -> String {
    let date = created_at
        .and_then(|stamp| stamp.split('T').next())
        .filter(|date| !date.is_empty());
    match date {
        Some(date) => date.to_owned(),
        None => "\u{2014}".to_owned(),
    }
}
