use super::*;

use crate::net::types::{Identity, Profile};
use crate::state::auth::SessionUser;

fn signed_in_state() -> AuthState {
    AuthState {
        user: Some(SessionUser {
            identity: Identity {
                id: "uid-1".to_owned(),
                email: "member@example.com".to_owned(),
                display_name: None,
                email_verified: false,
            },
            profile: Profile::default(),
        }),
        loading: false,
    }
}

#[test]
fn account_link_targets_profile_when_signed_in() {
    assert_eq!(account_target(&signed_in_state()), "/profile");
}

#[test]
fn account_link_targets_auth_entry_when_signed_out() {
    assert_eq!(account_target(&AuthState::default()), "/auth");
}

#[test]
fn account_link_targets_auth_entry_while_resolving() {
    assert_eq!(account_target(&AuthState::resolving()), "/auth");
}

#[test]
fn nav_link_class_marks_only_the_current_route() {
    assert_eq!(
        nav_link_class("/events", "/events"),
        "site-header__link site-header__link--active"
    );
    assert_eq!(nav_link_class("/events/cp", "/events"), "site-header__link");
    assert_eq!(nav_link_class("/", "/events"), "site-header__link");
}
