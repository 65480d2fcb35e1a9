use super::*;

fn identity(id: &str) -> Identity {
    Identity {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        display_name: Some(format!("User {id}")),
        email_verified: false,
    }
}

fn profile_for(name: &str) -> Profile {
    Profile { name: Some(name.to_owned()), ..Profile::default() }
}

// =============================================================
// Settling and loading transitions
// =============================================================

#[test]
fn starts_loading_with_no_user() {
    let core = SessionCore::new();
    assert!(core.state().loading);
    assert!(core.state().user.is_none());
}

#[test]
fn null_identity_settles_immediately() {
    let mut core = SessionCore::new();
    let ticket = core.on_identity_changed(None);
    assert!(ticket.is_none());
    assert!(!core.state().loading);
    assert!(core.state().user.is_none());
}

#[test]
fn signed_in_identity_settles_when_profile_applies() {
    let mut core = SessionCore::new();
    let ticket = core.on_identity_changed(Some(identity("u1"))).expect("ticket");
    // Still resolving until the profile merge completes.
    assert!(core.state().loading);

    assert!(core.apply_profile(ticket, Some(profile_for("Jane"))));
    assert!(!core.state().loading);
    let user = core.state().user.as_ref().expect("user");
    assert_eq!(user.identity.id, "u1");
    assert_eq!(user.profile.name.as_deref(), Some("Jane"));
}

#[test]
fn loading_never_reverts_after_first_settle() {
    let mut core = SessionCore::new();
    core.on_identity_changed(None);
    assert!(!core.state().loading);

    let ticket = core.on_identity_changed(Some(identity("u1"))).expect("ticket");
    assert!(!core.state().loading);
    core.apply_profile(ticket, None);
    assert!(!core.state().loading);

    core.on_identity_changed(None);
    assert!(!core.state().loading);
}

// =============================================================
// Profile-failure degradation
// =============================================================

#[test]
fn failed_profile_fetch_merges_empty_profile() {
    let mut core = SessionCore::new();
    let ticket = core.on_identity_changed(Some(identity("u1"))).expect("ticket");
    assert!(core.apply_profile(ticket, None));
    let user = core.state().user.as_ref().expect("user");
    assert_eq!(user.profile, Profile::default());
    assert_eq!(user.identity.email, "u1@example.com");
}

// =============================================================
// Ordering: last-observed identity wins
// =============================================================

#[test]
fn stale_fetch_resolving_after_newer_notification_is_a_no_op() {
    let mut core = SessionCore::new();
    let first = core.on_identity_changed(Some(identity("u1"))).expect("ticket");
    let second = core.on_identity_changed(Some(identity("u2"))).expect("ticket");

    // The newer fetch completes first.
    assert!(core.apply_profile(second, Some(profile_for("Second"))));
    // The older fetch completes afterwards and must not overwrite.
    assert!(!core.apply_profile(first, Some(profile_for("First"))));

    let user = core.state().user.as_ref().expect("user");
    assert_eq!(user.identity.id, "u2");
    assert_eq!(user.profile.name.as_deref(), Some("Second"));
}

#[test]
fn stale_fetch_does_not_resurrect_a_signed_out_session() {
    let mut core = SessionCore::new();
    let ticket = core.on_identity_changed(Some(identity("u1"))).expect("ticket");
    core.on_identity_changed(None);

    assert!(!core.apply_profile(ticket, Some(profile_for("Ghost"))));
    assert!(core.state().user.is_none());
    assert!(!core.state().loading);
}

#[test]
fn interleaved_sign_ins_keep_only_the_most_recent() {
    let mut core = SessionCore::new();
    let tickets = ["u1", "u2", "u3"]
        .map(|id| core.on_identity_changed(Some(identity(id))).expect("ticket"));
    let [first, second, third] = tickets;

    // Completion order: u2, u3, u1.
    assert!(!core.apply_profile(second, Some(profile_for("Two"))));
    assert!(core.apply_profile(third, Some(profile_for("Three"))));
    assert!(!core.apply_profile(first, Some(profile_for("One"))));

    let user = core.state().user.as_ref().expect("user");
    assert_eq!(user.identity.id, "u3");
    assert_eq!(user.profile.name.as_deref(), Some("Three"));
}

#[test]
fn refetch_replaces_profile_wholesale_on_identity_change() {
    let mut core = SessionCore::new();
    let first = core.on_identity_changed(Some(identity("u1"))).expect("ticket");
    assert!(core.apply_profile(first, Some(profile_for("Jane"))));

    // Same account signing in again: the old profile must not leak through
    // if the refetch comes back empty.
    let second = core.on_identity_changed(Some(identity("u1"))).expect("ticket");
    assert!(core.apply_profile(second, None));
    let user = core.state().user.as_ref().expect("user");
    assert!(user.profile.name.is_none());
}
