use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn identity(id: &str) -> Identity {
    Identity {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        display_name: None,
        email_verified: false,
    }
}

// =============================================================
// AuthCode parsing
// =============================================================

#[test]
fn auth_code_parses_known_identifiers() {
    assert_eq!(AuthCode::parse("EMAIL_EXISTS"), AuthCode::EmailInUse);
    assert_eq!(AuthCode::parse("EMAIL_NOT_FOUND"), AuthCode::NotFound);
    assert_eq!(AuthCode::parse("INVALID_PASSWORD"), AuthCode::WrongPassword);
    assert_eq!(AuthCode::parse("INVALID_EMAIL"), AuthCode::InvalidEmail);
    assert_eq!(
        AuthCode::parse("TOO_MANY_ATTEMPTS_TRY_LATER"),
        AuthCode::RateLimited
    );
    assert_eq!(AuthCode::parse("WEAK_PASSWORD"), AuthCode::WeakPassword);
}

#[test]
fn auth_code_ignores_trailing_explanation() {
    assert_eq!(
        AuthCode::parse("WEAK_PASSWORD : Password should be at least 6 characters"),
        AuthCode::WeakPassword
    );
}

#[test]
fn auth_code_unknown_identifiers_map_to_other() {
    assert_eq!(AuthCode::parse("SOMETHING_NEW"), AuthCode::Other);
    assert_eq!(AuthCode::parse(""), AuthCode::Other);
}

#[test]
fn rejection_code_reads_provider_error_body() {
    let body = r#"{"error":{"message":"EMAIL_EXISTS","code":400}}"#;
    assert_eq!(rejection_code(body), AuthCode::EmailInUse);
}

#[test]
fn rejection_code_unparseable_body_maps_to_other() {
    assert_eq!(rejection_code("<html>504</html>"), AuthCode::Other);
    assert_eq!(rejection_code(""), AuthCode::Other);
}

#[test]
fn identity_error_code_collapses_transport_to_other() {
    let err = IdentityError::Transport("connection reset".to_owned());
    assert_eq!(err.code(), AuthCode::Other);
    assert_eq!(IdentityError::NotConfigured.code(), AuthCode::Other);
    let rejected = IdentityError::Rejected { code: AuthCode::WrongPassword };
    assert_eq!(rejected.code(), AuthCode::WrongPassword);
}

// =============================================================
// Wire-format parsing
// =============================================================

#[test]
fn grant_identity_reports_unverified_email() {
    let grant: TokenGrant = serde_json::from_str(
        r#"{"localId":"u1","idToken":"tok","email":"a@b.com","displayName":"Jane"}"#,
    )
    .expect("deserialize");
    let identity = grant_identity(&grant);
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.email, "a@b.com");
    assert_eq!(identity.display_name.as_deref(), Some("Jane"));
    assert!(!identity.email_verified);
}

#[test]
fn lookup_identity_takes_first_user() {
    let response: LookupResponse = serde_json::from_str(
        r#"{"users":[{"localId":"u1","email":"a@b.com","emailVerified":true}]}"#,
    )
    .expect("deserialize");
    let identity = lookup_identity(response).expect("identity");
    assert_eq!(identity.id, "u1");
    assert!(identity.email_verified);
    assert!(identity.display_name.is_none());
}

#[test]
fn lookup_identity_empty_user_list_is_none() {
    let response: LookupResponse = serde_json::from_str(r#"{"users":[]}"#).expect("deserialize");
    assert!(lookup_identity(response).is_none());
}

// =============================================================
// IdentityHub
// =============================================================

#[test]
fn hub_starts_unresolved_with_no_listeners() {
    let hub = IdentityHub::default();
    assert!(!hub.is_resolved());
    assert!(hub.current().is_none());
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn hub_notifies_subscribers_in_order_received() {
    let hub = IdentityHub::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    hub.subscribe(Rc::new(move |identity: Option<Identity>| {
        seen_cb.borrow_mut().push(identity.map(|i| i.id));
    }));

    hub.notify(Some(identity("u1")));
    hub.notify(None);
    hub.notify(Some(identity("u2")));

    assert_eq!(
        *seen.borrow(),
        vec![Some("u1".to_owned()), None, Some("u2".to_owned())]
    );
}

#[test]
fn hub_replays_resolved_state_to_late_subscribers() {
    let hub = IdentityHub::default();
    hub.notify(Some(identity("u1")));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    hub.subscribe(Rc::new(move |identity: Option<Identity>| {
        seen_cb.borrow_mut().push(identity.map(|i| i.id));
    }));

    assert_eq!(*seen.borrow(), vec![Some("u1".to_owned())]);
}

#[test]
fn hub_replays_signed_out_state_once_resolved() {
    let hub = IdentityHub::default();
    hub.notify(None);

    let calls = Rc::new(RefCell::new(0));
    let calls_cb = calls.clone();
    hub.subscribe(Rc::new(move |identity: Option<Identity>| {
        assert!(identity.is_none());
        *calls_cb.borrow_mut() += 1;
    }));

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn hub_does_not_replay_before_first_resolution() {
    let hub = IdentityHub::default();
    let calls = Rc::new(RefCell::new(0));
    let calls_cb = calls.clone();
    hub.subscribe(Rc::new(move |_| {
        *calls_cb.borrow_mut() += 1;
    }));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn hub_unsubscribe_stops_notifications_and_is_idempotent() {
    let hub = IdentityHub::default();
    let calls = Rc::new(RefCell::new(0));
    let calls_cb = calls.clone();
    let id = hub.subscribe(Rc::new(move |_| {
        *calls_cb.borrow_mut() += 1;
    }));
    assert_eq!(hub.listener_count(), 1);

    hub.unsubscribe(id);
    hub.unsubscribe(id);
    assert_eq!(hub.listener_count(), 0);

    hub.notify(Some(identity("u1")));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn hub_subscriber_may_unsubscribe_during_notification() {
    let hub = IdentityHub::default();
    let hub_inner = hub.clone();
    let id_cell = Rc::new(RefCell::new(0_u64));
    let id_for_cb = id_cell.clone();
    let id = hub.subscribe(Rc::new(move |_| {
        hub_inner.unsubscribe(*id_for_cb.borrow());
    }));
    *id_cell.borrow_mut() = id;

    hub.notify(Some(identity("u1")));
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn hub_current_tracks_last_notification() {
    let hub = IdentityHub::default();
    hub.notify(Some(identity("u1")));
    assert_eq!(hub.current().map(|i| i.id), Some("u1".to_owned()));
    hub.notify(None);
    assert!(hub.current().is_none());
    assert!(hub.is_resolved());
}
