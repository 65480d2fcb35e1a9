use super::*;

#[test]
fn profile_default_is_all_empty() {
    let profile = Profile::default();
    assert!(profile.name.is_none());
    assert!(profile.email.is_none());
    assert!(profile.dob.is_none());
    assert!(profile.institution.is_none());
    assert!(profile.created_at.is_none());
}

#[test]
fn profile_serializes_created_at_in_camel_case() {
    let profile = Profile {
        created_at: Some("2026-01-02T03:04:05Z".to_owned()),
        ..Profile::default()
    };
    let json = serde_json::to_value(&profile).expect("serialize");
    assert_eq!(json["createdAt"], "2026-01-02T03:04:05Z");
}

#[test]
fn profile_round_trips_through_json() {
    let profile = Profile {
        name: Some("Jane Doe".to_owned()),
        email: Some("jane@example.com".to_owned()),
        dob: Some("2001-05-14".to_owned()),
        institution: Some("BUET".to_owned()),
        created_at: Some("2026-01-02T03:04:05Z".to_owned()),
    };
    let json = serde_json::to_string(&profile).expect("serialize");
    let back: Profile = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, profile);
}

#[test]
fn identity_deserializes_missing_display_name_as_none() {
    let identity: Identity = serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","display_name":null,"email_verified":false}"#,
    )
    .expect("deserialize");
    assert!(identity.display_name.is_none());
    assert!(!identity.email_verified);
}
