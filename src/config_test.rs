use super::*;

fn config() -> ServiceConfig {
    ServiceConfig {
        api_key: "test-key",
        project_id: "club-test",
    }
}

#[test]
fn identity_endpoint_includes_operation_and_key() {
    assert_eq!(
        config().identity_endpoint("signInWithPassword"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=test-key"
    );
}

#[test]
fn profile_document_url_addresses_users_collection() {
    assert_eq!(
        config().profile_document_url("abc123"),
        "https://firestore.googleapis.com/v1/projects/club-test/databases/(default)/documents/users/abc123"
    );
}
