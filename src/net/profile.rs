//! Document-store client for per-user profile records.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures surface as errors here, but the session manager collapses
//! them to "no profile" so a document-store outage never blocks sign-in.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::Profile;

#[cfg(target_arch = "wasm32")]
use crate::config::ServiceConfig;

/// Errors returned by profile-store operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile request failed: {0}")]
    Transport(String),
    #[error("profile store responded with status {0}")]
    Status(u16),
    #[error("profile service is not configured")]
    NotConfigured,
}

/// Fetch the profile document for an identity. `Ok(None)` means the record
/// does not exist yet (a fresh account).
///
/// # Errors
///
/// `Transport`/`Status` on request failure; the caller decides whether that
/// is fatal (the session manager treats it as an absent profile).
pub async fn fetch(identity_id: &str) -> Result<Option<Profile>, ProfileError> {
    #[cfg(target_arch = "wasm32")]
    {
        let config =
            ServiceConfig::from_build_env().ok_or(ProfileError::NotConfigured)?;
        let resp = authed_request(gloo_net::http::Request::get(
            &config.profile_document_url(identity_id),
        ))
        .send()
        .await
        .map_err(|e| ProfileError::Transport(e.to_string()))?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(ProfileError::Status(resp.status()));
        }
        let document = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProfileError::Transport(e.to_string()))?;
        Ok(Some(document_to_profile(&document)))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = identity_id;
        Ok(None)
    }
}

/// Create or replace the profile document for an identity.
///
/// # Errors
///
/// `Transport`/`Status` on request failure.
pub async fn store(identity_id: &str, profile: &Profile) -> Result<(), ProfileError> {
    #[cfg(target_arch = "wasm32")]
    {
        let config =
            ServiceConfig::from_build_env().ok_or(ProfileError::NotConfigured)?;
        let resp = authed_request(gloo_net::http::Request::patch(
            &config.profile_document_url(identity_id),
        ))
        .json(&profile_to_document(profile))
        .map_err(|e| ProfileError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ProfileError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ProfileError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (identity_id, profile);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn authed_request(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::net::identity::active_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

// =============================================================
// Document wire format
// =============================================================
//
// The store represents documents as `{"fields": {name: {"stringValue": ..}}}`.
// Only string-valued fields are used by this profile schema; anything else
// in the document is ignored.

#[cfg(any(test, target_arch = "wasm32"))]
fn profile_to_document(profile: &Profile) -> serde_json::Value {
    let mut fields = serde_json::Map::new();
    let entries = [
        ("name", &profile.name),
        ("email", &profile.email),
        ("dob", &profile.dob),
        ("institution", &profile.institution),
        ("createdAt", &profile.created_at),
    ];
    for (key, value) in entries {
        if let Some(value) = value {
            fields.insert(
                key.to_owned(),
                serde_json::json!({ "stringValue": value }),
            );
        }
    }
    serde_json::json!({ "fields": fields })
}

#[cfg(any(test, target_arch = "wasm32"))]
fn document_to_profile(document: &serde_json::Value) -> Profile {
    let string_field = |key: &str| {
        document["fields"][key]["stringValue"]
            .as_str()
            .map(str::to_owned)
    };
    Profile {
        name: string_field("name"),
        email: string_field("email"),
        dob: string_field("dob"),
        institution: string_field("institution"),
        created_at: string_field("createdAt"),
    }
}
