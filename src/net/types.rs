//! DTOs for the identity-provider and document-store boundaries.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated identity as reported by the external provider.
///
/// The id is provider-assigned and opaque; this subsystem never derives
/// meaning from it beyond using it as the profile-document key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned unique identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name, if one has been set.
    pub display_name: Option<String>,
    /// Whether the provider has verified the account email.
    pub email_verified: bool,
}

/// Supplementary per-user fields stored in the external document store,
/// keyed by identity id. Every field is optional: a missing or failed
/// profile fetch degrades to `Profile::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name entered at sign-up.
    pub name: Option<String>,
    /// Email recorded at sign-up (informational; identity email is canonical).
    pub email: Option<String>,
    /// Date of birth as an ISO 8601 date string.
    pub dob: Option<String>,
    /// Currently enrolled institution.
    pub institution: Option<String>,
    /// Account-creation timestamp as an ISO 8601 string.
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}
