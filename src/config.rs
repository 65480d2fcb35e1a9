//! External-service configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle ships to a browser, so configuration is baked in via
//! `option_env!` rather than read from a runtime environment. When the
//! variables are absent the auth flows are disabled and the site renders
//! in signed-out mode.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the hosted identity service REST API.
pub const IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Base URL of the hosted per-user document store REST API.
pub const DOCUMENT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Identity + document service configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Public API key identifying the project to the identity service.
    pub api_key: &'static str,
    /// Project identifier used to address the document store.
    pub project_id: &'static str,
}

impl ServiceConfig {
    /// Load from `CLUB_IDENTITY_API_KEY` and `CLUB_IDENTITY_PROJECT_ID`
    /// captured at compile time. Returns `None` if either is missing
    /// (auth will be disabled).
    #[must_use]
    pub fn from_build_env() -> Option<Self> {
        let api_key = option_env!("CLUB_IDENTITY_API_KEY")?;
        let project_id = option_env!("CLUB_IDENTITY_PROJECT_ID")?;
        Some(Self { api_key, project_id })
    }

    /// Build an identity-service endpoint URL for the given account operation
    /// (e.g. `"signUp"`, `"signInWithPassword"`, `"lookup"`).
    #[must_use]
    pub fn identity_endpoint(&self, operation: &str) -> String {
        format!("{IDENTITY_BASE_URL}/accounts:{operation}?key={}", self.api_key)
    }

    /// Build the document URL for a user's profile record.
    #[must_use]
    pub fn profile_document_url(&self, identity_id: &str) -> String {
        format!(
            "{DOCUMENT_BASE_URL}/projects/{}/databases/(default)/documents/users/{identity_id}",
            self.project_id
        )
    }
}
