//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Written only by the session
//! manager (`state::session`).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Identity, Profile};

/// The merged view of identity claims and the profile document, valid for
/// the lifetime of one signed-in identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    /// Claims owned by the identity provider.
    pub identity: Identity,
    /// Supplementary fields from the document store; empty when the record
    /// is missing or its fetch failed.
    pub profile: Profile,
}

impl SessionUser {
    /// Name to show in chrome: display name when set, else the email.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.identity
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.identity.email)
    }
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true from subsystem start until the first identity-change
/// notification settles, and never reverts to true for the same
/// subscription.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the first identity resolution is pending.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// Whether a signed-in user is present.
    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}
