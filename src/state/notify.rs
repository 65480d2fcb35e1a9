//! Notification sink: provider error codes mapped to user-facing copy, plus
//! the transient toast queue and the submit-flow phases.
//!
//! DESIGN
//! ======
//! Pushing a toast is fire-and-forget for the caller; the toast host owns
//! auto-dismissal. Raw provider error identifiers never reach the queue;
//! unknown codes fall back to a generic message.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::net::identity::AuthCode;

/// Milliseconds a toast stays visible before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 2500;

/// User-facing message for a provider rejection code.
#[must_use]
pub fn user_message(code: AuthCode) -> &'static str {
    match code {
        AuthCode::NotFound => "No account found with this email.",
        AuthCode::WrongPassword => "Incorrect password.",
        AuthCode::InvalidEmail => "Invalid email address.",
        AuthCode::RateLimited => "Too many failed attempts. Please try again later.",
        AuthCode::EmailInUse => "This email is already registered.",
        AuthCode::WeakPassword => "Password is too weak.",
        AuthCode::Other => "Something went wrong. Please try again.",
    }
}

/// Visual category of a toast notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// A single transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing id, unique within the queue's lifetime.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts. Single writer per call site via `RwSignal`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Currently visible notices, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Phases of a credential-form submission.
///
/// `Editing → Submitting → Succeeded`, with failure returning to `Editing`
/// (field contents are preserved by the form, not by this enum).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

impl SubmitPhase {
    /// Submission may only start from `Editing`; re-entry while a request is
    /// in flight is blocked.
    #[must_use]
    pub fn can_submit(self) -> bool {
        matches!(self, Self::Editing)
    }
}
