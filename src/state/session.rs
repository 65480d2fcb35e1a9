//! Session manager: merges identity notifications with profile fetches into
//! the shared `AuthState` cell.
//!
//! DESIGN
//! ======
//! `SessionCore` is a synchronous state machine so the ordering rules are
//! testable without a browser. Each identity-change notification bumps an
//! epoch; a profile fetch started for an older epoch is a no-op when it
//! finally resolves, so the last-observed identity always wins regardless
//! of fetch completion order. No cancellation is needed.
//!
//! ERROR HANDLING
//! ==============
//! A failed profile fetch degrades to an empty profile and is logged; it is
//! never surfaced to the user and never blocks the session from settling.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::identity;
use crate::net::types::{Identity, Profile};
use crate::state::auth::{AuthState, SessionUser};

/// Claim ticket for an in-flight profile fetch, tied to the epoch of the
/// identity-change notification that started it.
#[derive(Debug)]
pub struct ProfileTicket {
    epoch: u64,
    identity: Identity,
}

impl ProfileTicket {
    /// The identity whose profile should be fetched.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Synchronous core of the session manager.
#[derive(Debug)]
pub struct SessionCore {
    epoch: u64,
    state: AuthState,
}

impl Default for SessionCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCore {
    #[must_use]
    pub fn new() -> Self {
        Self { epoch: 0, state: AuthState::resolving() }
    }

    /// Current merged state.
    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Handle an identity-change notification. A `None` identity settles
    /// immediately; a `Some` identity returns a ticket for the caller to
    /// fetch the profile and apply it.
    pub fn on_identity_changed(&mut self, identity: Option<Identity>) -> Option<ProfileTicket> {
        self.epoch += 1;
        match identity {
            None => {
                self.state.user = None;
                self.state.loading = false;
                None
            }
            Some(identity) => Some(ProfileTicket { epoch: self.epoch, identity }),
        }
    }

    /// Apply a completed profile fetch. Returns false (and changes nothing)
    /// when a newer identity-change notification has superseded the ticket.
    /// A missing or failed fetch passes `None` and merges an empty profile.
    pub fn apply_profile(&mut self, ticket: ProfileTicket, profile: Option<Profile>) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.state.user = Some(SessionUser {
            identity: ticket.identity,
            profile: profile.unwrap_or_default(),
        });
        self.state.loading = false;
        true
    }
}

/// Start the session subsystem: subscribe once to identity changes, keep the
/// shared `RwSignal<AuthState>` in sync, and release the subscription when
/// the owning scope is disposed. Provides the signal as context and returns
/// it for direct use.
pub fn provide_session() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::resolving());
    let core = Rc::new(RefCell::new(SessionCore::new()));

    let subscription = identity::subscribe(Rc::new(move |changed: Option<Identity>| {
        let ticket = core.borrow_mut().on_identity_changed(changed);
        match ticket {
            None => auth.set(core.borrow().state().clone()),
            Some(ticket) => {
                let core = core.clone();
                leptos::task::spawn_local(async move {
                    let fetched = match crate::net::profile::fetch(&ticket.identity().id).await {
                        Ok(profile) => profile,
                        Err(err) => {
                            log::warn!("profile fetch failed, using empty profile: {err}");
                            None
                        }
                    };
                    if core.borrow_mut().apply_profile(ticket, fetched) {
                        auth.set(core.borrow().state().clone());
                    }
                });
            }
        }
    }));
    on_cleanup(move || identity::unsubscribe(subscription));

    provide_context(auth);
    auth
}
