//! Access gate: the render-vs-redirect policy for routes.
//!
//! DESIGN
//! ======
//! Policy is a pure function over `(loading, signed_in, requirement)` so it
//! is idempotent and testable; `install_auth_redirect` is the only place the
//! decision touches navigation, and it replaces history so the back button
//! cannot loop into a gated page.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route where unauthenticated visitors are sent to sign in.
pub const AUTH_ENTRY: &str = "/auth";

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Anyone may view.
    Public,
    /// Only signed-in users may view.
    Authenticated,
}

/// Outcome of evaluating the gate for one route and session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session is still resolving: render a neutral placeholder, decide
    /// nothing yet (avoids a redirect flicker before the session settles).
    Wait,
    /// Render the requested content.
    Render,
    /// Redirect to the given route, replacing history.
    Redirect(&'static str),
}

/// Decide whether to render the route's content.
#[must_use]
pub fn decide(loading: bool, signed_in: bool, requirement: RouteRequirement) -> GateDecision {
    if loading {
        return GateDecision::Wait;
    }
    match requirement {
        RouteRequirement::Authenticated if !signed_in => GateDecision::Redirect(AUTH_ENTRY),
        RouteRequirement::Public | RouteRequirement::Authenticated => GateDecision::Render,
    }
}

/// Navigate per the gate decision whenever auth state changes. History is
/// replaced so the gated page never remains reachable via back-navigation.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, requirement: RouteRequirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let GateDecision::Redirect(target) = decide(state.loading, state.signed_in(), requirement)
        {
            navigate(target, NavigateOptions { replace: true, ..Default::default() });
        }
    });
}
