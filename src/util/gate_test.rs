use super::*;

// =============================================================
// Loading: never a redirect
// =============================================================

#[test]
fn loading_waits_regardless_of_requirement() {
    assert_eq!(decide(true, false, RouteRequirement::Public), GateDecision::Wait);
    assert_eq!(decide(true, false, RouteRequirement::Authenticated), GateDecision::Wait);
    assert_eq!(decide(true, true, RouteRequirement::Authenticated), GateDecision::Wait);
}

// =============================================================
// Settled decisions
// =============================================================

#[test]
fn public_routes_always_render_once_settled() {
    assert_eq!(decide(false, false, RouteRequirement::Public), GateDecision::Render);
    assert_eq!(decide(false, true, RouteRequirement::Public), GateDecision::Render);
}

#[test]
fn authenticated_route_renders_for_signed_in_user() {
    assert_eq!(
        decide(false, true, RouteRequirement::Authenticated),
        GateDecision::Render
    );
}

#[test]
fn authenticated_route_redirects_signed_out_user_to_auth_entry() {
    assert_eq!(
        decide(false, false, RouteRequirement::Authenticated),
        GateDecision::Redirect(AUTH_ENTRY)
    );
}

#[test]
fn decision_is_idempotent_for_unchanged_inputs() {
    let first = decide(false, false, RouteRequirement::Authenticated);
    let second = decide(false, false, RouteRequirement::Authenticated);
    assert_eq!(first, second);
}
