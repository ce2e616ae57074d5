//! Route-guard decisions.
//!
//! Pure functions over the auth session so the allow/redirect rules are
//! total and testable. Both guards wait while the session is restoring:
//! protected content must never flash before a redirect, and the sign-in
//! page must not bounce an already-signed-in user before rehydration
//! settles.

use crate::domain::Role;

use super::auth::AuthSession;

/// Outcome for a role-protected subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected children.
    Render,
    /// Rehydration (or an auth operation) is still settling - render
    /// nothing, decide on the next pass.
    Wait,
    /// Not signed in: notice + redirect to sign-in.
    RedirectSignIn,
    /// Signed in but the role is not allowed: notice + redirect home.
    RedirectHome,
}

/// Outcome for a public-only subtree (the sign-in page).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicDecision {
    Render,
    Wait,
    RedirectTo(Landing),
}

/// Role-specific landing destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    AdminDashboard,
    CourierDashboard,
    MyOrders,
}

/// Where an authenticated user lands when they cannot stay where they are.
pub fn landing_route(role: Role) -> Landing {
    match role {
        Role::Admin => Landing::AdminDashboard,
        Role::Courier => Landing::CourierDashboard,
        Role::Customer => Landing::MyOrders,
    }
}

/// Decide access to a subtree restricted to `allowed` roles. An empty
/// `allowed` set means any authenticated user may enter.
pub fn evaluate_private(session: &AuthSession, allowed: &[Role]) -> GuardDecision {
    if session.is_restoring() || session.is_loading() {
        return GuardDecision::Wait;
    }
    if !session.is_authenticated() {
        return GuardDecision::RedirectSignIn;
    }
    match session.role() {
        Some(role) if allowed.is_empty() || allowed.contains(&role) => GuardDecision::Render,
        _ => GuardDecision::RedirectHome,
    }
}

/// Decide access to a public-only subtree.
pub fn evaluate_public(session: &AuthSession) -> PublicDecision {
    if session.is_restoring() {
        return PublicDecision::Wait;
    }
    match session.role() {
        Some(role) if session.is_authenticated() => PublicDecision::RedirectTo(landing_route(role)),
        _ => PublicDecision::Render,
    }
}
