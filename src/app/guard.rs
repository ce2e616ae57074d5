//! Route guard wrapper components.
//!
//! `PrivateRoute` gates a protected subtree by authentication state and role
//! membership; `PublicRoute` bounces signed-in users off the sign-in page to
//! their role's landing route. Both render nothing while the auth context is
//! still restoring, so protected content never flashes before a redirect.

use dioxus::prelude::*;

use crate::domain::Role;
use crate::state::{
    evaluate_private, evaluate_public, GuardDecision, Landing, PublicDecision,
};

use super::contexts::use_auth;
use super::notices::use_notices;
use super::Route;

fn landing_to_route(landing: Landing) -> Route {
    match landing {
        Landing::AdminDashboard => Route::AdminDashboard {},
        Landing::CourierDashboard => Route::CourierDashboard {},
        Landing::MyOrders => Route::MyOrders {},
    }
}

/// Gate `children` behind authentication and (optionally) role membership.
/// An empty `allowed` set admits any authenticated user.
#[component]
pub fn PrivateRoute(
    #[props(default = Vec::new())] allowed: Vec<Role>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let notices = use_notices();

    // Redirects are side effects: run them from an effect, re-evaluated
    // whenever the auth session changes.
    let allowed_for_effect = allowed.clone();
    use_effect(move || {
        match evaluate_private(&auth.snapshot(), &allowed_for_effect) {
            GuardDecision::RedirectSignIn => {
                notices.warn("Whoops...", "You must sign in to access this section");
                navigator().replace(Route::SignIn {});
            }
            GuardDecision::RedirectHome => {
                notices.warn("Whoops...", "You do not have permission to be here");
                navigator().replace(Route::Home {});
            }
            GuardDecision::Render | GuardDecision::Wait => {}
        }
    });

    match evaluate_private(&auth.snapshot(), &allowed) {
        GuardDecision::Render => rsx! {
            {children}
        },
        // Waiting or redirecting: render nothing
        _ => rsx! {},
    }
}

/// Render `children` only for signed-out visitors; everyone else goes to
/// their landing route.
#[component]
pub fn PublicRoute(children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if let PublicDecision::RedirectTo(landing) = evaluate_public(&auth.snapshot()) {
            navigator().replace(landing_to_route(landing));
        }
    });

    match evaluate_public(&auth.snapshot()) {
        PublicDecision::Render => rsx! {
            {children}
        },
        _ => rsx! {},
    }
}
