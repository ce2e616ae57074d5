//! Dioxus application entry point.
//!
//! The root component wires up the shared contexts (theme, notices, auth and
//! the four domain contexts) and mounts the router. Route guards live on the
//! page components themselves, mirroring the way each protected page wraps
//! its content in `PrivateRoute`/`PublicRoute`.

use dioxus::prelude::*;

pub mod components;
pub mod contexts;
pub mod guard;
pub mod notices;
pub mod pages;
pub mod theme;

use contexts::use_portal_providers;
use notices::use_notice_provider;
use pages::{
    AdminDashboard, CourierDashboard, Home, MyOrders, PageNotFound, SignIn, Tracking,
    TrackingDetail,
};
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Theme context first (handles localStorage + DOM class)
    use_theme_provider();

    // Transient notices (guard denials, context errors)
    use_notice_provider();

    // Session store, API gateway, services and all domain contexts
    use_portal_providers();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/tracking")]
    Tracking {},
    #[route("/tracking/:tracking_number")]
    TrackingDetail { tracking_number: String },
    #[route("/sign-in")]
    SignIn {},
    #[route("/my-orders")]
    MyOrders {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/courier/dashboard")]
    CourierDashboard {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
