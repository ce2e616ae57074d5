//! Navigation bar with role-aware entries.
//!
//! The public links are always visible; the dashboard entries dispatch on
//! the signed-in role with an exhaustive match so a new role cannot be
//! forgotten here.

use dioxus::prelude::*;

use crate::app::contexts::use_auth;
use crate::app::theme::{use_theme, Theme};
use crate::domain::Role;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "tracking")
    pub active: String,
}

fn nav_item(active: &str, id: &str, href: &'static str, label: &'static str) -> Element {
    if active == id {
        rsx! {
            li {
                a { href, "aria-current": "page", strong { "{label}" } }
            }
        }
    } else {
        rsx! {
            li {
                a { href, "{label}" }
            }
        }
    }
}

/// Navigation bar component.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let auth = use_auth();
    let theme = use_theme();
    let session = auth.snapshot();
    let active = props.active.as_str();
    let current_theme = theme.get();

    // Role-specific entries, exhaustively dispatched
    let role_items = match session.role() {
        Some(Role::Admin) => rsx! {
            {nav_item(active, "admin", "/admin/dashboard", "Admin dashboard")}
        },
        Some(Role::Courier) => rsx! {
            {nav_item(active, "courier", "/courier/dashboard", "Courier dashboard")}
        },
        Some(Role::Customer) => rsx! {
            {nav_item(active, "my-orders", "/my-orders", "My orders")}
        },
        None => rsx! {},
    };

    rsx! {
        nav {
            ul {
                li {
                    strong { "Coordina" }
                }
            }
            ul {
                {nav_item(active, "home", "/", "Home")}
                {nav_item(active, "tracking", "/tracking", "Tracking")}
                {role_items}
                if session.is_authenticated() {
                    li {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| auth.logout(),
                            "Sign out"
                        }
                    }
                } else {
                    {nav_item(active, "sign-in", "/sign-in", "Sign in")}
                }
                li {
                    select {
                        "aria-label": "Theme",
                        onchange: move |e| theme.set(Theme::parse(&e.value())),
                        for option_theme in [Theme::System, Theme::Light, Theme::Dark] {
                            option {
                                value: option_theme.as_str(),
                                selected: option_theme == current_theme,
                                "{option_theme.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
