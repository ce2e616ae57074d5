//! Catch-all page for unknown routes.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Not-found page component (catch-all route).
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Page not found".to_string(),
            nav_active: String::new(),

            h1 { "Page not found" }
            p { class: "text-muted", "Sorry, there is nothing at {path}." }
            p {
                a { href: "/", "Back to home" }
            }
        }
    }
}
