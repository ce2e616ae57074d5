//! Landing page with a quick tracking lookup.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut tracking_number = use_signal(String::new);

    let search = move |_| {
        let number = tracking_number().trim().to_string();
        if number.is_empty() {
            return;
        }
        navigator().push(Route::TrackingDetail {
            tracking_number: number,
        });
    };

    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),

            h1 { "Send it with Coordina" }
            p { class: "text-muted",
                "Create orders, follow your shipments and manage deliveries in one place."
            }

            div { class: "card",
                h3 { "Track a shipment" }
                div { class: "form-grid",
                    input {
                        placeholder: "Tracking number",
                        value: "{tracking_number}",
                        oninput: move |e| tracking_number.set(e.value()),
                    }
                    button { class: "btn", onclick: search, "Track" }
                }
            }

            div { class: "card",
                h3 { "New here?" }
                p {
                    "Sign in or create an account to start sending packages. "
                    a { href: "/sign-in", "Go to sign in" }
                }
            }
        }
    }
}
