//! Layout component wrapping all pages.

use dioxus::prelude::*;

use crate::app::notices::{use_notices, Notice};

use super::nav::Nav;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let notices = use_notices();
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Coordina Portal", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: asset!("/public/portal.css") }

        Nav { active: props.nav_active.clone() }

        // Transient notices (guard denials, auth events)
        for notice in notices.list() {
            NoticeBanner { key: "{notice.id}", notice }
        }

        main { class: "container",
            {props.children}
        }
        footer { class: "container footer",
            small { "Coordina Portal v{version}" }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice) -> Element {
    let notices = use_notices();
    let id = notice.id;

    rsx! {
        div { class: "alert alert-warning",
            strong { "{notice.title} " }
            "{notice.body}"
            button {
                class: "btn btn-ghost btn-sm",
                onclick: move |_| notices.dismiss(id),
                "×"
            }
        }
    }
}
