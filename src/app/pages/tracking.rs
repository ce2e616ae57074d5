//! Shipment tracking pages.
//!
//! `Tracking` is the search form; `TrackingDetail` looks up a tracking
//! number through the shipment context and renders the denormalized view.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::contexts::use_shipments;
use crate::app::Route;
use crate::domain::{ShipmentDetail, ShipmentStatus};

/// Tracking search page component.
#[component]
pub fn Tracking() -> Element {
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
            title: "Tracking".to_string(),
            nav_active: "tracking".to_string(),

            h1 { "Track your shipment" }
            div { class: "card",
                div { class: "form-grid",
                    input {
                        placeholder: "e.g. CR-2045-81",
                        value: "{tracking_number}",
                        oninput: move |e| tracking_number.set(e.value()),
                    }
                    button { class: "btn", onclick: search, "Search" }
                }
            }
        }
    }
}

/// Tracking result page component.
#[component]
pub fn TrackingDetail(tracking_number: String) -> Element {
    let shipments = use_shipments();

    let number = tracking_number.clone();
    use_effect(move || {
        let number = number.clone();
        spawn(async move {
            shipments.get_by_tracking_number(&number).await;
        });
    });

    let cache = shipments.snapshot();
    let tracked = shipments.tracked();

    let content = if cache.is_loading() {
        rsx! {
            div { class: "card", "Searching for {tracking_number}..." }
        }
    } else if let Some(error) = cache.error() {
        rsx! {
            div { class: "alert alert-error", "{error}" }
        }
    } else if let Some(detail) = tracked {
        rsx! {
            DetailCard { detail }
        }
    } else {
        rsx! {
            div { class: "card", "No shipment found for {tracking_number}." }
        }
    };

    rsx! {
        Layout {
            title: "Tracking".to_string(),
            nav_active: "tracking".to_string(),

            h1 { "Shipment {tracking_number}" }
            {content}
            p {
                a { href: "/tracking", "Search another shipment" }
            }
        }
    }
}

/// Milestones shown for a shipment, in delivery order.
fn status_steps(status: ShipmentStatus) -> Vec<(&'static str, bool)> {
    let reached = |step: ShipmentStatus| {
        let rank = |s: ShipmentStatus| match s {
            ShipmentStatus::Pending => 0,
            ShipmentStatus::InTransit => 1,
            ShipmentStatus::Delivered => 2,
        };
        rank(step) <= rank(status)
    };
    vec![
        ("Pending", reached(ShipmentStatus::Pending)),
        ("In transit", reached(ShipmentStatus::InTransit)),
        ("Delivered", reached(ShipmentStatus::Delivered)),
    ]
}

#[component]
fn DetailCard(detail: ShipmentDetail) -> Element {
    let steps = status_steps(detail.status);

    rsx! {
        div { class: "card",
            h3 { "Status: {detail.status.label()}" }
            ul {
                for (label, reached) in steps {
                    li {
                        if reached {
                            strong { "{label}" }
                        } else {
                            span { class: "text-muted", "{label}" }
                        }
                    }
                }
            }
        }
        div { class: "card",
            h3 { "Details" }
            table {
                tbody {
                    tr {
                        th { "Origin" }
                        td { "{detail.origin}" }
                    }
                    tr {
                        th { "Destination" }
                        td { "{detail.destination.address}, {detail.destination.city}, {detail.destination.country}" }
                    }
                    tr {
                        th { "Route" }
                        td { "{detail.route_name}" }
                    }
                    tr {
                        th { "Weight" }
                        td { "{detail.dimensions.weight} kg" }
                    }
                }
            }
        }
    }
}
