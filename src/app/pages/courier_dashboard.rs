//! Courier dashboard: the shipments a courier moves through their statuses.

use dioxus::prelude::*;

use crate::app::components::{ErrorAlert, Layout};
use crate::app::contexts::use_shipments;
use crate::app::guard::PrivateRoute;
use crate::domain::{Role, Shipment, ShipmentStatus};

/// Courier dashboard page component.
#[component]
pub fn CourierDashboard() -> Element {
    rsx! {
        PrivateRoute { allowed: vec![Role::Courier],
            CourierDashboardContent {}
        }
    }
}

#[component]
fn CourierDashboardContent() -> Element {
    let shipments = use_shipments();

    use_effect(move || {
        spawn(async move {
            shipments.get_all().await;
        });
    });

    let cache = shipments.snapshot();
    let mut dismissed = use_signal(|| false);

    rsx! {
        Layout {
            title: "Courier dashboard".to_string(),
            nav_active: "courier".to_string(),

            h1 { "Your shipments" }
            if let Some(error) = cache.error().filter(|_| !dismissed()) {
                ErrorAlert {
                    message: error.to_string(),
                    on_dismiss: move |_| dismissed.set(true),
                }
            }

            if cache.is_loading() {
                div { class: "card", "Loading shipments..." }
            } else if cache.collection().is_empty() {
                div { class: "card", "No shipments assigned." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Tracking" }
                            th { "Order" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        for shipment in cache.collection().iter().cloned() {
                            CourierShipmentRow { shipment }
                        }
                    }
                }
            }
        }
    }
}

/// The next milestone a courier can move a shipment to, if any.
fn next_status(status: Option<ShipmentStatus>) -> Option<ShipmentStatus> {
    match status {
        Some(ShipmentStatus::Pending) => Some(ShipmentStatus::InTransit),
        Some(ShipmentStatus::InTransit) => Some(ShipmentStatus::Delivered),
        Some(ShipmentStatus::Delivered) | None => None,
    }
}

#[component]
fn CourierShipmentRow(shipment: Shipment) -> Element {
    let shipments = use_shipments();
    let shipment_id = shipment.id.clone().unwrap_or_default();
    let tracking = shipment.tracking_number.clone().unwrap_or_default();
    let status_label = shipment.status.map(|s| s.label()).unwrap_or("-");
    let next = next_status(shipment.status);

    let advance = move |_| {
        let Some(next) = next else {
            return;
        };
        let shipment_id = shipment_id.clone();
        spawn(async move {
            shipments.update_status(&shipment_id, next).await;
        });
    };

    rsx! {
        tr {
            td { "{tracking}" }
            td { "{shipment.order_id}" }
            td { "{status_label}" }
            td {
                if let Some(next) = next {
                    button {
                        class: "btn btn-sm",
                        onclick: advance,
                        "Mark {next.label()}"
                    }
                } else {
                    span { class: "text-muted", "Done" }
                }
            }
        }
    }
}
