//! Customer order list and order creation.

use dioxus::prelude::*;

use crate::app::components::{ErrorAlert, Layout};
use crate::app::contexts::{use_auth, use_orders};
use crate::app::guard::PrivateRoute;
use crate::domain::{Destination, Dimensions, Order, Role};

/// My-orders page component (customers and admins).
#[component]
pub fn MyOrders() -> Element {
    rsx! {
        PrivateRoute { allowed: vec![Role::Customer, Role::Admin],
            MyOrdersContent {}
        }
    }
}

#[component]
fn MyOrdersContent() -> Element {
    let auth = use_auth();
    let orders = use_orders();

    // Load this user's orders once the page mounts
    use_effect(move || {
        if let Some(user) = auth.user() {
            spawn(async move {
                orders.get_by_user_id(&user.uuid).await;
            });
        }
    });

    let cache = orders.snapshot();
    let mut dismissed_error = use_signal(|| false);

    rsx! {
        Layout {
            title: "My orders".to_string(),
            nav_active: "my-orders".to_string(),

            h1 { "My orders" }

            if let Some(error) = cache.error().filter(|_| !dismissed_error()) {
                ErrorAlert {
                    message: error.to_string(),
                    on_dismiss: move |_| dismissed_error.set(true),
                }
            }

            NewOrderForm {}

            if cache.is_loading() {
                div { class: "card", "Loading orders..." }
            } else if cache.collection().is_empty() {
                div { class: "card", "You have no orders yet." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Origin" }
                            th { "Destination" }
                            th { "Status" }
                            th { "Tracking" }
                        }
                    }
                    tbody {
                        for order in cache.collection().iter().cloned() {
                            OrderRow { order }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(order: Order) -> Element {
    let status = order
        .order_status
        .map(|status| status.label())
        .unwrap_or("-");
    let tracking = order.tracking_number.clone().unwrap_or_default();

    rsx! {
        tr {
            td { "{order.origin}" }
            td { "{order.destination.city}, {order.destination.country}" }
            td { "{status}" }
            td {
                if tracking.is_empty() {
                    span { class: "text-muted", "Not assigned" }
                } else {
                    a { href: "/tracking/{tracking}", "{tracking}" }
                }
            }
        }
    }
}

#[component]
fn NewOrderForm() -> Element {
    let auth = use_auth();
    let orders = use_orders();

    let mut origin = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut postal_code = use_signal(String::new);
    let mut length = use_signal(String::new);
    let mut width = use_signal(String::new);
    let mut height = use_signal(String::new);
    let mut weight = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let parse_dim = |value: String| value.trim().parse::<f64>().unwrap_or(0.0);

    let submit = move |_| {
        error.set(None);
        let Some(user) = auth.user() else {
            return;
        };
        if origin().trim().is_empty() || city().trim().is_empty() || address().trim().is_empty() {
            error.set(Some("Origin and destination are required".to_string()));
            return;
        }
        let order = Order {
            id: None,
            user_id: Some(user.uuid),
            origin: origin().trim().to_string(),
            destination: Destination {
                city: city().trim().to_string(),
                country: country().trim().to_string(),
                address: address().trim().to_string(),
                postal_code: postal_code().trim().to_string(),
            },
            order_status: None,
            tracking_number: None,
            dimensions: Dimensions {
                length: parse_dim(length()),
                width: parse_dim(width()),
                height: parse_dim(height()),
                weight: parse_dim(weight()),
            },
            created_at: None,
            updated_at: None,
        };
        spawn(async move {
            if orders.create(order).await {
                origin.set(String::new());
                city.set(String::new());
                country.set(String::new());
                address.set(String::new());
                postal_code.set(String::new());
                length.set(String::new());
                width.set(String::new());
                height.set(String::new());
                weight.set(String::new());
            }
        });
    };

    rsx! {
        div { class: "card",
            h3 { "New order" }
            if let Some(message) = error() {
                ErrorAlert {
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            div { class: "form-grid",
                input {
                    placeholder: "Origin city",
                    value: "{origin}",
                    oninput: move |e| origin.set(e.value()),
                }
                input {
                    placeholder: "Destination city",
                    value: "{city}",
                    oninput: move |e| city.set(e.value()),
                }
                input {
                    placeholder: "Country",
                    value: "{country}",
                    oninput: move |e| country.set(e.value()),
                }
                input {
                    placeholder: "Address",
                    value: "{address}",
                    oninput: move |e| address.set(e.value()),
                }
                input {
                    placeholder: "Postal code",
                    value: "{postal_code}",
                    oninput: move |e| postal_code.set(e.value()),
                }
            }
            div { class: "form-grid",
                input {
                    r#type: "number",
                    placeholder: "Length (cm)",
                    value: "{length}",
                    oninput: move |e| length.set(e.value()),
                }
                input {
                    r#type: "number",
                    placeholder: "Width (cm)",
                    value: "{width}",
                    oninput: move |e| width.set(e.value()),
                }
                input {
                    r#type: "number",
                    placeholder: "Height (cm)",
                    value: "{height}",
                    oninput: move |e| height.set(e.value()),
                }
                input {
                    r#type: "number",
                    placeholder: "Weight (kg)",
                    value: "{weight}",
                    oninput: move |e| weight.set(e.value()),
                }
            }
            button { class: "btn", onclick: submit, "Create order" }
        }
    }
}
