//! Admin dashboard: orders, shipments, carriers and routes administration.

use dioxus::prelude::*;

use crate::app::components::{ErrorAlert, Layout};
use crate::app::contexts::{use_carriers, use_orders, use_routes, use_shipments};
use crate::app::guard::PrivateRoute;
use crate::domain::{
    Carrier, DeliveryRoute, NewShipment, Order, OrderStatus, Role, Shipment, ShipmentStatus,
};

/// Admin dashboard page component.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        PrivateRoute { allowed: vec![Role::Admin],
            AdminDashboardContent {}
        }
    }
}

#[component]
fn AdminDashboardContent() -> Element {
    let orders = use_orders();
    let shipments = use_shipments();
    let carriers = use_carriers();
    let routes = use_routes();

    // Load every collection the dashboard renders from
    use_effect(move || {
        spawn(async move {
            orders.get_all().await;
        });
        spawn(async move {
            shipments.get_all().await;
        });
        spawn(async move {
            carriers.get_all().await;
        });
        spawn(async move {
            routes.get_all().await;
        });
    });

    rsx! {
        Layout {
            title: "Admin dashboard".to_string(),
            nav_active: "admin".to_string(),

            h1 { "Admin dashboard" }
            OrdersSection {}
            ShipmentsSection {}
            CarriersSection {}
            RoutesSection {}
        }
    }
}

#[component]
fn OrdersSection() -> Element {
    let orders = use_orders();
    let cache = orders.snapshot();
    let mut dismissed = use_signal(|| false);

    rsx! {
        section {
            h2 { "Orders" }
            if let Some(error) = cache.error().filter(|_| !dismissed()) {
                ErrorAlert {
                    message: error.to_string(),
                    on_dismiss: move |_| dismissed.set(true),
                }
            }
            if cache.is_loading() {
                div { class: "card", "Loading orders..." }
            } else if cache.collection().is_empty() {
                div { class: "card", "No orders." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Origin" }
                            th { "Destination" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        for order in cache.collection().iter().cloned() {
                            AdminOrderRow { order }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminOrderRow(order: Order) -> Element {
    let orders = use_orders();
    let shipments = use_shipments();
    let carriers = use_carriers();

    let order_id = order.id.clone().unwrap_or_default();
    let status = order.order_status;
    let mut carrier_choice = use_signal(String::new);

    let accept = {
        let order_id = order_id.clone();
        move |_| {
            let order_id = order_id.clone();
            spawn(async move {
                orders.update_status(&order_id, OrderStatus::Accepted).await;
            });
        }
    };

    let assign = {
        let order_id = order_id.clone();
        move |_| {
            let carrier_id = carrier_choice();
            if carrier_id.is_empty() {
                return;
            }
            let order_id = order_id.clone();
            spawn(async move {
                shipments
                    .create(NewShipment {
                        order_id,
                        carrier_id,
                    })
                    .await;
            });
        }
    };

    let carrier_options = carriers.snapshot().collection().to_vec();
    let status_label = status.map(|s| s.label()).unwrap_or("-");

    let actions = match status {
        Some(OrderStatus::Pending) => rsx! {
            button { class: "btn btn-sm", onclick: accept, "Accept" }
        },
        Some(OrderStatus::Accepted) => rsx! {
            select {
                onchange: move |e| carrier_choice.set(e.value()),
                option { value: "", "Assign carrier..." }
                for carrier in carrier_options {
                    option {
                        value: carrier.id.clone().unwrap_or_default(),
                        {carrier.id.clone().unwrap_or_default()}
                    }
                }
            }
            button { class: "btn btn-sm", onclick: assign, "Create shipment" }
        },
        None => rsx! {
            span { class: "text-muted", "-" }
        },
    };

    rsx! {
        tr {
            td { "{order.origin}" }
            td { "{order.destination.city}" }
            td { "{status_label}" }
            td { {actions} }
        }
    }
}

#[component]
fn ShipmentsSection() -> Element {
    let shipments = use_shipments();
    let cache = shipments.snapshot();

    rsx! {
        section {
            h2 { "Shipments" }
            if cache.is_loading() {
                div { class: "card", "Loading shipments..." }
            } else if cache.collection().is_empty() {
                div { class: "card", "No shipments." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Tracking" }
                            th { "Order" }
                            th { "Carrier" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        for shipment in cache.collection().iter().cloned() {
                            AdminShipmentRow { shipment }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminShipmentRow(shipment: Shipment) -> Element {
    let shipments = use_shipments();
    let shipment_id = shipment.id.clone().unwrap_or_default();
    let tracking = shipment.tracking_number.clone().unwrap_or_default();
    let status_label = shipment.status.map(|s| s.label()).unwrap_or("-");

    let set_status = {
        let shipment_id = shipment_id.clone();
        move |e: Event<FormData>| {
            let Some(status) = parse_status(&e.value()) else {
                return;
            };
            let shipment_id = shipment_id.clone();
            spawn(async move {
                shipments.update_status(&shipment_id, status).await;
            });
        }
    };

    let remove = {
        let shipment_id = shipment_id.clone();
        move |_| {
            let shipment_id = shipment_id.clone();
            spawn(async move {
                shipments.delete(&shipment_id).await;
            });
        }
    };

    rsx! {
        tr {
            td { "{tracking}" }
            td { "{shipment.order_id}" }
            td { "{shipment.carrier_id}" }
            td { "{status_label}" }
            td {
                select {
                    onchange: set_status,
                    option { value: "", "Set status..." }
                    option { value: "pending", "Pending" }
                    option { value: "in_transit", "In transit" }
                    option { value: "delivered", "Delivered" }
                }
                button { class: "btn btn-ghost btn-sm", onclick: remove, "Delete" }
            }
        }
    }
}

fn parse_status(value: &str) -> Option<ShipmentStatus> {
    match value {
        "pending" => Some(ShipmentStatus::Pending),
        "in_transit" => Some(ShipmentStatus::InTransit),
        "delivered" => Some(ShipmentStatus::Delivered),
        _ => None,
    }
}

#[component]
fn CarriersSection() -> Element {
    let carriers = use_carriers();
    let routes = use_routes();
    let cache = carriers.snapshot();

    let mut user_id = use_signal(String::new);
    let mut max_weight = use_signal(String::new);
    let mut max_items = use_signal(String::new);
    let mut route_id = use_signal(String::new);

    let create = move |_| {
        if user_id().trim().is_empty() || route_id().is_empty() {
            return;
        }
        let carrier = Carrier {
            id: None,
            user_id: user_id().trim().to_string(),
            max_weight: max_weight().trim().parse().unwrap_or(0.0),
            max_items: max_items().trim().parse().unwrap_or(0),
            route_id: route_id(),
            route_name: None,
        };
        spawn(async move {
            if carriers.create(carrier).await {
                user_id.set(String::new());
                max_weight.set(String::new());
                max_items.set(String::new());
            }
        });
    };

    let route_options = routes.snapshot().collection().to_vec();

    rsx! {
        section {
            h2 { "Carriers" }
            div { class: "card",
                h3 { "New carrier" }
                div { class: "form-grid",
                    input {
                        placeholder: "Courier user id",
                        value: "{user_id}",
                        oninput: move |e| user_id.set(e.value()),
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max weight (kg)",
                        value: "{max_weight}",
                        oninput: move |e| max_weight.set(e.value()),
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max items",
                        value: "{max_items}",
                        oninput: move |e| max_items.set(e.value()),
                    }
                    select {
                        onchange: move |e| route_id.set(e.value()),
                        option { value: "", "Route..." }
                        for route in route_options {
                            option {
                                value: route.id.clone().unwrap_or_default(),
                                "{route.name}"
                            }
                        }
                    }
                }
                button { class: "btn", onclick: create, "Create carrier" }
            }
            if cache.collection().is_empty() {
                div { class: "card", "No carriers registered." }
            } else {
                table {
                    thead {
                        tr {
                            th { "User" }
                            th { "Max weight" }
                            th { "Max items" }
                            th { "Route" }
                            th { "" }
                        }
                    }
                    tbody {
                        for carrier in cache.collection().iter().cloned() {
                            CarrierRow { carrier }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CarrierRow(carrier: Carrier) -> Element {
    let carriers = use_carriers();
    let carrier_id = carrier.id.clone().unwrap_or_default();
    let route = carrier
        .route_name
        .clone()
        .unwrap_or_else(|| carrier.route_id.clone());

    let remove = move |_| {
        let carrier_id = carrier_id.clone();
        spawn(async move {
            carriers.delete(&carrier_id).await;
        });
    };

    rsx! {
        tr {
            td { "{carrier.user_id}" }
            td { "{carrier.max_weight} kg" }
            td { "{carrier.max_items}" }
            td { "{route}" }
            td {
                button { class: "btn btn-ghost btn-sm", onclick: remove, "Delete" }
            }
        }
    }
}

#[component]
fn RoutesSection() -> Element {
    let routes = use_routes();
    let cache = routes.snapshot();

    let mut name = use_signal(String::new);
    let mut origin = use_signal(String::new);
    let mut destination = use_signal(String::new);

    let create = move |_| {
        if name().trim().is_empty() {
            return;
        }
        let route = DeliveryRoute {
            id: None,
            name: name().trim().to_string(),
            origin: origin().trim().to_string(),
            destination: destination().trim().to_string(),
        };
        spawn(async move {
            if routes.create(route).await {
                name.set(String::new());
                origin.set(String::new());
                destination.set(String::new());
            }
        });
    };

    rsx! {
        section {
            h2 { "Routes" }
            div { class: "card",
                h3 { "New route" }
                div { class: "form-grid",
                    input {
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        placeholder: "Origin",
                        value: "{origin}",
                        oninput: move |e| origin.set(e.value()),
                    }
                    input {
                        placeholder: "Destination",
                        value: "{destination}",
                        oninput: move |e| destination.set(e.value()),
                    }
                }
                button { class: "btn", onclick: create, "Create route" }
            }
            if cache.collection().is_empty() {
                div { class: "card", "No routes defined." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Origin" }
                            th { "Destination" }
                            th { "" }
                        }
                    }
                    tbody {
                        for route in cache.collection().iter().cloned() {
                            RouteRow { route }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RouteRow(route: DeliveryRoute) -> Element {
    let routes = use_routes();
    let route_id = route.id.clone().unwrap_or_default();

    let remove = move |_| {
        let route_id = route_id.clone();
        spawn(async move {
            routes.delete(&route_id).await;
        });
    };

    rsx! {
        tr {
            td { "{route.name}" }
            td { "{route.origin}" }
            td { "{route.destination}" }
            td {
                button { class: "btn btn-ghost btn-sm", onclick: remove, "Delete" }
            }
        }
    }
}
