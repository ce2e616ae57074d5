//! Mock Coordina backend.
//!
//! Faithful to the real surface's quirks: orders answer `{ok, ...}`
//! envelopes except the per-user listing (bare array) and creation (bare
//! echo); carrier/route listings are bare arrays; shipment endpoints use
//! envelopes except the tracking lookup, which answers the denormalized
//! detail object. Every handler records the Authorization header it saw.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use coordina_portal::domain::{
    Destination, Dimensions, NewShipment, Order, OrderStatus, Shipment, ShipmentStatus,
};

/// A seeded account.
#[derive(Debug, Clone)]
pub struct MockUser {
    pub uuid: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub token: String,
}

struct MockState {
    users: Vec<MockUser>,
    orders: Vec<Order>,
    shipments: Vec<Shipment>,
    next_id: u64,
    /// Authorization header (or None) per request, in arrival order.
    seen_authorization: Vec<Option<String>>,
}

impl MockState {
    fn assign_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn user_payload(user: &MockUser) -> Value {
        json!({
            "uuid": user.uuid,
            "email": user.email,
            "firstName": user.first_name,
            "lastName": user.last_name,
            "role": user.role,
            "token": user.token,
        })
    }
}

type Shared = Arc<RwLock<MockState>>;

/// Mock Coordina backend server.
pub struct MockBackend {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl MockBackend {
    /// Start the mock backend on a random port.
    pub async fn start() -> Self {
        let state: Shared = Arc::new(RwLock::new(MockState {
            users: Vec::new(),
            orders: Vec::new(),
            shipments: Vec::new(),
            next_id: 0,
            seen_authorization: Vec::new(),
        }));

        let app = Router::new()
            .route("/auth/login", post(handle_login))
            .route("/auth/register", post(handle_register))
            .route("/auth/renew", post(handle_renew))
            .route("/orders", get(handle_list_orders).post(handle_create_order))
            .route(
                "/orders/{id}",
                get(handle_get_order)
                    .put(handle_update_order)
                    .delete(handle_delete_order),
            )
            .route("/orders/user/{user_id}", get(handle_orders_by_user))
            .route("/orders/status/{id}", axum::routing::patch(handle_order_status))
            .route("/shipments", get(handle_list_shipments).post(handle_create_shipment))
            .route("/shipments/{id}", get(handle_get_shipment).delete(handle_delete_shipment))
            .route("/shipments/tracking/{tracking}", get(handle_tracking))
            .route("/shipments/order/{order_id}", get(handle_shipments_by_order))
            .route(
                "/shipments/status/{id}",
                axum::routing::patch(handle_shipment_status),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL for an `ApiClient`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seed an account the auth endpoints will accept.
    pub async fn add_user(&self, email: &str, password: &str, role: &str) -> MockUser {
        let mut state = self.state.write().await;
        let uuid = state.assign_id("user");
        let user = MockUser {
            uuid: uuid.clone(),
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role: role.to_string(),
            token: format!("token-{uuid}"),
        };
        state.users.push(user.clone());
        user
    }

    /// Seed a stored order.
    pub async fn add_order(&self, user_id: &str, origin: &str) -> Order {
        let mut state = self.state.write().await;
        let id = state.assign_id("ord");
        let order = Order {
            id: Some(id.clone()),
            user_id: Some(user_id.to_string()),
            origin: origin.to_string(),
            destination: Destination {
                city: "Medellín".into(),
                country: "CO".into(),
                address: "Cra 1 # 2-3".into(),
                postal_code: "050001".into(),
            },
            order_status: Some(OrderStatus::Pending),
            tracking_number: Some(format!("TRK-{id}")),
            dimensions: Dimensions {
                length: 10.0,
                width: 5.0,
                height: 4.0,
                weight: 2.5,
            },
            created_at: None,
            updated_at: None,
        };
        state.orders.push(order.clone());
        order
    }

    /// Seed a stored shipment.
    pub async fn add_shipment(&self, order_id: &str, carrier_id: &str) -> Shipment {
        let mut state = self.state.write().await;
        let id = state.assign_id("shp");
        let shipment = Shipment {
            id: Some(id.clone()),
            order_id: order_id.to_string(),
            carrier_id: carrier_id.to_string(),
            status: Some(ShipmentStatus::Pending),
            tracking_number: Some(format!("TRK-{id}")),
            created_at: None,
            updated_at: None,
        };
        state.shipments.push(shipment.clone());
        shipment
    }

    /// All Authorization headers seen so far, in arrival order.
    pub async fn seen_authorization(&self) -> Vec<Option<String>> {
        self.state.read().await.seen_authorization.clone()
    }

    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record_auth(state: &Shared, headers: &HeaderMap) {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.write().await.seen_authorization.push(auth);
}

fn token_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

// ============ Auth handlers ============

async fn handle_login(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let state = state.read().await;
    match state
        .users
        .iter()
        .find(|user| user.email == email && user.password == password)
    {
        Some(user) => (StatusCode::OK, Json(MockState::user_payload(user))),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"ok": false, "message": "Invalid credentials"})),
        ),
    }
}

async fn handle_register(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let email = body["email"].as_str().unwrap_or_default().to_string();

    let mut state = state.write().await;
    if state.users.iter().any(|user| user.email == email) {
        return (
            StatusCode::CONFLICT,
            Json(json!({"ok": false, "message": "Email already registered"})),
        );
    }
    let uuid = state.assign_id("user");
    let user = MockUser {
        uuid: uuid.clone(),
        email,
        password: body["password"].as_str().unwrap_or_default().to_string(),
        first_name: body["firstName"].as_str().unwrap_or_default().to_string(),
        last_name: body["lastName"].as_str().unwrap_or_default().to_string(),
        role: "customer".to_string(),
        token: format!("token-{uuid}"),
    };
    state.users.push(user.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "id": user.uuid,
            "email": user.email,
            "firstName": user.first_name,
            "lastName": user.last_name,
            "role": user.role,
            "isActive": true,
            "emailVerified": false,
        })),
    )
}

async fn handle_renew(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let token = token_from(&headers);

    let state = state.read().await;
    match token.and_then(|token| state.users.iter().find(|user| user.token == token)) {
        Some(user) => (StatusCode::OK, Json(MockState::user_payload(user))),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"ok": false, "message": "Session expired"})),
        ),
    }
}

// ============ Order handlers ============

async fn handle_list_orders(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> Json<Value> {
    record_auth(&state, &headers).await;
    let state = state.read().await;
    Json(json!({"ok": true, "orders": state.orders}))
}

async fn handle_get_order(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let state = state.read().await;
    match state.orders.iter().find(|order| order.id.as_deref() == Some(id.as_str())) {
        Some(order) => (StatusCode::OK, Json(json!({"ok": true, "order": order}))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "Order not found"})),
        ),
    }
}

async fn handle_orders_by_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Json<Value> {
    record_auth(&state, &headers).await;
    let state = state.read().await;
    let orders: Vec<&Order> = state
        .orders
        .iter()
        .filter(|order| order.user_id.as_deref() == Some(user_id.as_str()))
        .collect();
    // Bare array, no envelope
    Json(json!(orders))
}

async fn handle_create_order(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(mut order): Json<Order>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let mut state = state.write().await;
    let id = state.assign_id("ord");
    order.id = Some(id.clone());
    order.order_status = Some(OrderStatus::Pending);
    order.tracking_number = Some(format!("TRK-{id}"));
    state.orders.push(order.clone());
    // Bare echo of the stored order
    (StatusCode::CREATED, Json(json!(order)))
}

async fn handle_update_order(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let mut state = state.write().await;
    let Some(order) = state
        .orders
        .iter_mut()
        .find(|order| order.id.as_deref() == Some(id.as_str()))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "Order not found"})),
        );
    };
    if let Some(origin) = patch["origin"].as_str() {
        order.origin = origin.to_string();
    }
    if let Some(destination) = patch.get("destination") {
        if let Ok(destination) = serde_json::from_value(destination.clone()) {
            order.destination = destination;
        }
    }
    if let Some(dimensions) = patch.get("dimensions") {
        if let Ok(dimensions) = serde_json::from_value(dimensions.clone()) {
            order.dimensions = dimensions;
        }
    }
    (StatusCode::OK, Json(json!({"ok": true, "order": order})))
}

async fn handle_order_status(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let status: Option<OrderStatus> = patch
        .get("orderStatus")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok());
    let mut state = state.write().await;
    let Some(order) = state
        .orders
        .iter_mut()
        .find(|order| order.id.as_deref() == Some(id.as_str()))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "Order not found"})),
        );
    };
    match status {
        Some(status) => {
            order.order_status = Some(status);
            (StatusCode::OK, Json(json!({"ok": true, "order": order})))
        }
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"ok": false, "message": "Unknown order status"})),
        ),
    }
}

async fn handle_delete_order(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let mut state = state.write().await;
    let before = state.orders.len();
    state
        .orders
        .retain(|order| order.id.as_deref() != Some(id.as_str()));
    if state.orders.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "Order not found"})),
        );
    }
    (StatusCode::OK, Json(json!({"ok": true})))
}

// ============ Shipment handlers ============

async fn handle_list_shipments(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> Json<Value> {
    record_auth(&state, &headers).await;
    let state = state.read().await;
    Json(json!({"ok": true, "shipments": state.shipments}))
}

async fn handle_get_shipment(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let state = state.read().await;
    match state
        .shipments
        .iter()
        .find(|shipment| shipment.id.as_deref() == Some(id.as_str()))
    {
        Some(shipment) => (
            StatusCode::OK,
            Json(json!({"ok": true, "shipment": shipment})),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "Shipment not found"})),
        ),
    }
}

async fn handle_shipments_by_order(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
) -> Json<Value> {
    record_auth(&state, &headers).await;
    let state = state.read().await;
    let shipments: Vec<&Shipment> = state
        .shipments
        .iter()
        .filter(|shipment| shipment.order_id == order_id)
        .collect();
    Json(json!({"ok": true, "shipments": shipments}))
}

async fn handle_tracking(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(tracking): Path<String>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let state = state.read().await;
    let Some(shipment) = state
        .shipments
        .iter()
        .find(|shipment| shipment.tracking_number.as_deref() == Some(tracking.as_str()))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "No shipment matches that tracking number"})),
        );
    };
    let order = state
        .orders
        .iter()
        .find(|order| order.id.as_deref() == Some(shipment.order_id.as_str()));
    // Denormalized detail object, no envelope; dimensions as strings
    let detail = json!({
        "id": shipment.id,
        "orderId": shipment.order_id,
        "carrierId": shipment.carrier_id,
        "status": shipment.status,
        "trackingNumber": shipment.tracking_number,
        "origin": order.map(|o| o.origin.clone()).unwrap_or_default(),
        "destination": order.map(|o| serde_json::to_value(&o.destination).unwrap_or_default()).unwrap_or_else(|| json!({
            "city": "", "country": "", "address": "", "postalCode": ""
        })),
        "dimensions": {
            "length": order.map(|o| o.dimensions.length.to_string()).unwrap_or_default(),
            "width": order.map(|o| o.dimensions.width.to_string()).unwrap_or_default(),
            "height": order.map(|o| o.dimensions.height.to_string()).unwrap_or_default(),
            "weight": order.map(|o| o.dimensions.weight.to_string()).unwrap_or_default(),
        },
        "routeName": "North loop",
    });
    (StatusCode::OK, Json(detail))
}

async fn handle_create_shipment(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<NewShipment>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let mut state = state.write().await;
    let id = state.assign_id("shp");
    let shipment = Shipment {
        id: Some(id.clone()),
        order_id: body.order_id,
        carrier_id: body.carrier_id,
        status: Some(ShipmentStatus::Pending),
        tracking_number: Some(format!("TRK-{id}")),
        created_at: None,
        updated_at: None,
    };
    state.shipments.push(shipment.clone());
    // Bare echo of the stored shipment
    (StatusCode::CREATED, Json(json!(shipment)))
}

async fn handle_shipment_status(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let status: Option<ShipmentStatus> = patch
        .get("status")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok());
    let mut state = state.write().await;
    let Some(shipment) = state
        .shipments
        .iter_mut()
        .find(|shipment| shipment.id.as_deref() == Some(id.as_str()))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "Shipment not found"})),
        );
    };
    match status {
        Some(status) => {
            shipment.status = Some(status);
            (
                StatusCode::OK,
                Json(json!({"ok": true, "shipment": shipment})),
            )
        }
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"ok": false, "message": "Unknown shipment status"})),
        ),
    }
}

async fn handle_delete_shipment(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    record_auth(&state, &headers).await;
    let mut state = state.write().await;
    let before = state.shipments.len();
    state
        .shipments
        .retain(|shipment| shipment.id.as_deref() != Some(id.as_str()));
    if state.shipments.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "message": "Shipment not found"})),
        );
    }
    (StatusCode::OK, Json(json!({"ok": true})))
}
