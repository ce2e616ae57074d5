//! Order CRUD and cache reconciliation against the mock backend.
//!
//! The reactive contexts wrap exactly this composition: a service call, a
//! sequence ticket, and a `ResourceCache` commit. Driving the pieces
//! directly keeps the properties testable without a UI runtime.

mod mock_servers;

use std::sync::Arc;

use coordina_portal::api::ApiClient;
use coordina_portal::domain::{Destination, Dimensions, Order, OrderStatus, OrderUpdate};
use coordina_portal::services::OrderService;
use coordina_portal::session::MemorySessionStore;
use coordina_portal::state::{RequestSequencer, ResourceCache};
use mock_servers::MockBackend;

fn order_service(backend: &MockBackend) -> OrderService {
    let session = Arc::new(MemorySessionStore::new());
    OrderService::new(Arc::new(ApiClient::new(backend.base_url(), session)))
}

fn draft_order(user_id: &str) -> Order {
    Order {
        id: None,
        user_id: Some(user_id.to_string()),
        origin: "Bogotá".to_string(),
        destination: Destination {
            city: "Cali".to_string(),
            country: "CO".to_string(),
            address: "Av 3 # 4-5".to_string(),
            postal_code: "760001".to_string(),
        },
        order_status: None,
        tracking_number: None,
        dimensions: Dimensions {
            length: 30.0,
            width: 20.0,
            height: 10.0,
            weight: 1.2,
        },
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn create_commits_the_server_echo() {
    let backend = MockBackend::start().await;
    backend.add_order("u1", "Bogotá").await;
    let service = order_service(&backend);

    let mut cache = ResourceCache::new();
    cache.set_collection(service.get_all().await.expect("listing should succeed"));
    let before = cache.collection().len();

    let created = service
        .create(&draft_order("u1"))
        .await
        .expect("creation should succeed");
    cache.commit_created(created.clone());

    // Exactly one more record, carrying the backend-assigned identity
    assert_eq!(cache.collection().len(), before + 1);
    let id = created.id.expect("backend assigns an id");
    assert!(created
        .tracking_number
        .as_deref()
        .is_some_and(|tn| tn.starts_with("TRK-")));
    assert_eq!(
        cache.current().and_then(|order| order.id.as_deref()),
        Some(id.as_str())
    );
}

#[tokio::test]
async fn update_then_fetch_reflects_the_merge() {
    let backend = MockBackend::start().await;
    let seeded = backend.add_order("u1", "Bogotá").await;
    let id = seeded.id.clone().expect("seeded order has an id");
    let service = order_service(&backend);

    let updated = service
        .update(
            &id,
            &OrderUpdate {
                origin: Some("Cartagena".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.origin, "Cartagena");

    // Round-trip: fetch-by-id shows the partial change merged on prior state
    let fetched = service.get_by_id(&id).await.expect("fetch should succeed");
    assert_eq!(fetched.origin, "Cartagena");
    assert_eq!(fetched.destination, seeded.destination);
}

#[tokio::test]
async fn status_patch_commits_in_place() {
    let backend = MockBackend::start().await;
    let seeded = backend.add_order("u1", "Bogotá").await;
    let id = seeded.id.clone().expect("seeded order has an id");
    let service = order_service(&backend);

    let mut cache = ResourceCache::new();
    cache.set_collection(service.get_all().await.expect("listing should succeed"));
    cache.set_current(seeded);

    let echoed = service
        .update_status(&id, OrderStatus::Accepted)
        .await
        .expect("status patch should succeed");
    cache.commit_updated(&id, echoed);

    assert_eq!(cache.collection().len(), 1);
    assert_eq!(
        cache.collection()[0].order_status,
        Some(OrderStatus::Accepted)
    );
    assert_eq!(
        cache.current().and_then(|order| order.order_status),
        Some(OrderStatus::Accepted)
    );
}

#[tokio::test]
async fn delete_removes_the_record_and_clears_current() {
    let backend = MockBackend::start().await;
    let first = backend.add_order("u1", "Bogotá").await;
    let second = backend.add_order("u1", "Pereira").await;
    let id = first.id.clone().expect("seeded order has an id");
    let service = order_service(&backend);

    let mut cache = ResourceCache::new();
    cache.set_collection(service.get_all().await.expect("listing should succeed"));
    cache.set_current(first);

    service.delete(&id).await.expect("delete should succeed");
    cache.commit_removed(&id);

    assert_eq!(backend.order_count().await, 1);
    assert_eq!(cache.collection().len(), 1);
    assert_eq!(cache.collection()[0].id, second.id);
    assert_eq!(cache.current(), None);
}

#[tokio::test]
async fn empty_user_listing_is_success_not_failure() {
    let backend = MockBackend::start().await;
    backend.add_order("someone-else", "Bogotá").await;
    let service = order_service(&backend);

    let mut cache = ResourceCache::new();
    cache.begin();
    match service.get_by_user_id("u-without-orders").await {
        Ok(orders) => cache.set_collection(orders),
        Err(err) => cache.fail(err.user_message()),
    }
    cache.finish();

    // "No orders" and "request failed" are distinct outcomes
    assert!(cache.collection().is_empty());
    assert_eq!(cache.error(), None);
}

#[tokio::test]
async fn backend_rejection_surfaces_its_message_and_keeps_data() {
    let backend = MockBackend::start().await;
    backend.add_order("u1", "Bogotá").await;
    let service = order_service(&backend);

    let mut cache = ResourceCache::new();
    cache.set_collection(service.get_all().await.expect("listing should succeed"));

    cache.begin();
    match service.get_by_id("ord-missing").await {
        Ok(order) => cache.set_current(order),
        Err(err) => cache.fail(err.user_message()),
    }
    cache.finish();

    assert_eq!(cache.error(), Some("Order not found"));
    assert_eq!(cache.collection().len(), 1);
    assert_eq!(cache.current(), None);
}

#[tokio::test]
async fn transport_failure_maps_to_the_generic_message() {
    // Point at a port nothing listens on
    let session = Arc::new(MemorySessionStore::new());
    let service = OrderService::new(Arc::new(ApiClient::new(
        "http://127.0.0.1:9",
        session,
    )));

    let err = service.get_all().await.expect_err("request should fail");
    assert_eq!(err.user_message(), "Could not connect to the server");
}

#[tokio::test]
async fn stale_listing_never_overwrites_a_fresher_one() {
    let backend = MockBackend::start().await;
    backend.add_order("u1", "Bogotá").await;
    let service = order_service(&backend);

    let mut cache = ResourceCache::new();
    let mut seq = RequestSequencer::new();

    // First request issued, then superseded before its response lands
    let stale = seq.begin("orders.get_all");
    let fresh = seq.begin("orders.get_all");

    let fresh_orders = service.get_all().await.expect("listing should succeed");
    assert!(seq.is_current(&fresh));
    cache.set_collection(fresh_orders);

    // The stale response arrives afterwards (backend state changed since)
    backend.add_order("u1", "Pereira").await;
    let stale_orders = service.get_all().await.expect("listing should succeed");
    if seq.is_current(&stale) {
        cache.set_collection(stale_orders);
    }

    // The superseded response committed nothing
    assert_eq!(cache.collection().len(), 1);
    assert_eq!(cache.collection()[0].origin, "Bogotá");
}
