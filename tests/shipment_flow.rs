//! Shipment lifecycle and tracking lookup against the mock backend.

mod mock_servers;

use std::sync::Arc;

use coordina_portal::api::ApiClient;
use coordina_portal::domain::{NewShipment, ShipmentStatus};
use coordina_portal::services::ShipmentService;
use coordina_portal::session::MemorySessionStore;
use coordina_portal::state::ResourceCache;
use mock_servers::MockBackend;

fn shipment_service(backend: &MockBackend) -> ShipmentService {
    let session = Arc::new(MemorySessionStore::new());
    ShipmentService::new(Arc::new(ApiClient::new(backend.base_url(), session)))
}

#[tokio::test]
async fn create_assigns_identity_and_tracking() {
    let backend = MockBackend::start().await;
    let order = backend.add_order("u1", "Bogotá").await;
    let service = shipment_service(&backend);

    let created = service
        .create(&NewShipment {
            order_id: order.id.clone().expect("seeded order has an id"),
            carrier_id: "car-1".to_string(),
        })
        .await
        .expect("creation should succeed");

    assert!(created.id.is_some());
    assert_eq!(created.status, Some(ShipmentStatus::Pending));
    assert!(created
        .tracking_number
        .as_deref()
        .is_some_and(|tn| tn.starts_with("TRK-")));
}

#[tokio::test]
async fn tracking_lookup_returns_the_denormalized_view() {
    let backend = MockBackend::start().await;
    let order = backend.add_order("u1", "Bogotá").await;
    let shipment = backend
        .add_shipment(order.id.as_deref().unwrap_or_default(), "car-1")
        .await;
    let tracking = shipment.tracking_number.expect("seeded tracking number");
    let service = shipment_service(&backend);

    let detail = service
        .get_by_tracking_number(&tracking)
        .await
        .expect("lookup should succeed");

    assert_eq!(detail.tracking_number, tracking);
    assert_eq!(detail.origin, "Bogotá");
    assert_eq!(detail.destination.city, "Medellín");
    // Backend reports dimensions as strings on this endpoint
    assert_eq!(detail.dimensions.weight, "2.5");
    assert_eq!(detail.route_name, "North loop");
}

#[tokio::test]
async fn unknown_tracking_number_reports_the_backend_message() {
    let backend = MockBackend::start().await;
    let service = shipment_service(&backend);

    let err = service
        .get_by_tracking_number("TRK-nope")
        .await
        .expect_err("lookup should fail");
    assert_eq!(err.user_message(), "No shipment matches that tracking number");
}

#[tokio::test]
async fn status_walks_through_the_courier_lifecycle() {
    let backend = MockBackend::start().await;
    let order = backend.add_order("u1", "Bogotá").await;
    let shipment = backend
        .add_shipment(order.id.as_deref().unwrap_or_default(), "car-1")
        .await;
    let id = shipment.id.clone().expect("seeded shipment has an id");
    let service = shipment_service(&backend);

    let mut cache = ResourceCache::new();
    cache.set_collection(service.get_all().await.expect("listing should succeed"));

    for status in [ShipmentStatus::InTransit, ShipmentStatus::Delivered] {
        let echoed = service
            .update_status(&id, status)
            .await
            .expect("status patch should succeed");
        cache.commit_updated(&id, echoed);
        assert_eq!(cache.collection()[0].status, Some(status));
    }
}

#[tokio::test]
async fn listing_by_order_filters_server_side() {
    let backend = MockBackend::start().await;
    let first = backend.add_order("u1", "Bogotá").await;
    let second = backend.add_order("u1", "Cali").await;
    let first_id = first.id.as_deref().unwrap_or_default();
    let second_id = second.id.as_deref().unwrap_or_default();
    backend.add_shipment(first_id, "car-1").await;
    backend.add_shipment(first_id, "car-2").await;
    backend.add_shipment(second_id, "car-1").await;
    let service = shipment_service(&backend);

    let shipments = service
        .get_by_order_id(first_id)
        .await
        .expect("listing should succeed");
    assert_eq!(shipments.len(), 2);
    assert!(shipments.iter().all(|s| s.order_id == first_id));
}

#[tokio::test]
async fn delete_clears_a_matching_current() {
    let backend = MockBackend::start().await;
    let order = backend.add_order("u1", "Bogotá").await;
    let shipment = backend
        .add_shipment(order.id.as_deref().unwrap_or_default(), "car-1")
        .await;
    let id = shipment.id.clone().expect("seeded shipment has an id");
    let service = shipment_service(&backend);

    let mut cache = ResourceCache::new();
    cache.set_collection(service.get_all().await.expect("listing should succeed"));
    cache.set_current(shipment);

    service.delete(&id).await.expect("delete should succeed");
    cache.commit_removed(&id);

    assert!(cache.collection().is_empty());
    assert_eq!(cache.current(), None);
}
