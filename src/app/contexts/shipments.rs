//! Shipment context: admin/courier shipment state plus the customer-facing
//! tracking lookup.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{NewShipment, Shipment, ShipmentDetail, ShipmentStatus, ShipmentUpdate};
use crate::services::ShipmentService;
use crate::state::ResourceCache;

use super::{CacheHandles, Services};

mod ops {
    pub const GET_ALL: &str = "shipments.get_all";
    pub const GET_BY_ID: &str = "shipments.get_by_id";
    pub const GET_BY_TRACKING: &str = "shipments.get_by_tracking";
    pub const GET_BY_ORDER: &str = "shipments.get_by_order";
    pub const CREATE: &str = "shipments.create";
    pub const UPDATE: &str = "shipments.update";
    pub const UPDATE_STATUS: &str = "shipments.update_status";
    pub const DELETE: &str = "shipments.delete";
}

#[derive(Clone, Copy)]
pub struct ShipmentContext {
    handles: CacheHandles<Shipment>,
    /// Denormalized tracking view; separate from the CRUD cache because it
    /// is a different shape, not a collection member.
    tracked: Signal<Option<ShipmentDetail>>,
    service: Signal<Arc<ShipmentService>>,
}

/// Initialize shipment context provider - call once at app root
pub fn use_shipment_provider() {
    let services = use_context::<Services>();
    let handles = CacheHandles::use_handles();
    let tracked = use_signal(|| None);
    let service = use_signal(|| services.shipments.clone());
    use_context_provider(|| ShipmentContext {
        handles,
        tracked,
        service,
    });
}

/// Get shipment context - use in any component
pub fn use_shipments() -> ShipmentContext {
    use_context::<ShipmentContext>()
}

impl ShipmentContext {
    fn service(&self) -> Arc<ShipmentService> {
        (self.service)()
    }

    pub fn snapshot(&self) -> ResourceCache<Shipment> {
        self.handles.snapshot()
    }

    /// The last successful tracking lookup.
    pub fn tracked(&self) -> Option<ShipmentDetail> {
        (self.tracked)()
    }

    pub async fn get_all(&self) {
        let ticket = self.handles.begin(ops::GET_ALL);
        let result = self.service().get_all().await;
        self.handles.commit_list(ticket, result);
    }

    pub async fn get_by_id(&self, id: &str) {
        let ticket = self.handles.begin(ops::GET_BY_ID);
        let result = self.service().get_by_id(id).await;
        self.handles.commit_current(ticket, result);
    }

    /// Customer-facing lookup by tracking number. On failure the previous
    /// result is dropped - showing a stale shipment for a different number
    /// would be worse than showing nothing.
    pub async fn get_by_tracking_number(&self, tracking_number: &str) {
        let ticket = self.handles.begin(ops::GET_BY_TRACKING);
        let result = self.service().get_by_tracking_number(tracking_number).await;

        let handles = self.handles;
        let mut tracked = self.tracked;
        match result {
            Ok(detail) => {
                tracked.set(Some(detail));
                handles.settle(ticket);
            }
            Err(err) => {
                tracked.set(None);
                handles.abandon(ticket, err.user_message());
            }
        }
    }

    pub fn clear_tracked(&self) {
        let mut tracked = self.tracked;
        tracked.set(None);
    }

    pub async fn get_by_order_id(&self, order_id: &str) {
        let ticket = self.handles.begin(ops::GET_BY_ORDER);
        let result = self.service().get_by_order_id(order_id).await;
        self.handles.commit_list(ticket, result);
    }

    /// Create a shipment for an order/carrier pair; the backend's echo is
    /// what lands in the cache.
    pub async fn create(&self, shipment: NewShipment) -> bool {
        let ticket = self.handles.begin(ops::CREATE);
        let result = self.service().create(&shipment).await;
        self.handles.commit_created(ticket, result)
    }

    pub async fn update(&self, id: &str, update: ShipmentUpdate) -> bool {
        let ticket = self.handles.begin(ops::UPDATE);
        let result = self.service().update(id, &update).await;
        self.handles.commit_updated(ticket, id, result)
    }

    pub async fn update_status(&self, id: &str, status: ShipmentStatus) -> bool {
        let ticket = self.handles.begin(ops::UPDATE_STATUS);
        let result = self.service().update_status(id, status).await;
        self.handles.commit_updated(ticket, id, result)
    }

    pub async fn delete(&self, id: &str) -> bool {
        let ticket = self.handles.begin(ops::DELETE);
        let result = self.service().delete(id).await;
        self.handles.commit_removed(ticket, id, result)
    }

    pub fn clear_current(&self) {
        self.handles.clear_current();
    }
}
