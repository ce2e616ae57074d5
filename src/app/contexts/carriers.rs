//! Carrier context: the admin view of the fleet.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{Carrier, CarrierUpdate};
use crate::services::CarrierService;
use crate::state::ResourceCache;

use super::{CacheHandles, Services};

mod ops {
    pub const GET_ALL: &str = "carriers.get_all";
    pub const GET_BY_ID: &str = "carriers.get_by_id";
    pub const CREATE: &str = "carriers.create";
    pub const UPDATE: &str = "carriers.update";
    pub const DELETE: &str = "carriers.delete";
}

#[derive(Clone, Copy)]
pub struct CarrierContext {
    handles: CacheHandles<Carrier>,
    service: Signal<Arc<CarrierService>>,
}

/// Initialize carrier context provider - call once at app root
pub fn use_carrier_provider() {
    let services = use_context::<Services>();
    let handles = CacheHandles::use_handles();
    let service = use_signal(|| services.carriers.clone());
    use_context_provider(|| CarrierContext { handles, service });
}

/// Get carrier context - use in any component
pub fn use_carriers() -> CarrierContext {
    use_context::<CarrierContext>()
}

impl CarrierContext {
    fn service(&self) -> Arc<CarrierService> {
        (self.service)()
    }

    pub fn snapshot(&self) -> ResourceCache<Carrier> {
        self.handles.snapshot()
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

    pub async fn create(&self, carrier: Carrier) -> bool {
        let ticket = self.handles.begin(ops::CREATE);
        let result = self.service().create(&carrier).await;
        self.handles.commit_created(ticket, result)
    }

    pub async fn update(&self, id: &str, update: CarrierUpdate) -> bool {
        let ticket = self.handles.begin(ops::UPDATE);
        let result = self.service().update(id, &update).await;
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
