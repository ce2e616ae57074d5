//! Delivery-route context: the admin view of route assignments.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{DeliveryRoute, DeliveryRouteUpdate};
use crate::services::RouteService;
use crate::state::ResourceCache;

use super::{CacheHandles, Services};

mod ops {
    pub const GET_ALL: &str = "routes.get_all";
    pub const GET_BY_ID: &str = "routes.get_by_id";
    pub const CREATE: &str = "routes.create";
    pub const UPDATE: &str = "routes.update";
    pub const DELETE: &str = "routes.delete";
}

#[derive(Clone, Copy)]
pub struct RouteContext {
    handles: CacheHandles<DeliveryRoute>,
    service: Signal<Arc<RouteService>>,
}

/// Initialize route context provider - call once at app root
pub fn use_route_provider() {
    let services = use_context::<Services>();
    let handles = CacheHandles::use_handles();
    let service = use_signal(|| services.routes.clone());
    use_context_provider(|| RouteContext { handles, service });
}

/// Get route context - use in any component
pub fn use_routes() -> RouteContext {
    use_context::<RouteContext>()
}

impl RouteContext {
    fn service(&self) -> Arc<RouteService> {
        (self.service)()
    }

    pub fn snapshot(&self) -> ResourceCache<DeliveryRoute> {
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

    pub async fn create(&self, route: DeliveryRoute) -> bool {
        let ticket = self.handles.begin(ops::CREATE);
        let result = self.service().create(&route).await;
        self.handles.commit_created(ticket, result)
    }

    pub async fn update(&self, id: &str, update: DeliveryRouteUpdate) -> bool {
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
