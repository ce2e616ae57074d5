//! Order context: the customer/admin view of orders.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{Order, OrderStatus, OrderUpdate};
use crate::services::OrderService;
use crate::state::ResourceCache;

use super::{CacheHandles, Services};

mod ops {
    pub const GET_ALL: &str = "orders.get_all";
    pub const GET_BY_ID: &str = "orders.get_by_id";
    pub const GET_BY_USER: &str = "orders.get_by_user";
    pub const CREATE: &str = "orders.create";
    pub const UPDATE: &str = "orders.update";
    pub const UPDATE_STATUS: &str = "orders.update_status";
    pub const DELETE: &str = "orders.delete";
}

#[derive(Clone, Copy)]
pub struct OrderContext {
    handles: CacheHandles<Order>,
    service: Signal<Arc<OrderService>>,
}

/// Initialize order context provider - call once at app root
pub fn use_order_provider() {
    let services = use_context::<Services>();
    let handles = CacheHandles::use_handles();
    let service = use_signal(|| services.orders.clone());
    use_context_provider(|| OrderContext { handles, service });
}

/// Get order context - use in any component
pub fn use_orders() -> OrderContext {
    use_context::<OrderContext>()
}

impl OrderContext {
    fn service(&self) -> Arc<OrderService> {
        (self.service)()
    }

    pub fn snapshot(&self) -> ResourceCache<Order> {
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

    pub async fn get_by_user_id(&self, user_id: &str) {
        let ticket = self.handles.begin(ops::GET_BY_USER);
        let result = self.service().get_by_user_id(user_id).await;
        self.handles.commit_list(ticket, result);
    }

    /// Create an order. The backend's echo (assigned id, tracking number)
    /// is what lands in the cache.
    pub async fn create(&self, order: Order) -> bool {
        let ticket = self.handles.begin(ops::CREATE);
        let result = self.service().create(&order).await;
        self.handles.commit_created(ticket, result)
    }

    pub async fn update(&self, id: &str, update: OrderUpdate) -> bool {
        let ticket = self.handles.begin(ops::UPDATE);
        let result = self.service().update(id, &update).await;
        self.handles.commit_updated(ticket, id, result)
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> bool {
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
