//! Order endpoints.
//!
//! The orders resource mostly answers `{ok, order|orders, message}`
//! envelopes; the exceptions are the per-user listing (bare array) and
//! creation (bare echo of the stored order).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::domain::{Order, OrderStatus, OrderUpdate};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Default, Deserialize)]
struct OrderEnvelope {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    order: Option<Order>,
    #[serde(default)]
    orders: Option<Vec<Order>>,
    #[serde(default)]
    message: Option<String>,
}

impl OrderEnvelope {
    fn reject(self, fallback: &str) -> ServiceError {
        ServiceError::rejected(self.message.unwrap_or_else(|| fallback.to_string()))
    }

    fn order_or(self, fallback: &str) -> ServiceResult<Order> {
        if self.ok {
            if let Some(order) = self.order {
                return Ok(order);
            }
        }
        Err(self.reject(fallback))
    }

    fn orders_or(self, fallback: &str) -> ServiceResult<Vec<Order>> {
        if self.ok {
            if let Some(orders) = self.orders {
                return Ok(orders);
            }
        }
        Err(self.reject(fallback))
    }

    fn accepted(self, fallback: &str) -> ServiceResult<()> {
        if self.ok {
            return Ok(());
        }
        Err(self.reject(fallback))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusPatch {
    order_status: OrderStatus,
}

pub struct OrderService {
    api: Arc<ApiClient>,
}

impl OrderService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Order>> {
        const FALLBACK: &str = "Could not fetch orders";
        let envelope: OrderEnvelope = self
            .api
            .get("/orders")
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.orders_or(FALLBACK)
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Order> {
        const FALLBACK: &str = "Could not fetch the order";
        let path = format!("/orders/{}", urlencoding::encode(id));
        let envelope: OrderEnvelope = self
            .api
            .get(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.order_or(FALLBACK)
    }

    /// Bare-array endpoint: an empty list is a success, not a failure.
    pub async fn get_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<Order>> {
        let path = format!("/orders/user/{}", urlencoding::encode(user_id));
        self.api
            .get(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not fetch the user's orders"))
    }

    /// Create an order. The commit value is the backend's echo - the stored
    /// record with its assigned id/tracking number - never the payload.
    pub async fn create(&self, order: &Order) -> ServiceResult<Order> {
        self.api
            .post("/orders", order)
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not create the order"))
    }

    pub async fn update(&self, id: &str, update: &OrderUpdate) -> ServiceResult<Order> {
        const FALLBACK: &str = "Could not update the order";
        let path = format!("/orders/{}", urlencoding::encode(id));
        let envelope: OrderEnvelope = self
            .api
            .put(&path, update)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.order_or(FALLBACK)
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ServiceResult<Order> {
        const FALLBACK: &str = "Could not update the order status";
        let path = format!("/orders/status/{}", urlencoding::encode(id));
        let envelope: OrderEnvelope = self
            .api
            .patch(&path, &StatusPatch { order_status: status })
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.order_or(FALLBACK)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        const FALLBACK: &str = "Could not delete the order";
        let path = format!("/orders/{}", urlencoding::encode(id));
        let envelope: OrderEnvelope = self
            .api
            .delete(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.accepted(FALLBACK)
    }
}
