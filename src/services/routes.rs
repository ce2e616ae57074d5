//! Delivery-route endpoints.
//!
//! Same contract as carriers: bare array for the listing, `{ok, route,
//! message}` envelopes elsewhere.

use std::sync::Arc;

use serde::Deserialize;

use crate::api::ApiClient;
use crate::domain::{DeliveryRoute, DeliveryRouteUpdate};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Default, Deserialize)]
struct RouteEnvelope {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    route: Option<DeliveryRoute>,
    #[serde(default)]
    message: Option<String>,
}

impl RouteEnvelope {
    fn reject(self, fallback: &str) -> ServiceError {
        ServiceError::rejected(self.message.unwrap_or_else(|| fallback.to_string()))
    }

    fn route_or(self, fallback: &str) -> ServiceResult<DeliveryRoute> {
        if self.ok {
            if let Some(route) = self.route {
                return Ok(route);
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

pub struct RouteService {
    api: Arc<ApiClient>,
}

impl RouteService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Bare-array endpoint: no routes yet is a success, not a failure.
    pub async fn get_all(&self) -> ServiceResult<Vec<DeliveryRoute>> {
        self.api
            .get("/routes")
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not fetch routes"))
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<DeliveryRoute> {
        const FALLBACK: &str = "Could not fetch the route";
        let path = format!("/routes/{}", urlencoding::encode(id));
        let envelope: RouteEnvelope = self
            .api
            .get(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.route_or(FALLBACK)
    }

    pub async fn create(&self, route: &DeliveryRoute) -> ServiceResult<DeliveryRoute> {
        const FALLBACK: &str = "Could not create the route";
        let envelope: RouteEnvelope = self
            .api
            .post("/routes", route)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.route_or(FALLBACK)
    }

    pub async fn update(
        &self,
        id: &str,
        update: &DeliveryRouteUpdate,
    ) -> ServiceResult<DeliveryRoute> {
        const FALLBACK: &str = "Could not update the route";
        let path = format!("/routes/{}", urlencoding::encode(id));
        let envelope: RouteEnvelope = self
            .api
            .put(&path, update)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.route_or(FALLBACK)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        const FALLBACK: &str = "Could not delete the route";
        let path = format!("/routes/{}", urlencoding::encode(id));
        let envelope: RouteEnvelope = self
            .api
            .delete(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.accepted(FALLBACK)
    }
}
