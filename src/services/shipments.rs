//! Shipment endpoints.
//!
//! List/detail endpoints answer `{ok, shipment|shipments, message}`
//! envelopes; creation echoes the stored shipment and the customer-facing
//! tracking lookup answers the denormalized detail view directly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::domain::{NewShipment, Shipment, ShipmentDetail, ShipmentStatus, ShipmentUpdate};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Default, Deserialize)]
struct ShipmentEnvelope {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    shipment: Option<Shipment>,
    #[serde(default)]
    shipments: Option<Vec<Shipment>>,
    #[serde(default)]
    message: Option<String>,
}

impl ShipmentEnvelope {
    fn reject(self, fallback: &str) -> ServiceError {
        ServiceError::rejected(self.message.unwrap_or_else(|| fallback.to_string()))
    }

    fn shipment_or(self, fallback: &str) -> ServiceResult<Shipment> {
        if self.ok {
            if let Some(shipment) = self.shipment {
                return Ok(shipment);
            }
        }
        Err(self.reject(fallback))
    }

    fn shipments_or(self, fallback: &str) -> ServiceResult<Vec<Shipment>> {
        if self.ok {
            if let Some(shipments) = self.shipments {
                return Ok(shipments);
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
struct StatusPatch {
    status: ShipmentStatus,
}

pub struct ShipmentService {
    api: Arc<ApiClient>,
}

impl ShipmentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Shipment>> {
        const FALLBACK: &str = "Could not fetch shipments";
        let envelope: ShipmentEnvelope = self
            .api
            .get("/shipments")
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.shipments_or(FALLBACK)
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Shipment> {
        const FALLBACK: &str = "Could not fetch the shipment";
        let path = format!("/shipments/{}", urlencoding::encode(id));
        let envelope: ShipmentEnvelope = self
            .api
            .get(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.shipment_or(FALLBACK)
    }

    /// Customer-facing lookup: the denormalized tracking view.
    pub async fn get_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> ServiceResult<ShipmentDetail> {
        let path = format!(
            "/shipments/tracking/{}",
            urlencoding::encode(tracking_number)
        );
        self.api
            .get(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, "No shipment found for that tracking number"))
    }

    pub async fn get_by_order_id(&self, order_id: &str) -> ServiceResult<Vec<Shipment>> {
        const FALLBACK: &str = "Could not fetch the order's shipments";
        let path = format!("/shipments/order/{}", urlencoding::encode(order_id));
        let envelope: ShipmentEnvelope = self
            .api
            .get(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.shipments_or(FALLBACK)
    }

    /// Create a shipment for an order/carrier pair. The backend assigns the
    /// id, status and tracking number; the echo is what gets committed.
    pub async fn create(&self, shipment: &NewShipment) -> ServiceResult<Shipment> {
        self.api
            .post("/shipments", shipment)
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not create the shipment"))
    }

    pub async fn update(&self, id: &str, update: &ShipmentUpdate) -> ServiceResult<Shipment> {
        const FALLBACK: &str = "Could not update the shipment";
        let path = format!("/shipments/{}", urlencoding::encode(id));
        let envelope: ShipmentEnvelope = self
            .api
            .put(&path, update)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.shipment_or(FALLBACK)
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: ShipmentStatus,
    ) -> ServiceResult<Shipment> {
        const FALLBACK: &str = "Could not update the shipment status";
        let path = format!("/shipments/status/{}", urlencoding::encode(id));
        let envelope: ShipmentEnvelope = self
            .api
            .patch(&path, &StatusPatch { status })
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.shipment_or(FALLBACK)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        const FALLBACK: &str = "Could not delete the shipment";
        let path = format!("/shipments/{}", urlencoding::encode(id));
        let envelope: ShipmentEnvelope = self
            .api
            .delete(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.accepted(FALLBACK)
    }
}
