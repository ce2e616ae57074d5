//! Carrier endpoints.
//!
//! The listing answers a bare array; everything else uses the
//! `{ok, carrier, message}` envelope.

use std::sync::Arc;

use serde::Deserialize;

use crate::api::ApiClient;
use crate::domain::{Carrier, CarrierUpdate};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Default, Deserialize)]
struct CarrierEnvelope {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    carrier: Option<Carrier>,
    #[serde(default)]
    message: Option<String>,
}

impl CarrierEnvelope {
    fn reject(self, fallback: &str) -> ServiceError {
        ServiceError::rejected(self.message.unwrap_or_else(|| fallback.to_string()))
    }

    fn carrier_or(self, fallback: &str) -> ServiceResult<Carrier> {
        if self.ok {
            if let Some(carrier) = self.carrier {
                return Ok(carrier);
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

pub struct CarrierService {
    api: Arc<ApiClient>,
}

impl CarrierService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Bare-array endpoint: an empty fleet is a success, not a failure.
    pub async fn get_all(&self) -> ServiceResult<Vec<Carrier>> {
        self.api
            .get("/carriers")
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not fetch carriers"))
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Carrier> {
        const FALLBACK: &str = "Could not fetch the carrier";
        let path = format!("/carriers/{}", urlencoding::encode(id));
        let envelope: CarrierEnvelope = self
            .api
            .get(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.carrier_or(FALLBACK)
    }

    pub async fn create(&self, carrier: &Carrier) -> ServiceResult<Carrier> {
        const FALLBACK: &str = "Could not create the carrier";
        let envelope: CarrierEnvelope = self
            .api
            .post("/carriers", carrier)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.carrier_or(FALLBACK)
    }

    pub async fn update(&self, id: &str, update: &CarrierUpdate) -> ServiceResult<Carrier> {
        const FALLBACK: &str = "Could not update the carrier";
        let path = format!("/carriers/{}", urlencoding::encode(id));
        let envelope: CarrierEnvelope = self
            .api
            .put(&path, update)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.carrier_or(FALLBACK)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        const FALLBACK: &str = "Could not delete the carrier";
        let path = format!("/carriers/{}", urlencoding::encode(id));
        let envelope: CarrierEnvelope = self
            .api
            .delete(&path)
            .await
            .map_err(|e| ServiceError::from_api(e, FALLBACK))?;
        envelope.accepted(FALLBACK)
    }
}
