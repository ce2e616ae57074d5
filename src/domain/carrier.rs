//! Carriers: the vehicles/couriers that execute shipments.

use serde::{Deserialize, Serialize};

use super::Keyed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub max_weight: f64,
    pub max_items: u32,
    pub route_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
}

impl Keyed for Carrier {
    fn key(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Partial update for `PUT /carriers/:id`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
}
