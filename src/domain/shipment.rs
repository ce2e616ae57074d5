//! Shipments: the carrier-side execution of an order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::Destination;
use super::Keyed;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In transit",
            ShipmentStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub order_id: String,
    pub carrier_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ShipmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Keyed for Shipment {
    fn key(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Denormalized dimensions as the tracking endpoint reports them. The
/// backend renders these as strings ("2.5"), not numbers.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetailDimensions {
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
}

/// The customer-facing tracking view: shipment joined with its order's
/// destination/dimensions and the assigned route name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDetail {
    pub id: String,
    pub order_id: String,
    pub carrier_id: String,
    pub status: ShipmentStatus,
    pub tracking_number: String,
    pub origin: String,
    pub destination: Destination,
    pub dimensions: DetailDimensions,
    #[serde(default)]
    pub route_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /shipments`: the backend assigns everything else.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShipment {
    pub order_id: String,
    pub carrier_id: String,
}

/// Partial update for `PUT /shipments/:id`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShipmentStatus>,
}
