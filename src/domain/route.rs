//! Delivery routes carriers are assigned to.
//!
//! Named `DeliveryRoute` to keep it distinct from the router's `Route` enum.

use serde::{Deserialize, Serialize};

use super::Keyed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub origin: String,
    pub destination: String,
}

impl Keyed for DeliveryRoute {
    fn key(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Partial update for `PUT /routes/:id`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeliveryRouteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}
