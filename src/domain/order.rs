//! Orders: what a customer asks the company to move.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub city: String,
    pub country: String,
    pub address: String,
    pub postal_code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub origin: String,
    pub destination: Destination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub dimensions: Dimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Keyed for Order {
    fn key(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Partial update for `PUT /orders/:id`. Only present fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_order_has_no_key() {
        let order = Order {
            id: None,
            user_id: None,
            origin: "Bogotá".into(),
            destination: Destination::default(),
            order_status: None,
            tracking_number: None,
            dimensions: Dimensions::default(),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(order.key(), None);
        // Unset optionals stay off the wire
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("orderStatus").is_none());
    }

    #[test]
    fn partial_update_serializes_only_present_fields() {
        let update = OrderUpdate {
            order_status: Some(OrderStatus::Accepted),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"orderStatus":"accepted"}"#);
    }
}
