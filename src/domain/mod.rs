//! Domain types shared by services, state and UI.
//!
//! These mirror the backend's wire shapes (camelCase JSON). Identifiers are
//! backend-assigned; objects that have not been persisted yet carry `None`.

pub mod carrier;
pub mod order;
pub mod route;
pub mod shipment;
pub mod user;

pub use carrier::{Carrier, CarrierUpdate};
pub use order::{Destination, Dimensions, Order, OrderStatus, OrderUpdate};
pub use route::{DeliveryRoute, DeliveryRouteUpdate};
pub use shipment::{NewShipment, Shipment, ShipmentDetail, ShipmentStatus, ShipmentUpdate};
pub use user::{Credential, LoginRequest, RegisterRequest, RegisteredUser, Role, UserProfile};

/// Backend-assigned identity. Cache reconciliation matches records by this
/// key; unsaved records (`None`) never match anything.
pub trait Keyed {
    fn key(&self) -> Option<&str>;
}
