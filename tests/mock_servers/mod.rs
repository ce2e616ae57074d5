//! Mock logistics backend for integration testing.
//!
//! Simulates the Coordina REST surface (auth, orders, shipments, carriers,
//! routes) so the gateway, the services and the reconciliation layer can be
//! exercised without a real deployment.

pub mod backend;

pub use backend::MockBackend;
