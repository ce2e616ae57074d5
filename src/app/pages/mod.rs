//! Page components.
//!
//! Pages are thin: they consume the domain contexts and render from cache
//! snapshots. Access control is applied here by wrapping page content in
//! the guard components, one wrapper per protected page.

mod admin_dashboard;
mod courier_dashboard;
mod home;
mod my_orders;
mod not_found;
mod sign_in;
mod tracking;

pub use admin_dashboard::AdminDashboard;
pub use courier_dashboard::CourierDashboard;
pub use home::Home;
pub use my_orders::MyOrders;
pub use not_found::PageNotFound;
pub use sign_in::SignIn;
pub use tracking::{Tracking, TrackingDetail};
