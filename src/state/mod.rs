//! Framework-free state building blocks.
//!
//! Everything the reactive contexts do to data lives here as plain structs
//! and pure functions, so the reconciliation rules, the auth lifecycle and
//! the guard decisions are testable without a UI runtime.

pub mod auth;
pub mod cache;
pub mod guard;
pub mod sequencer;

pub use auth::{AuthSession, AuthStage, RegisterOutcome};
pub use cache::ResourceCache;
pub use guard::{
    evaluate_private, evaluate_public, landing_route, GuardDecision, Landing, PublicDecision,
};
pub use sequencer::{RequestSequencer, Ticket};
