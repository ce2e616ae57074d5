//! Domain services over the API gateway.
//!
//! Each service owns one resource's endpoints and wire envelopes. The
//! backend is not uniform - some endpoints answer bare objects/arrays,
//! others `{ok, <resource>, message}` envelopes - so every call site here
//! normalizes into a tagged [`ServiceResult`] and the contexts never see a
//! resource-specific failure shape.

pub mod auth;
pub mod carriers;
pub mod orders;
pub mod routes;
pub mod shipments;

pub use auth::AuthService;
pub use carriers::CarrierService;
pub use orders::OrderService;
pub use routes::RouteService;
pub use shipments::ShipmentService;

use thiserror::Error;

use crate::api::ApiError;

/// Message used when a 2xx body does not carry what it should.
pub(crate) const INVALID_RESPONSE: &str = "Invalid response from the server";

/// Normalized failure for every domain service call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),
    /// The backend (or an undecodable body) rejected the operation.
    #[error("{message}")]
    Rejected { message: String },
    /// A local precondition failed before any request was made.
    #[error("no active session")]
    NoSession,
}

impl ServiceError {
    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        ServiceError::Rejected {
            message: message.into(),
        }
    }

    /// Fold a gateway error into the tagged shape, substituting `fallback`
    /// when the backend sent no message of its own.
    pub(crate) fn from_api(error: ApiError, fallback: &str) -> Self {
        match error {
            ApiError::Transport(detail) => ServiceError::Transport(detail),
            ApiError::Status {
                message: Some(message),
                ..
            } => ServiceError::rejected(message),
            ApiError::Status { message: None, .. } => ServiceError::rejected(fallback),
            ApiError::Decode(_) => ServiceError::rejected(INVALID_RESPONSE),
        }
    }

    /// What the UI shows for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Transport(_) => "Could not connect to the server".to_string(),
            ServiceError::Rejected { message } => message.clone(),
            ServiceError::NoSession => "No active session".to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
