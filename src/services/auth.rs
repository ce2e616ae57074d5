//! Authentication service: login, registration, silent renewal.
//!
//! The service owns credential persistence: a successful login or renewal
//! writes the session store before the caller sees the credential, so the
//! in-memory state can never be ahead of storage.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::domain::user::LoginResponse;
use crate::domain::{Credential, LoginRequest, RegisterRequest, RegisteredUser};
use crate::session::SessionStore;

use super::{ServiceError, ServiceResult, INVALID_RESPONSE};

pub struct AuthService {
    api: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Exchange credentials for a profile + token and persist them.
    pub async fn login(&self, request: &LoginRequest) -> ServiceResult<Credential> {
        let response: LoginResponse = self
            .api
            .post("/auth/login", request)
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not sign in"))?;

        if response.token.is_empty() {
            return Err(ServiceError::rejected(INVALID_RESPONSE));
        }

        let credential = Credential::from(response);
        self.session.save(&credential);
        Ok(credential)
    }

    /// Create an account. Does not log the user in.
    pub async fn register(&self, request: &RegisterRequest) -> ServiceResult<RegisteredUser> {
        let user: RegisteredUser = self
            .api
            .post("/auth/register", request)
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not register the user"))?;

        if user.id.is_empty() {
            return Err(ServiceError::rejected(INVALID_RESPONSE));
        }
        Ok(user)
    }

    /// Refresh the token for the current session. Fails locally when there
    /// is no session to renew.
    pub async fn renew(&self) -> ServiceResult<Credential> {
        if self.session.load().is_none() {
            return Err(ServiceError::NoSession);
        }

        let response: LoginResponse = self
            .api
            .post_empty("/auth/renew")
            .await
            .map_err(|e| ServiceError::from_api(e, "Could not renew the session"))?;

        if response.token.is_empty() {
            return Err(ServiceError::rejected(INVALID_RESPONSE));
        }

        let credential = Credential::from(response);
        self.session.save(&credential);
        Ok(credential)
    }

    /// Drop the persisted session (broad clear, see `session`).
    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn current_user(&self) -> Option<Credential> {
        self.session.load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.load().is_some()
    }
}
