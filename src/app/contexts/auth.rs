//! Auth context: credential lifecycle shared via context.
//!
//! Rehydrates from the session store on mount, renews silently, and exposes
//! login/register/logout to the pages. Auth operations share one sequence
//! key, so a response only commits if no later auth operation was issued -
//! a second login started before the first resolves wins deterministically.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{Credential, LoginRequest, RegisterRequest, Role, UserProfile};
use crate::services::AuthService;
use crate::state::{AuthSession, RegisterOutcome, RequestSequencer, Ticket};

use super::Services;

const AUTH_OP: &str = "auth";

/// Global auth state shared via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Signal<AuthSession>,
    seq: Signal<RequestSequencer>,
    service: Signal<Arc<AuthService>>,
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider() {
    let services = use_context::<Services>();
    let session = use_signal(AuthSession::restoring);
    let seq = use_signal(RequestSequencer::new);
    let service = use_signal(|| services.auth.clone());

    let ctx = AuthContext {
        session,
        seq,
        service,
    };
    use_context_provider(|| ctx);

    // Rehydrate once the provider is mounted
    use_effect(move || {
        ctx.restore();
    });
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

impl AuthContext {
    fn service(&self) -> Arc<AuthService> {
        (self.service)()
    }

    fn begin(&self) -> Ticket {
        let mut seq = self.seq;
        let ticket = seq.write().begin(AUTH_OP);
        ticket
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        self.seq.peek().is_current(ticket)
    }

    pub fn snapshot(&self) -> AuthSession {
        (self.session)()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.snapshot().user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.snapshot().role()
    }

    /// Settle state from the session store, then renew silently. A failed
    /// renewal clears both the store and the in-memory credential.
    pub fn restore(&self) {
        let cached: Option<Credential> = self.service().current_user();
        let has_session = cached.is_some();

        let mut session = self.session;
        session.with_mut(|s| s.settle_restored(cached));

        if !has_session {
            return;
        }

        let ctx = *self;
        let ticket = self.begin();
        spawn(async move {
            let renewed = ctx.service().renew().await;
            if !ctx.is_current(&ticket) {
                return;
            }
            let mut session = ctx.session;
            match renewed {
                Ok(credential) => session.with_mut(|s| s.commit_login(credential)),
                Err(err) => {
                    tracing::warn!("Silent renewal failed, dropping session: {err}");
                    ctx.service().logout();
                    session.with_mut(AuthSession::reset_unauthenticated);
                }
            }
        });
    }

    /// Exchange credentials for a session. Returns whether the user is now
    /// authenticated.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let ticket = self.begin();
        let mut session = self.session;
        session.with_mut(AuthSession::begin_operation);

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.service().login(&request).await;

        if !self.is_current(&ticket) {
            // A later auth operation owns the state now
            return false;
        }
        match result {
            Ok(credential) => {
                session.with_mut(|s| s.commit_login(credential));
                true
            }
            Err(err) => {
                tracing::debug!("Login failed: {err}");
                session.with_mut(AuthSession::reset_unauthenticated);
                false
            }
        }
    }

    /// Create an account. Does not log in - the caller decides what happens
    /// next with the structured outcome.
    pub async fn register(&self, request: RegisterRequest) -> RegisterOutcome {
        let ticket = self.begin();
        let mut session = self.session;
        session.with_mut(AuthSession::begin_operation);

        let result = self.service().register(&request).await;

        if !self.is_current(&ticket) {
            return RegisterOutcome::failure("Registration was superseded");
        }
        session.with_mut(AuthSession::reset_unauthenticated);
        match result {
            Ok(_) => RegisterOutcome::success(),
            Err(err) => RegisterOutcome::failure(err.user_message()),
        }
    }

    /// Synchronous logout: broad storage clear, in-memory credential
    /// dropped, full reload in the browser. Idempotent.
    pub fn logout(&self) {
        // Supersede any in-flight auth operation
        let _ = self.begin();
        self.service().logout();
        let mut session = self.session;
        session.with_mut(AuthSession::reset_unauthenticated);

        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
