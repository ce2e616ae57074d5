//! The auth session state machine.
//!
//! Three stages - unauthenticated, loading, authenticated - plus a
//! `restoring` flag that is true only until the startup read of the session
//! store has settled. Rehydration is optimistic: a stored credential counts
//! as authenticated immediately while the silent renewal runs; a failed
//! renewal drops back to unauthenticated.

use crate::domain::{Credential, Role, UserProfile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStage {
    #[default]
    Unauthenticated,
    Loading,
    Authenticated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSession {
    stage: AuthStage,
    credential: Option<Credential>,
    restoring: bool,
}

impl AuthSession {
    /// Fresh session at application start, before the store has been read.
    pub fn restoring() -> Self {
        Self {
            restoring: true,
            ..Self::default()
        }
    }

    pub fn stage(&self) -> AuthStage {
        self.stage
    }

    pub fn is_authenticated(&self) -> bool {
        self.stage == AuthStage::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.stage == AuthStage::Loading
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.credential.as_ref().map(|credential| &credential.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    /// Settle the startup read: authenticated with the cached profile when a
    /// credential was stored, unauthenticated otherwise.
    pub fn settle_restored(&mut self, credential: Option<Credential>) {
        self.restoring = false;
        match credential {
            Some(credential) => {
                self.stage = AuthStage::Authenticated;
                self.credential = Some(credential);
            }
            None => {
                self.stage = AuthStage::Unauthenticated;
                self.credential = None;
            }
        }
    }

    /// An auth operation (login/register/renew) is in flight.
    pub fn begin_operation(&mut self) {
        self.stage = AuthStage::Loading;
    }

    /// A login or renewal succeeded.
    pub fn commit_login(&mut self, credential: Credential) {
        self.stage = AuthStage::Authenticated;
        self.credential = Some(credential);
    }

    /// Back to unauthenticated: failed login, failed renewal, logout, or a
    /// finished registration (which never logs in).
    pub fn reset_unauthenticated(&mut self) {
        self.stage = AuthStage::Unauthenticated;
        self.credential = None;
        self.restoring = false;
    }
}

/// What `register` reports back to the caller. Never throws past itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub ok: bool,
    pub message: Option<String>,
}

impl RegisterOutcome {
    pub fn success() -> Self {
        Self {
            ok: true,
            message: Some("User registered successfully".to_string()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }
}
