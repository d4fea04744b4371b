use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use super::{AuthEvent, AuthProvider, Session, SessionHub, SessionUser};
use crate::common::AuthError;

/// In-process [`AuthProvider`] with a fixed set of accounts.
#[derive(Clone, Default)]
pub struct MemoryAuth {
    hub: SessionHub,
    accounts: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.accounts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(email.to_lowercase(), password.to_string());
        self
    }

    fn issue(email: &str) -> Session {
        Session {
            access_token: Uuid::new_v4().to_string(),
            refresh_token: Uuid::new_v4().to_string(),
            expires_at: Utc::now().timestamp() + 3600,
            user: SessionUser {
                id: Uuid::new_v4().to_string(),
                email: Some(email.to_string()),
            },
        }
    }
}

impl AuthProvider for MemoryAuth {
    fn hub(&self) -> &SessionHub {
        &self.hub
    }

    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.hub.session())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let known = self
            .accounts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&email.to_lowercase())
            .is_some_and(|stored| stored == password);
        if !known {
            return Err(AuthError::Rejected("Invalid login credentials".to_string()));
        }

        let session = Self::issue(email);
        self.hub.publish(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.hub.publish(AuthEvent::SignedOut);
        Ok(())
    }
}
