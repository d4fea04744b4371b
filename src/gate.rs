//! Admin session gate: decides between the login form and the dashboard

use crate::services::auth::{AuthEvent, AuthProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Authenticated,
    Unauthenticated,
}

impl GateState {
    fn from_presence(has_session: bool) -> Self {
        if has_session {
            GateState::Authenticated
        } else {
            GateState::Unauthenticated
        }
    }
}

/// Starts in `Checking`; never returns to it.
#[derive(Debug, Clone)]
pub struct SessionGate {
    state: GateState,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Checking,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Applies the initial session check. A change event that arrived first
    /// already settled the gate, in which case this result is ignored.
    pub fn resolve_check(&mut self, has_session: bool) -> bool {
        if self.state != GateState::Checking {
            tracing::debug!("ignoring session check that lost to an auth event");
            return false;
        }
        self.state = GateState::from_presence(has_session);
        true
    }

    pub fn on_event(&mut self, event: &AuthEvent) {
        self.state = GateState::from_presence(event.has_session());
    }
}

/// Asks the provider whether a session exists. Provider failures count as
/// signed out so the login form stays reachable.
pub async fn check_session<A: AuthProvider>(auth: &A) -> bool {
    match auth.current_session().await {
        Ok(session) => session.is_some(),
        Err(err) => {
            tracing::warn!(error = %err, "session check failed");
            false
        }
    }
}
