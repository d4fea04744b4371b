//! Auth provider interface and the shared session hub

mod memory;
mod rest;

pub use memory::MemoryAuth;
pub use rest::RestAuth;
pub(crate) use rest::refresh_session;

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::common::AuthError;

/// Access tokens this close to expiry are refreshed before use.
pub const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Credential issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) at which the access token stops being valid.
    pub expires_at: i64,
    pub user: SessionUser,
}

impl Session {
    pub fn expires_within(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        self.expires_at <= (now + margin).timestamp()
    }

    pub fn email(&self) -> &str {
        self.user.email.as_deref().unwrap_or("")
    }
}

/// What a backend request should carry as its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Anonymous,
    Token(String),
    /// The held session must be refreshed before its token is sent.
    Expiring(Session),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

impl AuthEvent {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => Some(session),
            AuthEvent::SignedOut => None,
        }
    }

    pub fn has_session(&self) -> bool {
        self.session().is_some()
    }
}

/// Durable home for the current session (browser local storage in the app).
pub trait SessionVault: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: Option<&Session>);
}

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Default)]
struct HubState {
    session: Option<Session>,
    verified: bool,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
    vault: Option<Arc<dyn SessionVault>>,
}

/// Holds the current session and fans auth events out to subscribers.
///
/// Clones share state, so the store client and the auth client observe the
/// same session.
#[derive(Clone, Default)]
pub struct SessionHub {
    state: Arc<Mutex<HubState>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hub backed by a vault; a previously saved session is restored unverified.
    pub fn with_vault(vault: Arc<dyn SessionVault>) -> Self {
        let hub = Self::default();
        {
            let mut state = hub.lock();
            state.session = vault.load();
            state.vault = Some(vault);
        }
        hub
    }

    fn lock(&self) -> MutexGuard<'_, HubState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    pub fn credential(&self, now: DateTime<Utc>) -> Credential {
        match self.session() {
            None => Credential::Anonymous,
            Some(session) => {
                if session.expires_within(now, Duration::seconds(REFRESH_MARGIN_SECS)) {
                    Credential::Expiring(session)
                } else {
                    Credential::Token(session.access_token)
                }
            }
        }
    }

    /// True when the held session came from storage and has not been checked
    /// against the provider yet.
    pub fn needs_verification(&self) -> bool {
        let state = self.lock();
        state.session.is_some() && !state.verified
    }

    pub fn mark_verified(&self) {
        self.lock().verified = true;
    }

    /// Applies the event to the held session, persists it, then notifies
    /// subscribers outside the lock.
    pub fn publish(&self, event: AuthEvent) {
        let listeners: Vec<Listener> = {
            let mut state = self.lock();
            state.session = event.session().cloned();
            state.verified = state.session.is_some();
            if let Some(vault) = &state.vault {
                vault.save(state.session.as_ref());
            }
            state.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        tracing::debug!(signed_in = event.has_session(), "auth state changed");
        for listener in listeners {
            listener(&event);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&AuthEvent) + Send + Sync + 'static) -> Subscription {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Arc::new(listener)));
        Subscription {
            hub: Arc::downgrade(&self.state),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    hub: Weak<Mutex<HubState>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.hub.upgrade() {
            let mut state = state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            state.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Authentication provider used by the admin area.
#[allow(async_fn_in_trait)]
pub trait AuthProvider: Clone + 'static {
    fn hub(&self) -> &SessionHub;

    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    fn subscribe(&self, listener: impl Fn(&AuthEvent) + Send + Sync + 'static) -> Subscription {
        self.hub().subscribe(listener)
    }
}
