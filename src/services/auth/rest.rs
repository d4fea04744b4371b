use chrono::{Duration, Utc};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use super::{AuthEvent, AuthProvider, REFRESH_MARGIN_SECS, Session, SessionHub, SessionUser};
use crate::common::{AuthError, ConfigError};
use crate::config::BackendConfig;

/// GoTrue binding of [`AuthProvider`].
#[derive(Clone)]
pub struct RestAuth {
    http: Client,
    config: Result<BackendConfig, ConfigError>,
    hub: SessionHub,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: SessionUser,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self
            .expires_at
            .unwrap_or_else(|| Utc::now().timestamp() + self.expires_in.unwrap_or(3600));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// GoTrue has shipped several error shapes over time.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl RestAuth {
    pub fn new(config: Result<BackendConfig, ConfigError>, hub: SessionHub) -> Self {
        Self {
            http: Client::new(),
            config,
            hub,
        }
    }

    fn config(&self) -> Result<&BackendConfig, AuthError> {
        self.config.as_ref().map_err(|e| AuthError::Config(e.clone()))
    }

    async fn request_token(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<Session, AuthError> {
        request_token(&self.http, self.config()?, grant_type, body).await
    }

    /// Confirms the access token is still accepted by the provider.
    pub async fn fetch_user(&self, session: &Session) -> Result<SessionUser, AuthError> {
        let config = self.config()?;
        let response = self
            .http
            .get(config.auth_url("user")?)
            .header("apikey", config.anon_key())
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        Ok(check(response).await?.json::<SessionUser>().await?)
    }
}

impl AuthProvider for RestAuth {
    fn hub(&self) -> &SessionHub {
        &self.hub
    }

    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.hub.session() else {
            return Ok(None);
        };

        if session.expires_within(Utc::now(), Duration::seconds(REFRESH_MARGIN_SECS)) {
            return match refresh_session(&self.http, self.config()?, &session).await {
                Ok(fresh) => {
                    self.hub.publish(AuthEvent::TokenRefreshed(fresh.clone()));
                    Ok(Some(fresh))
                }
                Err(AuthError::Rejected(reason)) => {
                    tracing::warn!(%reason, "stored session could not be refreshed");
                    self.hub.publish(AuthEvent::SignedOut);
                    Ok(None)
                }
                Err(e) => Err(e),
            };
        }

        if self.hub.needs_verification() {
            match self.fetch_user(&session).await {
                Ok(_) => self.hub.mark_verified(),
                Err(AuthError::Rejected(reason)) => {
                    tracing::warn!(%reason, "stored session was rejected");
                    self.hub.publish(AuthEvent::SignedOut);
                    return Ok(None);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Some(session))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self
            .request_token("password", json!({ "email": email, "password": password }))
            .await?;
        tracing::info!(email = %session.email(), "signed in");
        self.hub.publish(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        // The local session is cleared even if the provider cannot be reached.
        if let Some(session) = self.hub.session() {
            if let Err(e) = self.revoke(&session).await {
                tracing::warn!(error = %e, "sign-out request failed");
            }
        }

        self.hub.publish(AuthEvent::SignedOut);
        tracing::info!("signed out");
        Ok(())
    }
}

impl RestAuth {
    async fn revoke(&self, session: &Session) -> Result<(), AuthError> {
        let config = self.config()?;
        let response = self
            .http
            .post(config.auth_url("logout")?)
            .header("apikey", config.anon_key())
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

async fn request_token(
    http: &Client,
    config: &BackendConfig,
    grant_type: &str,
    body: serde_json::Value,
) -> Result<Session, AuthError> {
    let mut url = config.auth_url("token")?;
    url.query_pairs_mut().append_pair("grant_type", grant_type);

    let response = http
        .post(url)
        .header("apikey", config.anon_key())
        .json(&body)
        .send()
        .await?;
    let response = check(response).await?;
    Ok(response.json::<TokenResponse>().await?.into_session())
}

/// Trades the session's refresh token for a new access token.
pub(crate) async fn refresh_session(
    http: &Client,
    config: &BackendConfig,
    session: &Session,
) -> Result<Session, AuthError> {
    request_token(
        http,
        config,
        "refresh_token",
        json!({ "refresh_token": session.refresh_token }),
    )
    .await
}

async fn check(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AuthError::Rejected(rejection_message(status.as_u16(), &body)))
}

fn rejection_message(status: u16, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| format!("Authentication failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_shapes() {
        assert_eq!(
            rejection_message(
                400,
                r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#
            ),
            "Invalid login credentials"
        );
        assert_eq!(
            rejection_message(
                400,
                r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#
            ),
            "Invalid login credentials"
        );
        assert_eq!(
            rejection_message(500, ""),
            "Authentication failed with status 500"
        );
    }

    #[test]
    fn test_token_response_computes_expiry() {
        let token: TokenResponse = serde_json::from_value(json!({
            "access_token": "a",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": { "id": "u1", "email": "owner@example.com", "role": "authenticated" }
        }))
        .unwrap();

        let before = Utc::now().timestamp();
        let session = token.into_session();
        assert!(session.expires_at >= before + 3600);
        assert_eq!(session.email(), "owner@example.com");
    }

    #[tokio::test]
    async fn test_sign_out_without_session_still_notifies() {
        let hub = SessionHub::new();
        let auth = RestAuth::new(Err(ConfigError::Missing("PORTFOLIO_SUPABASE_URL")), hub.clone());

        let events = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = events.clone();
        let _subscription = auth.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

        auth.sign_out().await.unwrap();
        assert_eq!(*events.lock().unwrap(), vec![AuthEvent::SignedOut]);
    }

    #[tokio::test]
    async fn test_sign_out_clears_session_when_backend_is_unconfigured() {
        let hub = SessionHub::new();
        hub.publish(AuthEvent::SignedIn(Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: 4_000_000_000,
            user: SessionUser {
                id: "u1".into(),
                email: Some("owner@example.com".into()),
            },
        }));
        let auth = RestAuth::new(Err(ConfigError::Missing("PORTFOLIO_SUPABASE_URL")), hub.clone());

        let events = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = events.clone();
        let _subscription = auth.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

        auth.sign_out().await.unwrap();
        assert_eq!(*events.lock().unwrap(), vec![AuthEvent::SignedOut]);
        assert_eq!(hub.session(), None);
    }
}
