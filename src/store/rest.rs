use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use super::{ContentStore, Filter, Query, Row};
use crate::common::{AuthError, ConfigError, StoreError};
use crate::config::BackendConfig;
use crate::services::auth::{AuthEvent, Credential, SessionHub, refresh_session};

/// PostgREST binding of [`ContentStore`].
///
/// Requests are authorised with the signed-in user's access token when a
/// session exists, and with the public anon key otherwise. An expiring token
/// is refreshed first; if that fails the request goes out anonymously.
#[derive(Clone)]
pub struct RestStore {
    http: Client,
    config: Result<BackendConfig, ConfigError>,
    sessions: SessionHub,
}

impl RestStore {
    pub fn new(config: Result<BackendConfig, ConfigError>, sessions: SessionHub) -> Self {
        Self {
            http: Client::new(),
            config,
            sessions,
        }
    }

    fn config(&self) -> Result<&BackendConfig, StoreError> {
        self.config.as_ref().map_err(|e| StoreError::Config(e.clone()))
    }

    async fn bearer(&self, config: &BackendConfig) -> String {
        let session = match self.sessions.credential(Utc::now()) {
            Credential::Anonymous => return config.anon_key().to_string(),
            Credential::Token(token) => return token,
            Credential::Expiring(session) => session,
        };

        match refresh_session(&self.http, config, &session).await {
            Ok(fresh) => {
                let token = fresh.access_token.clone();
                self.sessions.publish(AuthEvent::TokenRefreshed(fresh));
                token
            }
            Err(AuthError::Rejected(reason)) => {
                tracing::warn!(%reason, "expired session could not be refreshed");
                self.sessions.publish(AuthEvent::SignedOut);
                config.anon_key().to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed, sending anonymous request");
                config.anon_key().to_string()
            }
        }
    }

    async fn authorise(&self, request: RequestBuilder, config: &BackendConfig) -> RequestBuilder {
        let token = self.bearer(config).await;
        authorised(request, config, &token)
    }
}

fn authorised(request: RequestBuilder, config: &BackendConfig, token: &str) -> RequestBuilder {
    request
        .header("apikey", config.anon_key())
        .bearer_auth(token)
}

impl ContentStore for RestStore {
    async fn select<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<R>, StoreError> {
        let config = self.config()?;
        let url = select_url(config, table, query)?;
        tracing::debug!(%table, "selecting rows");

        let request = self.authorise(self.http.get(url), config).await;
        let response = check(request.send().await?).await?;
        Ok(response.json::<Vec<R>>().await?)
    }

    async fn insert(&self, table: &str, row: &Row) -> Result<(), StoreError> {
        let config = self.config()?;
        let url = config.rest_url(table)?;
        tracing::debug!(%table, "inserting row");

        let request = self
            .authorise(self.http.post(url), config)
            .await
            .header("Prefer", "return=minimal")
            .json(row);
        check(request.send().await?).await?;
        Ok(())
    }

    async fn update(&self, table: &str, id: Uuid, patch: &Row) -> Result<(), StoreError> {
        let config = self.config()?;
        let url = row_url(config, table, id)?;
        tracing::debug!(%table, %id, "updating row");

        let request = self
            .authorise(self.http.patch(url), config)
            .await
            .header("Prefer", "return=minimal")
            .json(patch);
        check(request.send().await?).await?;
        Ok(())
    }

    async fn delete(&self, table: &str, id: Uuid) -> Result<(), StoreError> {
        let config = self.config()?;
        let url = row_url(config, table, id)?;
        tracing::debug!(%table, %id, "deleting row");

        let request = self.authorise(self.http.delete(url), config).await;
        check(request.send().await?).await?;
        Ok(())
    }
}

pub(crate) fn select_url(
    config: &BackendConfig,
    table: &str,
    query: &Query,
) -> Result<Url, ConfigError> {
    let mut url = config.rest_url(table)?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("select", query.columns.as_deref().unwrap_or("*"));

        for filter in &query.filters {
            match filter {
                Filter::Eq(column, Value::Null) => {
                    pairs.append_pair(column, "is.null");
                }
                Filter::Eq(column, value) => {
                    pairs.append_pair(column, &format!("eq.{}", literal(value)));
                }
            }
        }

        if let Some(column) = &query.order {
            pairs.append_pair("order", &format!("{column}.desc"));
        }

        if let Some(limit) = query.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
    Ok(url)
}

fn row_url(config: &BackendConfig, table: &str, id: Uuid) -> Result<Url, ConfigError> {
    let mut url = config.rest_url(table)?;
    url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
    Ok(url)
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    code: Option<String>,
}

async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Rejected {
        status: status.as_u16(),
        message: rejection_message(status.as_u16(), &body),
    })
}

pub(crate) fn rejection_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            details,
            hint,
            code,
        }) => {
            tracing::debug!(?code, ?details, ?hint, "store rejected request");
            message
        }
        _ => format!("Request failed with status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::{Session, SessionUser};
    use pretty_assertions::assert_eq;

    fn config() -> BackendConfig {
        BackendConfig::new("https://abc.supabase.co", "anon-key").unwrap()
    }

    #[test]
    fn test_select_url_for_published_posts() {
        let query = Query::new()
            .eq("is_published", true)
            .order_desc("published_at");
        let url = select_url(&config(), "blog_posts", &query).unwrap();

        assert_eq!(
            url.as_str(),
            "https://abc.supabase.co/rest/v1/blog_posts?select=*&is_published=eq.true&order=published_at.desc"
        );
    }

    #[test]
    fn test_select_url_for_slug_and_null() {
        let query = Query::new()
            .eq("slug", "web dev")
            .eq("expiry_date", Value::Null)
            .limit(1);
        let url = select_url(&config(), "blog_posts", &query).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(
            pairs,
            vec![
                ("select".into(), "*".into()),
                ("slug".into(), "eq.web dev".into()),
                ("expiry_date".into(), "is.null".into()),
                ("limit".into(), "1".into()),
            ]
        );
    }

    #[test]
    fn test_row_url_targets_id() {
        let id = Uuid::nil();
        let url = row_url(&config(), "skills", id).unwrap();
        assert_eq!(
            url.as_str(),
            "https://abc.supabase.co/rest/v1/skills?id=eq.00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_rejection_message_prefers_store_text() {
        let body = r#"{"message":"new row violates row-level security policy",
                       "details":null,"hint":null,"code":"42501"}"#;
        assert_eq!(
            rejection_message(403, body),
            "new row violates row-level security policy"
        );
        assert_eq!(
            rejection_message(502, "<html>Bad gateway</html>"),
            "Request failed with status 502"
        );
    }

    #[tokio::test]
    async fn test_missing_config_fails_every_call() {
        let store = RestStore::new(
            Err(ConfigError::Missing("PORTFOLIO_SUPABASE_URL")),
            SessionHub::default(),
        );
        let err = store
            .select::<Value>("skills", &Query::new())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Config(ConfigError::Missing("PORTFOLIO_SUPABASE_URL"))
        );
    }

    fn stored_session(token: &str, expires_at: i64) -> Session {
        Session {
            access_token: token.to_string(),
            refresh_token: format!("{token}-refresh"),
            expires_at,
            user: SessionUser {
                id: "user-1".into(),
                email: Some("owner@example.com".into()),
            },
        }
    }

    fn bearer_header(store: &RestStore, config: &BackendConfig, token: &str) -> String {
        let url = config.rest_url("skills").unwrap();
        let request = authorised(store.http.get(url), config, token).build().unwrap();
        request.headers()["authorization"].to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_live_session_token_is_sent() {
        let hub = SessionHub::new();
        hub.publish(AuthEvent::SignedIn(stored_session("live-jwt", 4_000_000_000)));
        let store = RestStore::new(Ok(config()), hub);

        let token = store.bearer(&config()).await;
        assert_eq!(bearer_header(&store, &config(), &token), "Bearer live-jwt");
    }

    #[tokio::test]
    async fn test_expired_session_falls_back_to_anon_key() {
        let hub = SessionHub::new();
        hub.publish(AuthEvent::SignedIn(stored_session("expired-jwt", 1)));
        // Nothing listens here, so the refresh fails before any request is sent.
        let config = BackendConfig::new("http://127.0.0.1:1", "anon-key").unwrap();
        let store = RestStore::new(Ok(config.clone()), hub.clone());

        let token = store.bearer(&config).await;
        assert_eq!(bearer_header(&store, &config, &token), "Bearer anon-key");
        // A network failure keeps the session for the next attempt.
        assert_eq!(
            hub.session().map(|s| s.access_token).as_deref(),
            Some("expired-jwt")
        );
    }
}
