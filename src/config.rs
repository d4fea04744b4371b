//! Build-time backend settings and the site owner's profile

use url::Url;

use crate::common::ConfigError;

const SUPABASE_URL_VAR: &str = "PORTFOLIO_SUPABASE_URL";
const SUPABASE_KEY_VAR: &str = "PORTFOLIO_SUPABASE_ANON_KEY";

/// Address and public key of the hosted backend (data store + auth).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base: Url,
    anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing(SUPABASE_URL_VAR));
        }
        if anon_key.trim().is_empty() {
            return Err(ConfigError::Missing(SUPABASE_KEY_VAR));
        }

        // Joining relies on a trailing slash, otherwise the last segment is replaced.
        let normalized = format!("{}/", url.trim_end_matches('/'));
        let base = Url::parse(&normalized).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            base,
            anon_key: anon_key.trim().to_string(),
        })
    }

    /// Reads the values baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let url = option_env!("PORTFOLIO_SUPABASE_URL")
            .ok_or(ConfigError::Missing(SUPABASE_URL_VAR))?;
        let key = option_env!("PORTFOLIO_SUPABASE_ANON_KEY")
            .ok_or(ConfigError::Missing(SUPABASE_KEY_VAR))?;
        Self::new(url, key)
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn rest_url(&self, table: &str) -> Result<Url, ConfigError> {
        self.join(&format!("rest/v1/{table}"))
    }

    pub fn auth_url(&self, endpoint: &str) -> Result<Url, ConfigError> {
        self.join(&format!("auth/v1/{endpoint}"))
    }

    fn join(&self, path: &str) -> Result<Url, ConfigError> {
        self.base
            .join(path)
            .map_err(|e| ConfigError::InvalidUrl(e.to_string()))
    }
}

/// GitHub account whose repositories fill the projects section.
pub fn github_user() -> &'static str {
    option_env!("PORTFOLIO_GITHUB_USER").unwrap_or(profile::GITHUB_USER)
}

pub mod profile {
    pub const NAME: &str = "Md. Jehadur Rahman Emran";
    pub const ROLE: &str = "Software Engineer & Researcher";
    pub const TAGLINE: &str =
        "I build reliable software and study how machine learning can serve people.";
    pub const EMAIL: &str = "emran.jehadur@gmail.com";
    pub const AVAILABILITY: &str = "Available for Remote Work";
    pub const GITHUB_USER: &str = "JehadurRE";
    pub const GITHUB_URL: &str = "https://github.com/JehadurRE";
    pub const LINKEDIN_URL: &str = "https://linkedin.com/in/jehadurre";
    pub const X_URL: &str = "https://x.com/JehadurRE";
    /// Repository topic the owner uses to mark showcase projects.
    pub const SHOWCASE_TOPIC: &str = "jehadurre";
}
