//! Static host for the built site. Serves the trunk bundle and answers every
//! unknown path with `index.html`, so `/blog/<slug>` and `/admin` load the app.

pub mod middleware;

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web::ServiceConfig;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SITE_ROOT: &str = "./dist";
const INDEX: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub site_root: PathBuf,
    /// Origin of the hosted backend, allowed as a fetch target.
    pub backend_origin: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_origin =
            lookup("PORTFOLIO_SUPABASE_URL").and_then(|raw| match Url::parse(raw.trim()) {
                Ok(url) => Some(url.origin().ascii_serialization()),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring malformed PORTFOLIO_SUPABASE_URL");
                    None
                }
            });
        let site_root = lookup("SITE_ROOT").unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string());

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            site_root: PathBuf::from(site_root),
            backend_origin,
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_root.join(INDEX)
    }
}

/// Routes for the bundle under `root`.
pub fn configure(root: PathBuf) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let index = root.join(INDEX);
        cfg.service(
            Files::new("/", &root)
                .index_file(INDEX)
                .prefer_utf8(true)
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move { spa_fallback(req, &index).await }
                })),
        );
    }
}

async fn spa_fallback(
    req: ServiceRequest,
    index: &Path,
) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();
    tracing::debug!(path = %req.path(), "client-side route");
    let file = NamedFile::open_async(index).await?;
    let res = file.into_response(&req);
    Ok(ServiceResponse::new(req, res))
}
