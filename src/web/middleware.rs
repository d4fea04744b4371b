use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{Ready, ok};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Fetch targets the app talks to besides its own origin.
const EXTERNAL_SOURCES: &str = "https://api.github.com";

/// Builds the content security policy, allowing the backend origin as a
/// fetch target when one is configured.
pub fn content_security_policy(backend_origin: Option<&str>) -> String {
    let connect = match backend_origin {
        Some(origin) => format!("'self' {origin} {EXTERNAL_SOURCES}"),
        None => format!("'self' {EXTERNAL_SOURCES}"),
    };
    format!(
        "default-src 'self'; script-src 'self' 'wasm-unsafe-eval'; \
         style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; \
         connect-src {connect}; frame-ancestors 'none'"
    )
}

/// Security headers middleware
#[derive(Clone)]
pub struct SecurityHeaders {
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl SecurityHeaders {
    pub fn new(backend_origin: Option<&str>) -> Self {
        let mut headers = vec![
            // Prevent clickjacking
            (HeaderName::from_static("x-frame-options"), HeaderValue::from_static("DENY")),
            // Prevent MIME sniffing
            (
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ),
            (
                HeaderName::from_static("strict-transport-security"),
                HeaderValue::from_static("max-age=31536000; includeSubDomains"),
            ),
            (
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ),
        ];
        match HeaderValue::from_str(&content_security_policy(backend_origin)) {
            Ok(csp) => headers.push((HeaderName::from_static("content-security-policy"), csp)),
            Err(e) => {
                tracing::warn!(error = %e, "content security policy is not a valid header value")
            }
        }
        Self {
            headers: Arc::new(headers),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecurityHeadersMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SecurityHeadersMiddleware {
            service,
            headers: Arc::clone(&self.headers),
        })
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let headers = Arc::clone(&self.headers);

        Box::pin(async move {
            let mut res = fut.await?;
            for (name, value) in headers.iter() {
                res.headers_mut().insert(name.clone(), value.clone());
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_allows_backend_origin() {
        let csp = content_security_policy(Some("https://abc.supabase.co"));
        assert!(csp.contains("connect-src 'self' https://abc.supabase.co https://api.github.com;"));
        let without_backend = content_security_policy(None);
        assert!(without_backend.contains("connect-src 'self' https://api.github.com;"));
    }
}
