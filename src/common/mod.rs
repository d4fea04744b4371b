//! Shared error types and logging helpers

pub mod errors;
pub mod macros;

pub use errors::{AuthError, ConfigError, FormError, FormFeedback, GithubError, StoreError};
