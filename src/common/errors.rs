use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered with an error body; `message` is its human-readable text.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response from the content store: {0}")]
    Decode(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response from the auth provider: {0}")]
    Decode(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AuthError::Decode(err.to_string())
        } else {
            AuthError::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{label} is required")]
    Required {
        field: &'static str,
        label: &'static str,
    },

    #[error("{label} must be a whole number")]
    NotANumber {
        field: &'static str,
        label: &'static str,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FormError {
    /// Name of the offending field, when the error belongs next to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FormError::Required { field, .. } | FormError::NotANumber { field, .. } => Some(field),
            FormError::Store(_) => None,
        }
    }
}

/// A failed submit, split by where it is shown: validation errors sit under
/// their field, store rejections in the form's panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFeedback {
    field: Option<(&'static str, String)>,
    panel: Option<String>,
}

impl FormFeedback {
    pub fn from_error(err: &FormError) -> Self {
        match err.field() {
            Some(field) => Self {
                field: Some((field, err.to_string())),
                panel: None,
            },
            None => Self {
                field: None,
                panel: Some(err.to_string()),
            },
        }
    }

    pub fn for_field(&self, name: &str) -> Option<&str> {
        self.field
            .as_ref()
            .filter(|(field, _)| *field == name)
            .map(|(_, message)| message.as_str())
    }

    pub fn panel(&self) -> Option<&str> {
        self.panel.as_deref()
    }

    /// Drops the field's message once the user edits it.
    pub fn clear_field(&mut self, name: &str) {
        if self.for_field(name).is_some() {
            self.field = None;
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GithubError {
    #[error("GitHub responded with status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Malformed GitHub payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GithubError::Decode(err.to_string())
        } else {
            GithubError::Transport(err.to_string())
        }
    }
}
