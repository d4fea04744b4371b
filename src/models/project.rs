use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A GitHub repository as returned by the public repos API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

impl Project {
    /// Social preview image GitHub renders for every public repository.
    pub fn preview_image(&self) -> String {
        format!(
            "https://opengraph.githubassets.com/1/{}/{}",
            self.owner.login, self.name
        )
    }

    /// Live demo link, when the repository declares a non-empty homepage.
    pub fn demo_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }

    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or("software")
    }
}
