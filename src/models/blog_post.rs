use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContentStatus, null_as_default};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Estimated reading time in minutes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn status(&self) -> ContentStatus {
        ContentStatus::from_flag(self.is_published)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Date shown on cards: publication date, or creation date for drafts.
    pub fn display_date(&self) -> String {
        self.published_at
            .unwrap_or(self.created_at)
            .format("%B %-d, %Y")
            .to_string()
    }
}

/// Turns a title into a URL slug: lowercase ASCII letters, digits and single
/// dashes, with no leading or trailing dash.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    for c in cleaned.chars() {
        if c == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(c);
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust  &  WebAssembly -- 2024 "), "rust-webassembly-2024");
        assert_eq!(slugify("Ünïcode only"), "ncode-only");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_decodes_nullable_columns() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "title": "Draft",
            "slug": "draft",
            "excerpt": null,
            "content": "",
            "tags": null,
            "published_at": null,
            "read_time": 4,
            "is_published": false,
            "created_at": "2024-03-01T10:00:00+00:00",
            "updated_at": "2024-03-01T10:00:00.123456+00:00"
        }))
        .unwrap();

        assert_eq!(post.excerpt, "");
        assert!(post.tags.is_empty());
        assert_eq!(post.status(), ContentStatus::Draft);
        assert_eq!(post.display_date(), "March 1, 2024");
    }
}
