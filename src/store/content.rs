//! Typed reads used by the public site and the dashboard overview

use serde::Deserialize;

use super::{ContentStore, Query};
use crate::common::StoreError;
use crate::models::{Achievement, BlogPost, Certification, Skill};

pub const BLOG_POSTS: &str = "blog_posts";
pub const CERTIFICATIONS: &str = "certifications";
pub const ACHIEVEMENTS: &str = "achievements";
pub const SKILLS: &str = "skills";

pub async fn list_published_posts<S: ContentStore>(
    store: &S,
) -> Result<Vec<BlogPost>, StoreError> {
    let query = Query::new()
        .eq("is_published", true)
        .order_desc("published_at");
    store.select(BLOG_POSTS, &query).await
}

/// Published post with this slug; drafts are invisible.
pub async fn get_published_by_slug<S: ContentStore>(
    store: &S,
    slug: &str,
) -> Result<Option<BlogPost>, StoreError> {
    if slug.is_empty() {
        return Ok(None);
    }
    let query = Query::new()
        .eq("slug", slug)
        .eq("is_published", true);
    store.select_one(BLOG_POSTS, &query).await
}

pub async fn list_certifications<S: ContentStore>(
    store: &S,
) -> Result<Vec<Certification>, StoreError> {
    store
        .select(CERTIFICATIONS, &Query::new().order_desc("issue_date"))
        .await
}

pub async fn list_achievements<S: ContentStore>(
    store: &S,
) -> Result<Vec<Achievement>, StoreError> {
    store
        .select(ACHIEVEMENTS, &Query::new().order_desc("date"))
        .await
}

pub async fn list_featured_skills<S: ContentStore>(
    store: &S,
) -> Result<Vec<Skill>, StoreError> {
    let query = Query::new()
        .eq("is_featured", true)
        .order_desc("proficiency_level");
    store.select(SKILLS, &query).await
}

/// Certifications and achievements, fetched concurrently; either failure fails both.
pub async fn list_credentials<S: ContentStore>(
    store: &S,
) -> Result<(Vec<Certification>, Vec<Achievement>), StoreError> {
    futures_util::try_join!(list_certifications(store), list_achievements(store))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub certifications: usize,
    pub achievements: usize,
    pub skills: usize,
    pub featured_skills: usize,
}

#[derive(Deserialize)]
struct PostFlags {
    #[serde(default)]
    is_published: Option<bool>,
}

#[derive(Deserialize)]
struct SkillFlags {
    #[serde(default)]
    is_featured: Option<bool>,
}

#[derive(Deserialize)]
struct IdOnly {}

pub async fn dashboard_stats<S: ContentStore>(store: &S) -> Result<DashboardStats, StoreError> {
    let post_query = Query::new().columns("id,is_published");
    let id_query = Query::new().columns("id");
    let skill_query = Query::new().columns("id,is_featured");

    let (posts, certifications, achievements, skills) = futures_util::try_join!(
        store.select::<PostFlags>(BLOG_POSTS, &post_query),
        store.select::<IdOnly>(CERTIFICATIONS, &id_query),
        store.select::<IdOnly>(ACHIEVEMENTS, &id_query),
        store.select::<SkillFlags>(SKILLS, &skill_query),
    )?;

    Ok(DashboardStats {
        total_posts: posts.len(),
        published_posts: posts
            .iter()
            .filter(|p| p.is_published.unwrap_or(false))
            .count(),
        certifications: certifications.len(),
        achievements: achievements.len(),
        skills: skills.len(),
        featured_skills: skills
            .iter()
            .filter(|s| s.is_featured.unwrap_or(false))
            .count(),
    })
}
