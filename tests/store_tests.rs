mod common;

#[cfg(test)]
pub mod store_tests {
    use pretty_assertions::assert_eq;

    use super::common::*;

    use portfolio::models::*;
    use portfolio::store::content::*;
    use portfolio::store::{ContentStore, Query};

    #[tokio::test]
    async fn test_get_published_by_slug() {
        let store = seeded_store();

        let post = get_published_by_slug(&store, "hello-world").await.unwrap().unwrap();
        assert_eq!(post.id, id(POST_HELLO));
        assert_eq!(post.display_date(), "February 1, 2024");

        assert_eq!(get_published_by_slug(&store, "work-in-progress").await.unwrap(), None);
        assert_eq!(get_published_by_slug(&store, "missing").await.unwrap(), None);
        assert_eq!(get_published_by_slug(&store, "").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_published_posts_skip_drafts() {
        let store = seeded_store();

        let posts = list_published_posts(&store).await.unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["rust-on-wasm", "hello-world"]);
    }

    #[tokio::test]
    async fn test_credentials_load_together() {
        let store = seeded_store();

        let (certifications, achievements) = list_credentials(&store).await.unwrap();
        assert_eq!(certifications[0].title, "Scrum Master");
        assert_eq!(certifications.len(), 2);
        assert_eq!(achievements[0].category, AchievementCategory::Award);
        assert_eq!(certifications[1].category, CertificationCategory::Technical);
    }

    #[tokio::test]
    async fn test_credentials_fail_together() {
        let store = seeded_store();
        store.fail_next(portfolio::common::StoreError::Transport("offline".into()));

        assert!(list_credentials(&store).await.is_err());
    }

    #[tokio::test]
    async fn test_featured_skills_by_proficiency() {
        let store = seeded_store();

        let featured = list_featured_skills(&store).await.unwrap();
        let names: Vec<&str> = featured.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "React"]);
        assert_eq!(featured[0].proficiency_label(), "Expert");
        assert!(featured.iter().all(|s| s.category != SkillCategory::Database));
    }

    #[tokio::test]
    async fn test_dashboard_stats() {
        let store = seeded_store();

        assert_eq!(
            dashboard_stats(&store).await.unwrap(),
            DashboardStats {
                total_posts: 3,
                published_posts: 2,
                certifications: 2,
                achievements: 1,
                skills: 3,
                featured_skills: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_order_and_limit() {
        let store = seeded_store();

        let query = Query::new().order_desc("proficiency_level").limit(2);
        let strongest: Vec<Skill> = store.select(SKILLS, &query).await.unwrap();
        let names: Vec<&str> = strongest.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "React"]);
    }
}
