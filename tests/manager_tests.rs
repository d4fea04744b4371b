mod common;

#[cfg(test)]
pub mod manager_tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::common::*;

    use portfolio::common::{FormError, FormFeedback, StoreError};
    use portfolio::manager::form::FormValues;
    use portfolio::manager::*;
    use portfolio::models::*;
    use portfolio::store::MemoryStore;
    use portfolio::store::content::{BLOG_POSTS, CERTIFICATIONS, SKILLS};

    fn posts(store: &MemoryStore) -> ContentManager<BlogPost, MemoryStore> {
        ContentManager::new(store.clone())
    }

    fn new_post() -> FormValues {
        let mut values = FormValues::blank::<BlogPost>()
            .with("title", "Async Rust in the Browser")
            .with("excerpt", "Futures on wasm")
            .with("content", "## Spawning\n\nUse spawn_local.")
            .with("tags", "Rust, WASM, ")
            .with("read_time", "7");
        BlogPost::on_field_change(&mut values, "title", true);
        values
    }

    #[tokio::test]
    async fn test_list_includes_drafts() {
        let store = seeded_store();

        let all = posts(&store).list().await.unwrap();
        assert_eq!(all.len(), 3);
        let drafts: Vec<_> = all.iter().filter(|p| p.matches_filter("draft")).collect();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].slug, "work-in-progress");
    }

    #[tokio::test]
    async fn test_create_post() {
        let store = seeded_store();

        posts(&store).save(None, &new_post()).await.unwrap();

        let created = posts(&store)
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.slug == "async-rust-in-the-browser")
            .unwrap();
        assert_eq!(created.tags, vec!["Rust", "WASM"]);
        assert_eq!(created.read_time, 7);
        assert!(!created.is_published);
        assert_eq!(created.published_at, None);
    }

    #[tokio::test]
    async fn test_edit_keeps_slug_and_updates_in_place() {
        let store = seeded_store();
        let original = posts(&store)
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == id(POST_HELLO))
            .unwrap();

        let view = ManagerView::Edit(original.clone());
        let mut values = view.initial_values().with("title", "Hello again");
        BlogPost::on_field_change(&mut values, "title", false);
        assert_eq!(values.get("tags"), "Rust");

        posts(&store).save(view.editing_id(), &values).await.unwrap();

        let row = store.find(BLOG_POSTS, id(POST_HELLO)).unwrap();
        assert_eq!(row["title"], json!("Hello again"));
        assert_eq!(row["slug"], json!("hello-world"));
        assert_eq!(store.rows(BLOG_POSTS).len(), 3);
    }

    #[tokio::test]
    async fn test_missing_field_never_reaches_store() {
        let store = seeded_store();
        let values = new_post().with("content", "  ");

        let err = posts(&store).save(None, &values).await.unwrap_err();
        assert_eq!(err.to_string(), "Content (Markdown) is required");
        assert_eq!(store.rows(BLOG_POSTS).len(), 3);

        let feedback = FormFeedback::from_error(&err);
        assert_eq!(feedback.for_field("content"), Some("Content (Markdown) is required"));
        assert_eq!(feedback.panel(), None);
    }

    #[tokio::test]
    async fn test_store_rejection_is_shown_verbatim() {
        let store = seeded_store();
        let message = "duplicate key value violates unique constraint \"blog_posts_slug_key\"";
        store.fail_next(StoreError::Rejected {
            status: 409,
            message: message.to_string(),
        });

        let err = posts(&store).save(None, &new_post()).await.unwrap_err();
        assert!(matches!(err, FormError::Store(_)));
        assert_eq!(err.to_string(), message);
        assert_eq!(FormFeedback::from_error(&err).panel(), Some(message));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = seeded_store();
        let manager = posts(&store);

        manager.remove(id(POST_DRAFT)).await.unwrap();
        manager.remove(id(POST_DRAFT)).await.unwrap();
        assert_eq!(manager.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_publish_writes_flag_and_time_together() {
        let store = seeded_store();
        let manager = posts(&store);
        let draft = manager
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == id(POST_DRAFT))
            .unwrap();

        manager.toggle_publish(&draft).await.unwrap();
        let row = store.find(BLOG_POSTS, id(POST_DRAFT)).unwrap();
        assert_eq!(row["is_published"], json!(true));
        assert!(row["published_at"].is_string());

        let published = manager
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == id(POST_DRAFT))
            .unwrap();
        manager.toggle_publish(&published).await.unwrap();
        let row = store.find(BLOG_POSTS, id(POST_DRAFT)).unwrap();
        assert_eq!(row["is_published"], json!(false));
        assert_eq!(row["published_at"], Value::Null);
    }

    #[tokio::test]
    async fn test_certification_without_expiry() {
        let store = seeded_store();
        let manager: ContentManager<Certification, _> = ContentManager::new(store.clone());
        let values = FormValues::blank::<Certification>()
            .with("title", "Rust Fundamentals")
            .with("issuer", "Linux Foundation")
            .with("issue_date", "2024-06-01")
            .with("credential_id", "LF-42")
            .with("verification_url", "https://training.linuxfoundation.org/verify")
            .with("image_url", "https://images.example.com/lf.png")
            .with("description", "Ownership and borrowing")
            .with("skills", "Rust,  Cargo");

        manager.save(None, &values).await.unwrap();

        let newest = manager.list().await.unwrap().remove(0);
        assert_eq!(newest.title, "Rust Fundamentals");
        assert_eq!(newest.expiry_date, None);
        assert_eq!(newest.skills, vec!["Rust", "Cargo"]);
        assert_eq!(newest.category, CertificationCategory::Technical);
        assert_eq!(store.rows(CERTIFICATIONS).len(), 3);
    }

    #[tokio::test]
    async fn test_skill_edit_round_trips_through_form() {
        let store = seeded_store();
        let manager: ContentManager<Skill, _> = ContentManager::new(store.clone());
        let skills = manager.list().await.unwrap();
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "React", "PostgreSQL"]);

        let values = skills[0].to_form();
        assert_eq!(values.get("technologies"), "Tokio, Serde");
        assert_eq!(values.get("proficiency_level"), "5");

        manager
            .save(Some(skills[0].id), &values.with("proficiency_level", "4"))
            .await
            .unwrap();
        let row = store.find(SKILLS, id(SKILL_RUST)).unwrap();
        assert_eq!(row["proficiency_level"], json!(4));
        assert_eq!(row["technologies"], json!(["Tokio", "Serde"]));
    }

    #[test]
    fn test_skill_filter_counts_cover_categories() {
        let values: Vec<&str> = Skill::filters().iter().map(|(v, _)| *v).collect();
        assert_eq!(values[0], "all");
        assert!(values.contains(&"database"));
        assert!(Skill::SHOW_FILTER_COUNTS);
        assert!(!BlogPost::SHOW_FILTER_COUNTS);
    }
}
