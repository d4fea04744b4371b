mod common;

#[cfg(test)]
pub mod fetch_tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::oneshot;

    use super::common::*;

    use portfolio::common::StoreError;
    use portfolio::fetch::*;
    use portfolio::models::BlogPost;
    use portfolio::store::content::list_published_posts;

    const FAILURE: &str = "Failed to load blog posts. Please try again later.";

    #[tokio::test]
    async fn test_published_posts_load_newest_first() {
        let store = seeded_store();
        let recorder = Recorder::<Vec<BlogPost>>::default();
        let loader = Loader::new(recorder.clone(), FAILURE);

        assert!(loader.load(|| list_published_posts(&store)).await);

        let states = recorder.states();
        assert_eq!(states.len(), 2);
        assert!(states[0].is_loading());
        let posts = states[1].data().unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["rust-on-wasm", "hello-world"]);
    }

    #[tokio::test]
    async fn test_store_failure_shows_fixed_message() {
        let store = seeded_store();
        store.fail_next(StoreError::Transport("connection reset".into()));
        let recorder = Recorder::<Vec<BlogPost>>::default();
        let loader = Loader::new(recorder.clone(), FAILURE);

        assert!(loader.load(|| list_published_posts(&store)).await);

        let last = recorder.last().unwrap();
        assert_eq!(last.status(), FetchStatus::Error);
        assert_eq!(last.error(), Some(FAILURE));
        assert_eq!(last.presentation(3), Presentation::Failed(FAILURE));
    }

    #[tokio::test]
    async fn test_slow_first_response_is_discarded() {
        let recorder = Recorder::<u32>::default();
        let loader = Loader::new(recorder.clone(), "Failed");
        let (slow_tx, slow_rx) = oneshot::channel::<u32>();

        let first = loader.load(|| async move { slow_rx.await.map_err(|e| e.to_string()) });
        let second = async {
            let applied = loader.load(|| async { Ok::<_, String>(2) }).await;
            slow_tx.send(1).unwrap();
            applied
        };
        let (first_applied, second_applied) = tokio::join!(first, second);

        assert!(!first_applied);
        assert!(second_applied);
        assert_eq!(
            recorder.states(),
            vec![FetchState::Loading, FetchState::Loading, FetchState::Success(2)]
        );
    }

    #[tokio::test]
    async fn test_retired_loader_publishes_nothing() {
        let recorder = Recorder::<u32>::default();
        let loader = Loader::new(recorder.clone(), "Failed");
        let (tx, rx) = oneshot::channel::<u32>();

        let pending = loader.load(|| async move { rx.await.map_err(|e| e.to_string()) });
        let unmount = async {
            loader.retire();
            tx.send(7).unwrap();
        };
        let (applied, ()) = tokio::join!(pending, unmount);

        assert!(!applied);
        assert_eq!(recorder.states(), vec![FetchState::Loading]);
    }

    #[test]
    fn test_tag_filter_and_counts() {
        #[derive(Debug, PartialEq)]
        struct Card {
            tags: Vec<String>,
        }
        fn card(tags: &[&str]) -> Card {
            Card {
                tags: tags.iter().map(|t| t.to_string()).collect(),
            }
        }
        fn tagged(c: &Card, tag: &str) -> bool {
            c.tags.iter().any(|t| t == tag)
        }
        let cards = vec![card(&["Rust"]), card(&["Rust", "WASM"]), card(&["Notes"])];

        let options = filter::options(&cards, |c| c.tags.iter().map(String::as_str));
        assert_eq!(options, vec!["all", "Rust", "WASM", "Notes"]);

        let wasm = filter::apply(&cards, "WASM", tagged);
        assert_eq!(wasm, vec![&cards[1]]);
        assert_eq!(filter::apply(&cards, filter::ALL, |_, _| false).len(), 3);

        let counts = filter::counts(&cards, &["all", "Rust", "Go"], tagged);
        assert_eq!(
            counts,
            vec![("all".to_string(), 3), ("Rust".to_string(), 2), ("Go".to_string(), 0)]
        );
    }
}
