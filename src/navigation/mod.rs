//! Client-side page selection, history sync and scroll handoff.
//!
//! The URL is the single source of truth: the initial page and every history
//! pop go through [`Page::from_path`], so reloading a URL and navigating back
//! to it always select the same page.

mod handoff;
mod restore;

pub use handoff::{
    CARD_ID_KEY, FROM_BLOG_KEY, HandoffStore, ScrollHandoff, SessionStorage, blog_card_id,
};
pub use restore::{RestorePolicy, RestoreStep, ScrollRestore, Viewport};

pub const HOME_PATH: &str = "/";
pub const ADMIN_PATH: &str = "/admin";
pub const BLOG_PREFIX: &str = "/blog/";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Portfolio,
    Admin,
    /// The slug may be empty (`/blog/`), which renders as not found.
    BlogPost(String),
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path == ADMIN_PATH {
            Page::Admin
        } else if let Some(slug) = path.strip_prefix(BLOG_PREFIX) {
            Page::BlogPost(slug.to_string())
        } else {
            Page::Portfolio
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::Portfolio => HOME_PATH.to_string(),
            Page::Admin => ADMIN_PATH.to_string(),
            Page::BlogPost(slug) => format!("{BLOG_PREFIX}{slug}"),
        }
    }

    pub fn blog_slug(&self) -> Option<&str> {
        match self {
            Page::BlogPost(slug) => Some(slug),
            _ => None,
        }
    }
}

/// The browser's session history.
pub trait History {
    /// Path of the current entry, without query or fragment.
    fn current_path(&self) -> String;
    fn push(&self, path: &str);
}

/// What the shell should do with the scroll position after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAction {
    Keep,
    Top,
    Restore(ScrollHandoff),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub page: Page,
    pub scroll: ScrollAction,
}

pub struct NavigationController<H, S> {
    history: H,
    handoff: HandoffStore<S>,
    page: Page,
    /// Bumped by every transition; a restore is live only while it matches.
    generation: u64,
}

impl<H: History, S: SessionStorage> NavigationController<H, S> {
    /// Derives the initial page from the current URL.
    pub fn start(history: H, storage: S) -> (Self, Transition) {
        let page = Page::from_path(&history.current_path());
        let mut controller = Self {
            history,
            handoff: HandoffStore::new(storage),
            page: Page::Portfolio,
            generation: 0,
        };
        let transition = controller.enter(page);
        (controller, transition)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Opens a post. `return_to` names the card to restore when the reader
    /// comes back to the portfolio.
    pub fn navigate_to_blog_post(
        &mut self,
        slug: &str,
        return_to: Option<ScrollHandoff>,
    ) -> Transition {
        if let Some(handoff) = &return_to {
            self.handoff.save(handoff);
        }
        let page = Page::BlogPost(slug.to_string());
        self.history.push(&page.path());
        tracing::debug!(%slug, "navigating to blog post");
        self.enter(page)
    }

    pub fn navigate_to_home(&mut self) -> Transition {
        let page = Page::Portfolio;
        self.history.push(&page.path());
        self.enter(page)
    }

    pub fn navigate_to_admin(&mut self) -> Transition {
        let page = Page::Admin;
        self.history.push(&page.path());
        self.enter(page)
    }

    /// Re-derives the page after the browser moved through history.
    pub fn on_pop(&mut self) -> Transition {
        let page = Page::from_path(&self.history.current_path());
        self.enter(page)
    }

    /// Starts polling for a `Restore` target of the latest transition.
    pub fn begin_restore(&self, handoff: ScrollHandoff, policy: RestorePolicy) -> ScrollRestore {
        ScrollRestore::new(handoff, policy).started_at(self.generation)
    }

    /// False once the reader navigated after the restore began.
    pub fn is_current(&self, restore: &ScrollRestore) -> bool {
        restore.generation() == self.generation && self.page == Page::Portfolio
    }

    /// Consumes the handoff once its target was scrolled to, or abandoned.
    /// A stale restore, or one whose target was replaced, leaves the store alone.
    pub fn finish_restore(&self, restore: &ScrollRestore) {
        if !self.is_current(restore) {
            return;
        }
        if self.handoff.pending().as_ref() == Some(restore.target()) {
            self.handoff.clear();
        }
    }

    fn enter(&mut self, page: Page) -> Transition {
        self.generation += 1;
        self.page = page.clone();
        let scroll = match page {
            Page::Portfolio => match self.handoff.pending() {
                Some(handoff) => ScrollAction::Restore(handoff),
                None => ScrollAction::Top,
            },
            _ => ScrollAction::Keep,
        };
        Transition { page, scroll }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[rstest]
    #[case("/", Page::Portfolio)]
    #[case("/admin", Page::Admin)]
    #[case("/admin/", Page::Portfolio)]
    #[case("/blog/hello-world", Page::BlogPost("hello-world".into()))]
    #[case("/blog/", Page::BlogPost(String::new()))]
    #[case("/blog", Page::Portfolio)]
    #[case("/projects", Page::Portfolio)]
    fn test_from_path(#[case] path: &str, #[case] expected: Page) {
        assert_eq!(Page::from_path(path), expected);
    }

    #[test]
    fn test_path_round_trips_through_from_path() {
        for page in [
            Page::Portfolio,
            Page::Admin,
            Page::BlogPost("rust-wasm".into()),
        ] {
            assert_eq!(Page::from_path(&page.path()), page);
        }
    }

    #[derive(Clone, Default)]
    struct FakeBrowser {
        path: Rc<RefCell<String>>,
        storage: Rc<RefCell<HashMap<String, String>>>,
    }

    impl History for FakeBrowser {
        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }

        fn push(&self, path: &str) {
            *self.path.borrow_mut() = path.to_string();
        }
    }

    impl SessionStorage for FakeBrowser {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.storage.borrow_mut().insert(key.into(), value.into());
        }

        fn remove(&self, key: &str) {
            self.storage.borrow_mut().remove(key);
        }
    }

    #[test]
    fn test_handoff_restores_on_home_and_clears_both_keys() {
        let browser = FakeBrowser::default();
        browser.push("/");
        let (mut nav, first) = NavigationController::start(browser.clone(), browser.clone());
        assert_eq!(first.scroll, ScrollAction::Top);

        let to_post =
            nav.navigate_to_blog_post("a", Some(ScrollHandoff::new("blog-post-3")));
        assert_eq!(to_post.scroll, ScrollAction::Keep);
        assert_eq!(browser.current_path(), "/blog/a");

        let home = nav.navigate_to_home();
        let handoff = ScrollHandoff::new("blog-post-3");
        assert_eq!(home.scroll, ScrollAction::Restore(handoff.clone()));

        let restore = nav.begin_restore(handoff, RestorePolicy::default());
        nav.finish_restore(&restore);
        assert!(browser.storage.borrow().is_empty());
        assert_eq!(nav.on_pop().scroll, ScrollAction::Top);
    }

    #[test]
    fn test_stale_restore_keeps_newer_handoff() {
        let browser = FakeBrowser::default();
        browser.push("/");
        let (mut nav, _) = NavigationController::start(browser.clone(), browser.clone());

        nav.navigate_to_blog_post("a", Some(ScrollHandoff::blog_card(7)));
        let home = nav.navigate_to_home();
        assert_eq!(home.scroll, ScrollAction::Restore(ScrollHandoff::blog_card(7)));
        let stale = nav.begin_restore(ScrollHandoff::blog_card(7), RestorePolicy::default());
        assert!(nav.is_current(&stale));

        nav.navigate_to_blog_post("b", Some(ScrollHandoff::blog_card(1)));
        assert!(!nav.is_current(&stale));
        nav.finish_restore(&stale);

        browser.push("/");
        assert_eq!(
            nav.on_pop().scroll,
            ScrollAction::Restore(ScrollHandoff::blog_card(1))
        );
    }
}
