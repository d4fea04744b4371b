/// Tab-scoped key/value storage (the browser's `sessionStorage`).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub const FROM_BLOG_KEY: &str = "fromBlog";
pub const CARD_ID_KEY: &str = "scrollToCardId";

/// The card to scroll back to when returning to the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrollHandoff {
    pub target_element_id: String,
}

impl ScrollHandoff {
    pub fn new(target_element_id: impl Into<String>) -> Self {
        Self {
            target_element_id: target_element_id.into(),
        }
    }

    /// Handoff back to the blog card at `index` of the list as rendered.
    pub fn blog_card(index: usize) -> Self {
        Self::new(blog_card_id(index))
    }
}

/// Element id of the blog card at `index` of the filtered list.
pub fn blog_card_id(index: usize) -> String {
    format!("blog-post-{index}")
}

/// Sole owner of the two handoff keys; they are written and cleared together.
#[derive(Debug, Clone)]
pub struct HandoffStore<S> {
    storage: S,
}

impl<S: SessionStorage> HandoffStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn save(&self, handoff: &ScrollHandoff) {
        self.storage.set(FROM_BLOG_KEY, "true");
        self.storage.set(CARD_ID_KEY, &handoff.target_element_id);
    }

    /// The pending handoff, if both keys are present and well-formed.
    pub fn pending(&self) -> Option<ScrollHandoff> {
        if self.storage.get(FROM_BLOG_KEY).as_deref() != Some("true") {
            return None;
        }
        self.storage
            .get(CARD_ID_KEY)
            .filter(|id| !id.is_empty())
            .map(ScrollHandoff::new)
    }

    pub fn clear(&self) {
        self.storage.remove(FROM_BLOG_KEY);
        self.storage.remove(CARD_ID_KEY);
    }
}
