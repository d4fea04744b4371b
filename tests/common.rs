#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use uuid::Uuid;

use portfolio::fetch::{FetchState, StateSink};
use portfolio::navigation::{History, SessionStorage, Viewport};
use portfolio::store::MemoryStore;
use portfolio::store::content::{ACHIEVEMENTS, BLOG_POSTS, CERTIFICATIONS, SKILLS};

pub const POST_HELLO: &str = "00000000-0000-0000-0000-000000000001";
pub const POST_WASM: &str = "00000000-0000-0000-0000-000000000002";
pub const POST_DRAFT: &str = "00000000-0000-0000-0000-000000000003";
pub const CERT_AWS: &str = "00000000-0000-0000-0000-0000000000a1";
pub const SKILL_RUST: &str = "00000000-0000-0000-0000-0000000000b1";

pub fn id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap()
}

/// Address bar plus `sessionStorage` of one tab.
#[derive(Clone, Default)]
pub struct FakeTab {
    pub path: Rc<RefCell<String>>,
    pub pushes: Rc<RefCell<Vec<String>>>,
    pub storage: Rc<RefCell<HashMap<String, String>>>,
}

impl FakeTab {
    pub fn at(path: &str) -> Self {
        let tab = Self::default();
        *tab.path.borrow_mut() = path.to_string();
        tab
    }

    /// The browser's back button: the address changes, nothing is pushed.
    pub fn go_back_to(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
    }
}

impl History for FakeTab {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn push(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.pushes.borrow_mut().push(path.to_string());
    }
}

impl SessionStorage for FakeTab {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.storage.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.storage.borrow_mut().remove(key);
    }
}

/// Document whose elements show up after a number of polls.
#[derive(Default)]
pub struct FakeDocument {
    pub rendered_after: HashMap<String, u32>,
    pub polls: RefCell<u32>,
    pub scrolled_to: RefCell<Vec<String>>,
    pub top_scrolls: RefCell<u32>,
}

impl FakeDocument {
    pub fn with_element(mut self, element_id: &str, rendered_after: u32) -> Self {
        self.rendered_after.insert(element_id.to_string(), rendered_after);
        self
    }
}

impl Viewport for FakeDocument {
    fn scroll_into_view(&self, element_id: &str) -> bool {
        *self.polls.borrow_mut() += 1;
        let polls = *self.polls.borrow();
        match self.rendered_after.get(element_id) {
            Some(after) if polls >= *after => {
                self.scrolled_to.borrow_mut().push(element_id.to_string());
                true
            }
            _ => false,
        }
    }

    fn scroll_to_top(&self) {
        *self.top_scrolls.borrow_mut() += 1;
    }
}

/// Sink that keeps every published state.
#[derive(Clone)]
pub struct Recorder<T>(pub Arc<Mutex<Vec<FetchState<T>>>>);

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T: Clone> Recorder<T> {
    pub fn states(&self) -> Vec<FetchState<T>> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<FetchState<T>> {
        self.0.lock().unwrap().last().cloned()
    }
}

impl<T> StateSink<T> for Recorder<T> {
    fn publish(&self, state: FetchState<T>) {
        self.0.lock().unwrap().push(state);
    }
}

pub fn post_row(id: &str, slug: &str, tags: &[&str], published_at: Option<&str>) -> Value {
    json!({
        "id": id,
        "title": format!("Post {slug}"),
        "slug": slug,
        "excerpt": format!("About {slug}"),
        "content": format!("# {slug}\n\nBody."),
        "tags": tags,
        "published_at": published_at,
        "read_time": 4,
        "is_published": published_at.is_some(),
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn certification_row(id: &str, title: &str, category: &str, issue_date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "issuer": "Amazon Web Services",
        "issue_date": issue_date,
        "expiry_date": null,
        "credential_id": "AWS-123",
        "verification_url": "https://aws.amazon.com/verification",
        "image_url": "https://images.example.com/aws.png",
        "description": "Cloud fundamentals",
        "skills": ["AWS", "Cloud"],
        "category": category,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn achievement_row(id: &str, title: &str, category: &str, date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Regional contest",
        "date": date,
        "category": category,
        "icon": "🏆",
        "details": "First place",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn skill_row(id: &str, name: &str, category: &str, level: u8, featured: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "technologies": ["Tokio", "Serde"],
        "icon": "Code",
        "proficiency_level": level,
        "years_experience": 3,
        "description": format!("{name} work"),
        "is_featured": featured,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

/// Two published posts, one draft, and a little of everything else.
pub fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.seed(
        BLOG_POSTS,
        [
            post_row(POST_HELLO, "hello-world", &["Rust"], Some("2024-02-01T00:00:00Z")),
            post_row(POST_WASM, "rust-on-wasm", &["Rust", "WASM"], Some("2024-03-01T00:00:00Z")),
            post_row(POST_DRAFT, "work-in-progress", &["Notes"], None),
        ],
    );
    store.seed(
        CERTIFICATIONS,
        [
            certification_row(CERT_AWS, "Cloud Practitioner", "technical", "2023-05-10"),
            certification_row(
                "00000000-0000-0000-0000-0000000000a2",
                "Scrum Master",
                "professional",
                "2024-01-15",
            ),
        ],
    );
    store.seed(
        ACHIEVEMENTS,
        [achievement_row(
            "00000000-0000-0000-0000-0000000000c1",
            "Hackathon Winner",
            "award",
            "2023-11-20",
        )],
    );
    store.seed(
        SKILLS,
        [
            skill_row(SKILL_RUST, "Rust", "backend", 5, true),
            skill_row("00000000-0000-0000-0000-0000000000b2", "React", "frontend", 4, true),
            skill_row("00000000-0000-0000-0000-0000000000b3", "PostgreSQL", "database", 3, false),
        ],
    );
    store
}
