//! Browser-backed implementations of the navigation and session traits

use leptos::prelude::{document, window};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage};

use crate::navigation::{HOME_PATH, History, SessionStorage, Viewport};
use crate::services::auth::{Session, SessionVault};

const SESSION_KEY: &str = "portfolio.auth.session";

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        window()
            .location()
            .pathname()
            .unwrap_or_else(|_| HOME_PATH.to_string())
    }

    fn push(&self, path: &str) {
        let pushed = window()
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            tracing::warn!(%path, error = ?e, "history push failed");
        }
    }
}

/// The tab's `sessionStorage`. Storage failures read as absent keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

fn session_storage() -> Option<Storage> {
    window().session_storage().ok().flatten()
}

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(Err(e)) = session_storage().map(|s| s.set_item(key, value)) {
            tracing::warn!(%key, error = ?e, "sessionStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_into_view(&self, element_id: &str) -> bool {
        let Some(element) = document().get_element_by_id(element_id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Keeps the signed-in session in `localStorage` across reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageVault;

impl SessionVault for LocalStorageVault {
    fn load(&self) -> Option<Session> {
        let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable stored session");
                None
            }
        }
    }

    fn save(&self, session: Option<&Session>) {
        let Some(storage) = local_storage() else {
            return;
        };
        let written = match session.map(serde_json::to_string) {
            Some(Ok(raw)) => storage.set_item(SESSION_KEY, &raw),
            Some(Err(e)) => {
                crate::log_err!("session serialization", e);
                return;
            }
            None => storage.remove_item(SESSION_KEY),
        };
        if let Err(e) = written {
            tracing::warn!(error = ?e, "localStorage write failed");
        }
    }
}

/// Full page reload, the coarse-grained retry offered by error panels.
pub fn reload_page() {
    if let Err(e) = window().location().reload() {
        tracing::warn!(error = ?e, "reload failed");
    }
}

pub fn current_url() -> String {
    window().location().href().unwrap_or_default()
}

pub fn copy_to_clipboard(text: &str) {
    let _ = window().navigator().clipboard().write_text(text);
}

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}
