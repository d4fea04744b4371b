//! Browser application: shell, sections, pages and the admin dashboard

pub mod browser;
pub mod components;
pub mod hooks;
mod navigator;
pub mod pages;
pub mod sections;

pub use navigator::Navigator;

use std::sync::Arc;
use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use leptos_meta::*;

use crate::common::ConfigError;
use crate::config::{BackendConfig, profile};
use crate::navigation::Page;
use crate::services::auth::{RestAuth, SessionHub};
use crate::store::RestStore;
use browser::LocalStorageVault;
use components::LoadingScreen;
use pages::{AdminPage, BlogPostPage, PortfolioPage};

/// Start-up screen duration on the portfolio page.
const LOADING_SCREEN: Duration = Duration::from_secs(3);

/// Hosted backend handles, shared through context.
#[derive(Clone)]
pub struct Backend {
    config: Result<BackendConfig, ConfigError>,
    sessions: SessionHub,
}

impl Backend {
    pub fn from_build_env() -> Self {
        let config = BackendConfig::from_build_env();
        if let Err(e) = &config {
            tracing::warn!(
                error = %e,
                "backend is not configured; content sections will report errors"
            );
        }
        Self {
            config,
            sessions: SessionHub::with_vault(Arc::new(LocalStorageVault)),
        }
    }

    pub fn store(&self) -> RestStore {
        RestStore::new(self.config.clone(), self.sessions.clone())
    }

    pub fn auth(&self) -> RestAuth {
        RestAuth::new(self.config.clone(), self.sessions.clone())
    }
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Backend::from_build_env());

    let navigator = Navigator::start();
    provide_context(navigator);
    let _ = window_event_listener(ev::popstate, move |_| navigator.on_pop());

    let booting = RwSignal::new(true);
    set_timeout(move || booting.set(false), LOADING_SCREEN);

    let page = navigator.page();

    view! {
        <Title text=format!("{} | {}", profile::NAME, profile::ROLE)/>
        <Meta name="description" content=profile::TAGLINE/>

        {move || match page.get() {
            Page::Admin => view! { <AdminPage/> }.into_any(),
            Page::BlogPost(slug) => view! { <BlogPostPage slug=slug/> }.into_any(),
            Page::Portfolio => view! {
                <Show when=move || !booting.get() fallback=|| view! { <LoadingScreen/> }>
                    <PortfolioPage/>
                </Show>
            }
            .into_any(),
        }}
    }
}
