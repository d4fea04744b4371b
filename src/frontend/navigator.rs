//! Connects the navigation controller to the page signal and the window

use leptos::prelude::*;

use super::browser::{BrowserHistory, BrowserSessionStorage, BrowserViewport};
use crate::navigation::{
    NavigationController, Page, RestorePolicy, RestoreStep, ScrollAction, ScrollHandoff,
    ScrollRestore, Transition, Viewport,
};

type BrowserNavigation = NavigationController<BrowserHistory, BrowserSessionStorage>;

/// Copyable handle provided as context to every page.
#[derive(Clone, Copy)]
pub struct Navigator {
    controller: StoredValue<BrowserNavigation>,
    page: RwSignal<Page>,
}

impl Navigator {
    /// Selects the initial page from the URL.
    pub fn start() -> Self {
        let (controller, transition) =
            NavigationController::start(BrowserHistory, BrowserSessionStorage);
        let navigator = Self {
            controller: StoredValue::new(controller),
            page: RwSignal::new(transition.page.clone()),
        };
        navigator.apply(transition);
        navigator
    }

    pub fn page(&self) -> ReadSignal<Page> {
        self.page.read_only()
    }

    pub fn blog_post(&self, slug: &str, return_to: Option<ScrollHandoff>) {
        self.run(|c| c.navigate_to_blog_post(slug, return_to));
    }

    pub fn home(&self) {
        self.run(|c| c.navigate_to_home());
    }

    pub fn admin(&self) {
        self.run(|c| c.navigate_to_admin());
    }

    /// Handler for the window's `popstate` event.
    pub fn on_pop(&self) {
        self.run(|c| c.on_pop());
    }

    fn run(&self, step: impl FnOnce(&mut BrowserNavigation) -> Transition) {
        let mut transition = None;
        self.controller
            .update_value(|controller| transition = Some(step(controller)));
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn apply(&self, transition: Transition) {
        if self.page.get_untracked() != transition.page {
            self.page.set(transition.page);
        }
        match transition.scroll {
            ScrollAction::Keep => {}
            ScrollAction::Top => BrowserViewport.scroll_to_top(),
            ScrollAction::Restore(handoff) => {
                let restore = self.controller.try_with_value(|controller| {
                    controller.begin_restore(handoff, RestorePolicy::default())
                });
                if let Some(restore) = restore {
                    let delay = restore.first_delay();
                    self.poll_restore(restore, delay);
                }
            }
        }
    }

    /// Polls until the target renders; a later navigation ends the poll.
    fn poll_restore(self, mut restore: ScrollRestore, delay: std::time::Duration) {
        set_timeout(
            move || {
                let current = self
                    .controller
                    .try_with_value(|controller| controller.is_current(&restore))
                    .unwrap_or(false);
                if !current {
                    tracing::debug!(
                        target = %restore.target().target_element_id,
                        "scroll restore superseded"
                    );
                    return;
                }
                match restore.attempt(&BrowserViewport) {
                    RestoreStep::RetryAfter(next) => self.poll_restore(restore, next),
                    RestoreStep::Done | RestoreStep::GaveUp => {
                        self.controller
                            .with_value(|controller| controller.finish_restore(&restore));
                    }
                }
            },
            delay,
        );
    }
}
