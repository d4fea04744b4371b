//! Reactive glue between the fetch lifecycle and Leptos signals

use std::fmt::Display;
use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::components::{EmptyState, ErrorPanel, SkeletonGrid};
use crate::fetch::{FetchState, IsEmpty, Loader, Presentation, StateSink};

impl<T: Send + Sync + 'static> StateSink<T> for RwSignal<FetchState<T>> {
    fn publish(&self, state: FetchState<T>) {
        if self.try_set(state).is_some() {
            tracing::debug!("fetch state dropped after its owner was disposed");
        }
    }
}

/// A fetch owned by the calling component.
pub struct Fetch<T: 'static> {
    pub state: RwSignal<FetchState<T>>,
    trigger: RwSignal<u32>,
}

impl<T: 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Fetch<T> {}

impl<T: Send + Sync + 'static> Fetch<T> {
    /// Restarts the lifecycle from `Loading`. A no-op once the owner is gone.
    pub fn reload(&self) {
        self.trigger.try_update(|n| *n = n.wrapping_add(1));
    }
}

/// Runs `fetch` on mount, again whenever a signal it reads changes, and on
/// [`Fetch::reload`]. Responses arriving after unmount are dropped.
pub fn use_fetch<T, F, Fut, E>(failure_message: &'static str, fetch: F) -> Fetch<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display + 'static,
{
    let state = RwSignal::new(FetchState::Loading);
    let trigger = RwSignal::new(0u32);
    let loader = Loader::new(state, failure_message);

    on_cleanup({
        let loader = loader.clone();
        move || loader.retire()
    });

    Effect::new(move |_| {
        trigger.track();
        let pending = fetch();
        let loader = loader.clone();
        spawn_local(async move {
            loader.load(move || pending).await;
        });
    });

    Fetch { state, trigger }
}

/// Skeletons, error panel, empty text or content, following the state.
pub fn fetch_view<T, V>(
    state: RwSignal<FetchState<T>>,
    skeletons: usize,
    empty: &'static str,
    ready: impl Fn(&T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: IsEmpty + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        state.with(|current| match current.presentation(skeletons) {
            Presentation::Skeletons(count) => view! { <SkeletonGrid count=count/> }.into_any(),
            Presentation::Failed(message) => view! { <ErrorPanel message=message.to_string()/> }.into_any(),
            Presentation::Empty => view! { <EmptyState message=empty/> }.into_any(),
            Presentation::Ready(data) => ready(data).into_any(),
        })
    }
}
