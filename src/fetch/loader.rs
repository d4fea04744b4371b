use std::fmt::Display;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use super::FetchState;

/// Identity of one `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Issues request tokens and remembers which one is current.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
    retired: Arc<AtomicBool>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no newer request was issued and the owner is still mounted.
    pub fn is_current(&self, token: RequestToken) -> bool {
        !self.is_retired() && self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Marks the owner as gone; every outstanding response is dropped.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
    }

    pub fn is_retired(&self) -> bool {
        self.retired.load(Ordering::SeqCst)
    }
}

/// Where a loader publishes state changes (a reactive signal in the app).
pub trait StateSink<T> {
    fn publish(&self, state: FetchState<T>);
}

/// Runs fetches for one owner and publishes only the latest outcome.
pub struct Loader<T, K> {
    tracker: RequestTracker,
    sink: K,
    failure_message: &'static str,
    _data: PhantomData<fn(T)>,
}

impl<T, K: Clone> Clone for Loader<T, K> {
    fn clone(&self) -> Self {
        Self {
            tracker: self.tracker.clone(),
            sink: self.sink.clone(),
            failure_message: self.failure_message,
            _data: PhantomData,
        }
    }
}

impl<T, K: StateSink<T>> Loader<T, K> {
    /// `failure_message` is what readers see when a fetch fails.
    pub fn new(sink: K, failure_message: &'static str) -> Self {
        Self {
            tracker: RequestTracker::new(),
            sink,
            failure_message,
            _data: PhantomData,
        }
    }

    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }

    /// Starts a request: publishes `Loading` and returns its token.
    pub fn begin(&self) -> RequestToken {
        let token = self.tracker.issue();
        if !self.tracker.is_retired() {
            self.sink.publish(FetchState::Loading);
        }
        token
    }

    /// Applies an outcome if `token` is still current. Returns whether it was applied.
    pub fn settle<E: Display>(&self, token: RequestToken, outcome: Result<T, E>) -> bool {
        if !self.tracker.is_current(token) {
            tracing::debug!(?token, "discarding stale response");
            return false;
        }
        match outcome {
            Ok(data) => self.sink.publish(FetchState::Success(data)),
            Err(err) => {
                crate::log_err!(self.failure_message, err);
                self.sink
                    .publish(FetchState::Error(self.failure_message.to_string()));
            }
        }
        true
    }

    /// `begin`, run the fetch, then `settle`.
    pub async fn load<F, Fut, E>(&self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let token = self.begin();
        let outcome = fetch().await;
        self.settle(token, outcome)
    }

    /// Called when the owner unmounts.
    pub fn retire(&self) {
        self.tracker.retire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<FetchState<u32>>>>);

    impl StateSink<u32> for Recorder {
        fn publish(&self, state: FetchState<u32>) {
            self.0.lock().unwrap().push(state);
        }
    }

    #[test]
    fn test_only_latest_token_settles() {
        let recorder = Recorder::default();
        let loader = Loader::new(recorder.clone(), "Failed");

        let first = loader.begin();
        let second = loader.begin();
        assert!(loader.settle::<String>(second, Ok(2)));
        assert!(!loader.settle::<String>(first, Ok(1)));

        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![FetchState::Loading, FetchState::Loading, FetchState::Success(2)]
        );
    }

    #[test]
    fn test_retired_loader_publishes_nothing() {
        let recorder = Recorder::default();
        let loader = Loader::new(recorder.clone(), "Failed");

        let token = loader.begin();
        loader.retire();
        assert!(!loader.settle::<String>(token, Ok(1)));
        loader.begin();

        assert_eq!(*recorder.0.lock().unwrap(), vec![FetchState::Loading]);
    }
}
