//! The load / success / error lifecycle shared by every data-driven section

pub mod filter;
mod loader;

pub use loader::{Loader, RequestToken, RequestTracker, StateSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Success,
    Error,
}

/// State of one fetch. Data exists only on success, a message only on error.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    /// User-facing message; technical details are logged, never stored here.
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Error(_) => FetchStatus::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Whether a successful result has nothing to show.
pub trait IsEmpty {
    fn is_empty_result(&self) -> bool;
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_result(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Option<T> {
    fn is_empty_result(&self) -> bool {
        self.is_none()
    }
}

/// Two lists loaded together are empty only when both are.
impl<A: IsEmpty, B: IsEmpty> IsEmpty for (A, B) {
    fn is_empty_result(&self) -> bool {
        self.0.is_empty_result() && self.1.is_empty_result()
    }
}

/// What a section renders for its current state.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a, T> {
    Skeletons(usize),
    Failed(&'a str),
    Empty,
    Ready(&'a T),
}

impl<T: IsEmpty> FetchState<T> {
    pub fn presentation(&self, skeletons: usize) -> Presentation<'_, T> {
        match self {
            FetchState::Loading => Presentation::Skeletons(skeletons),
            FetchState::Error(message) => Presentation::Failed(message),
            FetchState::Success(data) if data.is_empty_result() => Presentation::Empty,
            FetchState::Success(data) => Presentation::Ready(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_plan() {
        let loading: FetchState<Vec<u8>> = FetchState::default();
        assert_eq!(loading.presentation(3), Presentation::Skeletons(3));

        let failed: FetchState<Vec<u8>> = FetchState::Error("Failed to load".into());
        assert_eq!(failed.presentation(3), Presentation::Failed("Failed to load"));
        assert_eq!(failed.data(), None);

        let empty: FetchState<Vec<u8>> = FetchState::Success(vec![]);
        assert_eq!(empty.presentation(3), Presentation::Empty);
        assert_eq!(empty.status(), FetchStatus::Success);
        assert_eq!(empty.error(), None);

        let pair: FetchState<(Vec<u8>, Vec<u8>)> = FetchState::Success((vec![], vec![2]));
        assert!(matches!(pair.presentation(3), Presentation::Ready(_)));

        let ready = FetchState::Success(vec![1u8]);
        assert_eq!(ready.presentation(3), Presentation::Ready(&vec![1u8]));
    }
}
