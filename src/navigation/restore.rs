use std::time::Duration;

use super::ScrollHandoff;

/// Scrolling operations on the rendered document.
pub trait Viewport {
    /// Scrolls the element smoothly into the centre of the view. Returns
    /// `false` when no element has this id yet.
    fn scroll_into_view(&self, element_id: &str) -> bool;

    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestorePolicy {
    /// Wait before the first attempt, giving the list time to render.
    pub initial_delay: Duration,
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for RestorePolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(300),
            interval: Duration::from_millis(100),
            max_attempts: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreStep {
    /// The target was scrolled into view.
    Done,
    /// Not rendered yet; try again after the delay.
    RetryAfter(Duration),
    /// Attempts exhausted; the page was left at the top.
    GaveUp,
}

impl RestoreStep {
    pub fn is_finished(&self) -> bool {
        !matches!(self, RestoreStep::RetryAfter(_))
    }
}

/// Polls for the handoff target until it appears or the policy runs out.
///
/// `generation` names the transition that started the restore; the
/// controller treats it as stale once another transition happened.
#[derive(Debug, Clone)]
pub struct ScrollRestore {
    target: ScrollHandoff,
    policy: RestorePolicy,
    attempts: u32,
    generation: u64,
}

impl ScrollRestore {
    pub fn new(target: ScrollHandoff, policy: RestorePolicy) -> Self {
        Self {
            target,
            policy,
            attempts: 0,
            generation: 0,
        }
    }

    pub(super) fn started_at(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn first_delay(&self) -> Duration {
        self.policy.initial_delay
    }

    pub fn target(&self) -> &ScrollHandoff {
        &self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempt(&mut self, viewport: &impl Viewport) -> RestoreStep {
        self.attempts += 1;
        if viewport.scroll_into_view(&self.target.target_element_id) {
            tracing::debug!(
                target = %self.target.target_element_id,
                attempts = self.attempts,
                "scroll restored"
            );
            return RestoreStep::Done;
        }
        if self.attempts >= self.policy.max_attempts {
            tracing::warn!(
                target = %self.target.target_element_id,
                attempts = self.attempts,
                "scroll target never appeared; staying at top"
            );
            viewport.scroll_to_top();
            return RestoreStep::GaveUp;
        }
        RestoreStep::RetryAfter(self.policy.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct LateViewport {
        appears_on: u32,
        calls: Cell<u32>,
        scrolled_top: Cell<bool>,
    }

    impl Viewport for LateViewport {
        fn scroll_into_view(&self, _element_id: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.calls.get() >= self.appears_on
        }

        fn scroll_to_top(&self) {
            self.scrolled_top.set(true);
        }
    }

    fn viewport(appears_on: u32) -> LateViewport {
        LateViewport {
            appears_on,
            calls: Cell::new(0),
            scrolled_top: Cell::new(false),
        }
    }

    #[test]
    fn test_retries_until_element_appears() {
        let view = viewport(3);
        let mut restore =
            ScrollRestore::new(ScrollHandoff::new("blog-post-2"), RestorePolicy::default());
        assert_eq!(restore.first_delay(), Duration::from_millis(300));

        let retry = RestoreStep::RetryAfter(Duration::from_millis(100));
        assert_eq!(restore.attempt(&view), retry);
        assert_eq!(restore.attempt(&view), retry);
        assert_eq!(restore.attempt(&view), RestoreStep::Done);
        assert!(!view.scrolled_top.get());
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let view = viewport(u32::MAX);
        let policy = RestorePolicy {
            max_attempts: 4,
            ..RestorePolicy::default()
        };
        let mut restore = ScrollRestore::new(ScrollHandoff::new("blog-post-9"), policy);

        let steps: Vec<RestoreStep> = (0..4).map(|_| restore.attempt(&view)).collect();
        assert!(steps[..3].iter().all(|s| !s.is_finished()));
        assert_eq!(steps[3], RestoreStep::GaveUp);
        assert!(view.scrolled_top.get());
    }
}
