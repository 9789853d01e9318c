//! Explicit debounce combinator for the free-text search box.
//!
//! Framework-independent: the caller supplies the clock. A new submission
//! supersedes the pending one; `poll` releases the latest value once input
//! has been quiet for the configured delay.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a new input, cancelling any not-yet-released one.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((now, value));
    }

    /// Releases the pending value once the delay has elapsed since the last
    /// submission.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((at, _)) if now.duration_since(*at) >= self.delay => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
