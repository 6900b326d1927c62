//! Minimum-interval request pacing.

use std::time::{Duration, Instant};

/// Default spacing between attempts.
pub(crate) const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Spaces consecutive attempts by at least `min_interval`.
///
/// Applies to every attempt, including rotated retries, so a burst of
/// rejected keys does not hammer the upstream API.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    /// Minimum spacing between attempts.
    min_interval: Duration,
    /// When the previous attempt was released.
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Sleeps until the next attempt may start, then records it.
    pub(crate) async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval.saturating_sub(elapsed)).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}
