//! Trailing-edge debounce on the tokio clock.
//!
//! Each `trigger()` bumps a generation counter and returns a future that
//! sleeps for the quiet period, then checks whether it is still the latest
//! trigger. Only the last trigger of a burst resolves to `true`.
//!
//! ```ignore
//! let quiet = debouncer.trigger();
//! spawn(async move {
//!     if quiet.await {
//!         // no events for a full quiet period
//!     }
//! });
//! ```
//!
//! The futures hold no timer registration of their own; dropping one (for
//! example when the owning component's task is cancelled) is all the
//! cleanup there is.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register an input event.
    ///
    /// The returned future resolves after the quiet period to `true` if no
    /// later trigger (or cancel) happened in the meantime.
    pub fn trigger(&self) -> impl Future<Output = bool> + 'static {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let quiet = self.quiet;
        async move {
            tokio::time::sleep(quiet).await;
            generation.load(Ordering::SeqCst) == ticket
        }
    }

    /// Invalidate every outstanding trigger.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn single_trigger_fires_after_quiet_period() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let start = tokio::time::Instant::now();
        assert!(debouncer.trigger().await);
        assert!(start.elapsed() >= Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn later_trigger_supersedes_earlier() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let first = tokio::spawn(debouncer.trigger());
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn(debouncer.trigger());

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_invalidates_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let pending = tokio::spawn(debouncer.trigger());
        tokio::task::yield_now().await;
        debouncer.cancel();
        assert!(!pending.await.unwrap());
    }
}
