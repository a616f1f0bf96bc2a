//! Cancellable deferred value.
//!
//! Scheduling replaces any pending value and restarts the quiet period, so a
//! burst of events collapses into the last one.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

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

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Defer `value` until `delay` has passed without another call.
    pub fn schedule(&mut self, value: T) {
        self.pending = Some((Instant::now() + self.delay, value));
    }

    /// Drop the pending value, if any, and return it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Resolve with the pending value once its deadline passes.
    ///
    /// Never resolves while nothing is scheduled. Cancel-safe: dropping the
    /// future before it resolves leaves the pending value in place, which is
    /// what `tokio::select!` does to losing branches.
    pub async fn fired(&mut self) -> T {
        if let Some(deadline) = self.deadline() {
            sleep_until(deadline).await;
            if let Some((_, value)) = self.pending.take() {
                return value;
            }
        }
        std::future::pending().await
    }
}
