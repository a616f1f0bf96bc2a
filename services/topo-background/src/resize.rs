//! Viewport resize notifications.
//!
//! The host publishes every resize on a [`ResizeSignal`]; listeners hold a
//! [`ResizeSubscription`]. Dropping the subscription unsubscribes.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use topo_common::Viewport;
use tracing::warn;

/// Buffered resize events per subscriber before older ones are dropped.
const RESIZE_CHANNEL_CAPACITY: usize = 64;

/// Publisher side of the resize event stream.
#[derive(Debug, Clone)]
pub struct ResizeSignal {
    tx: broadcast::Sender<Viewport>,
}

impl Default for ResizeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(RESIZE_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish a resize. Returns how many subscribers will see it.
    pub fn notify(&self, viewport: Viewport) -> usize {
        self.tx.send(viewport).unwrap_or(0)
    }

    pub fn subscribe(&self) -> ResizeSubscription {
        ResizeSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receiving side of a [`ResizeSignal`].
#[derive(Debug)]
pub struct ResizeSubscription {
    rx: broadcast::Receiver<Viewport>,
}

impl ResizeSubscription {
    /// Wait for the next resize.
    ///
    /// Returns `None` once every [`ResizeSignal`] handle is gone. A subscriber
    /// that fell behind skips the overwritten events; only the most recent
    /// size matters to a debounced listener.
    pub async fn next(&mut self) -> Option<Viewport> {
        loop {
            match self.rx.recv().await {
                Ok(viewport) => return Some(viewport),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped = skipped, "Resize subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
