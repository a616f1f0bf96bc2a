//! Event loop connecting host events to a [`BackgroundController`].

use std::time::Duration;

use renderer::Surface;
use tokio::sync::{broadcast, mpsc};
use topo_common::Viewport;
use tracing::{debug, info};

use crate::controller::BackgroundController;
use crate::debounce::Debouncer;
use crate::input::ThemeCommand;
use crate::metrics;
use crate::resize::ResizeSubscription;

/// Runs a controller until shutdown, regenerating once per resize burst.
pub struct BackgroundService<S: Surface> {
    controller: BackgroundController<S>,
    debouncer: Debouncer<Viewport>,
}

impl<S: Surface> BackgroundService<S> {
    pub fn new(controller: BackgroundController<S>, debounce: Duration) -> Self {
        Self {
            controller,
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn controller(&self) -> &BackgroundController<S> {
        &self.controller
    }

    /// Process events until `shutdown` fires or the resize signal goes away.
    ///
    /// Teardown cancels any pending regeneration and drops the resize
    /// subscription. Returns the controller so the caller can inspect or
    /// unmount it.
    pub async fn run(
        mut self,
        mut resizes: ResizeSubscription,
        mut themes: mpsc::Receiver<ThemeCommand>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> BackgroundController<S> {
        info!(
            seed = self.controller.seed(),
            debounce_ms = self.debouncer.delay().as_millis() as u64,
            "Background service started"
        );
        let mut themes_open = true;

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("Shutting down background service");
                    break;
                }
                event = resizes.next() => match event {
                    Some(viewport) => {
                        metrics::record_resize();
                        debug!(viewport = %viewport, "Resize received");
                        self.debouncer.schedule(viewport);
                    }
                    None => {
                        info!("Resize signal closed");
                        break;
                    }
                },
                command = themes.recv(), if themes_open => match command {
                    Some(ThemeCommand::Set(theme)) => self.controller.set_theme(theme),
                    Some(ThemeCommand::Toggle) => self.controller.toggle_theme(),
                    None => themes_open = false,
                },
                viewport = self.debouncer.fired() => {
                    self.controller.regenerate(viewport);
                }
            }
        }

        if let Some(viewport) = self.debouncer.cancel() {
            debug!(viewport = %viewport, "Cancelled pending regeneration");
        }
        drop(resizes);

        self.controller
    }
}
