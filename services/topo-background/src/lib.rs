//! Topographic contour background service.
//!
//! Wraps the pure [`renderer`] pipeline with the state that lives across
//! passes:
//! - A per-lifetime seed and the current theme ([`controller`])
//! - Debounced regeneration on viewport resize ([`resize`], [`debounce`])
//! - Event loop with explicit teardown ([`service`])
//! - File output of each pass ([`output`])

pub mod config;
pub mod controller;
pub mod debounce;
pub mod input;
pub mod metrics;
pub mod output;
pub mod resize;
pub mod service;

pub use config::BackgroundConfig;
pub use controller::{BackgroundController, PassReport};
pub use debounce::Debouncer;
pub use input::{forward_host_events, parse_line, HostEvent, ThemeCommand};
pub use output::FileSurface;
pub use resize::{ResizeSignal, ResizeSubscription};
pub use service::BackgroundService;
