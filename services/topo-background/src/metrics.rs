//! Background metrics, recorded through the `metrics` facade.
//!
//! No recorder is installed by this crate; embedders wire up whichever
//! exporter they run.

use std::time::Duration;

use metrics::{counter, gauge, histogram};

pub fn record_pass(duration: Duration, paths_drawn: usize) {
    counter!("background_passes_total").increment(1);
    histogram!("background_pass_duration_ms").record(duration.as_secs_f64() * 1000.0);
    gauge!("background_paths_drawn").set(paths_drawn as f64);
}

pub fn record_resize() {
    counter!("background_resize_events_total").increment(1);
}

pub fn record_present_failure() {
    counter!("background_present_errors_total").increment(1);
}
