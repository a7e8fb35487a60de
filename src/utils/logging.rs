use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Scoped timer that traces how long a labelled section took.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Warns when the kernel work of one display frame overran its budget.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget: Duration) {
    if duration > budget {
        warn!(
            "Frame exceeded budget: {:.2} ms > {:.2} ms",
            duration.as_secs_f64() * 1000.0,
            budget.as_secs_f64() * 1000.0
        );
    }
}
