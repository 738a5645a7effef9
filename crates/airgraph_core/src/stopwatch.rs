use std::time::{Duration, Instant};

use tracing::debug;

/// Measures one named step of an analysis.
pub struct Stopwatch<'a> {
    label: &'a str,
    started: Instant,
}

impl<'a> Stopwatch<'a> {
    pub fn new(label: &'a str) -> Self {
        Stopwatch {
            label,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Logs the elapsed time at debug level and returns it.
    pub fn report(&self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            step = self.label,
            elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
            "Step finished"
        );
        elapsed
    }
}
