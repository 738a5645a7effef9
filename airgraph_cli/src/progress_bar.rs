use std::time::Duration;

use airgraph_core::progress::ProgressListener;
use indicatif::{ProgressBar, ProgressStyle};

const STEPS: u64 = 1_000;

/// Terminal progress bar for long betweenness runs.
pub struct ProgressBarListener {
    bar: ProgressBar,
}

impl ProgressBarListener {
    pub fn new(message: &'static str) -> Self {
        let bar = ProgressBar::new(STEPS);

        if let Ok(style) =
            ProgressStyle::default_bar().template("{msg} [{bar:40}] {percent}% ({elapsed}/{eta})")
        {
            bar.set_style(style);
        }
        bar.set_message(message);

        ProgressBarListener { bar }
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressListener for ProgressBarListener {
    fn start(&mut self) {
        self.bar.reset();
        self.bar.enable_steady_tick(Duration::from_secs(1));
    }

    fn progress(&mut self, fraction: f64) {
        self.bar
            .set_position((fraction.clamp(0.0, 1.0) * STEPS as f64).round() as u64);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}
