//! Phase progress display for generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Phases: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across the fixed phase plan
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the phase count
    pub fn new(phase_count: usize) -> Self {
        let bar = ProgressBar::new(phase_count as u64);
        bar.set_style(PHASE_STYLE.clone());

        Self { bar }
    }

    /// Announce the phase being processed
    pub fn start_phase(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Record a completed phase and its tile count
    pub fn complete_phase(&self, name: &str, tiles: usize) {
        self.bar.set_message(format!("{name}: {tiles} tiles"));
        self.bar.inc(1);
    }

    /// Close out the display
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
