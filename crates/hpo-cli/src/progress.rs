//! Terminal progress bar for concept construction.

use hpo_transform::ProgressObserver;
use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} concepts ({per_sec})";

/// Drives an `indicatif` bar from transformation progress.
pub struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    /// A bar drawn to stderr, or a hidden one when `visible` is false.
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressObserver for BarObserver {
    fn on_start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn on_concept(&mut self, _index: usize, _code: &str) {
        self.bar.inc(1);
    }

    fn on_finish(&mut self, _count: usize) {
        self.bar.finish_and_clear();
    }
}
