//! Progress observer that reports through `tracing`.

use std::time::Instant;
use tracing::{debug, info};
use verdict_env::ProgressObserver;

/// Logs generation progress in 10% steps.
#[derive(Debug, Default)]
pub struct TracingProgress {
    total: usize,
    step: usize,
    reported: usize,
    started: Option<Instant>,
}

impl TracingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of progress lines emitted since the last `begin`.
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl ProgressObserver for TracingProgress {
    fn begin(&mut self, node: &str, total: usize) {
        self.total = total;
        self.step = (total / 10).max(1);
        self.reported = 0;
        self.started = Some(Instant::now());
        info!(node, total, "Generating predictions");
    }

    fn advance(&mut self, node: &str, index: usize) {
        let done = index + 1;
        if done % self.step == 0 || done == self.total {
            self.reported += 1;
            debug!(
                node,
                done,
                total = self.total,
                "  {:.0}%",
                100.0 * done as f64 / self.total as f64
            );
        }
    }

    fn finish(&mut self, node: &str) {
        let elapsed_ms = self
            .started
            .take()
            .map(|start| start.elapsed().as_millis())
            .unwrap_or_default();
        info!(node, elapsed_ms, "Generation complete");
    }
}
