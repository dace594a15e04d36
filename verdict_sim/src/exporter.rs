//! JSON exporter for simulation runs.
//!
//! Writes every scenario result of a session, node sequences included, so
//! runs can be inspected or diffed outside the simulator.

use crate::error::SimError;
use crate::runner::ScenarioResult;

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Complete simulation export.
#[derive(Debug, Clone, Serialize)]
pub struct SimExport {
    /// Base seed of the session
    pub seed: u64,

    /// Predictions per node requested on the command line
    pub length: usize,

    /// Results in execution order
    pub runs: Vec<ScenarioResult>,
}

impl SimExport {
    /// Creates a new export container.
    pub fn new(seed: u64, length: usize) -> Self {
        Self {
            seed,
            length,
            runs: Vec::new(),
        }
    }

    /// Adds a run.
    pub fn add_run(&mut self, result: ScenarioResult) {
        self.runs.push(result);
    }

    /// Number of failed runs.
    pub fn failed(&self) -> usize {
        self.runs.iter().filter(|r| !r.passed).count()
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
