//! Scenario runner - builds networks, generates predictions, checks outcomes.

use crate::config::{NetworkDefinition, SimConfig, VariantKind};
use crate::context::SeededEntropy;
use crate::error::SimError;
use crate::progress::TracingProgress;
use crate::scenarios::ScenarioId;

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use verdict_core::agreement::{positive_rate, undecided_rate};
use verdict_core::{
    agreement, Agreement, Binary, Decided, Network, NetworkError, NodeSpec, Ternary, Variant,
};

/// Per-node summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    pub name: String,
    pub seed: u64,

    /// Share of positive decisions among decided positions
    pub positive_rate: f64,

    /// Share of undecided positions (always 0 for binary nodes)
    pub undecided_rate: f64,

    /// Agreement with the scenario's reference node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versus_reference: Option<Agreement>,

    /// The generated predictions (`null` = undecided)
    pub sequence: Vec<Option<u8>>,
}

/// Metrics collected during scenario execution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioMetrics {
    /// Nodes registered
    pub nodes: usize,

    /// Cache lookups answered without generating
    pub cache_hits: u64,

    /// Cache lookups that triggered generation
    pub cache_misses: u64,
}

/// Results from running a scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Scenario (or network definition) that was run
    pub scenario: String,

    /// Master seed used
    pub seed: u64,

    /// Predictions per node
    pub length: usize,

    /// Whether the scenario passed all assertions
    pub passed: bool,

    /// Failure message if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    pub nodes: Vec<NodeReport>,

    pub metrics: ScenarioMetrics,
}

impl ScenarioResult {
    /// Looks up the report of one node.
    pub fn node(&self, name: &str) -> Option<&NodeReport> {
        self.nodes.iter().find(|report| report.name == name)
    }

    fn failed(scenario: &str, seed: u64, length: usize, reason: String) -> Self {
        Self {
            scenario: scenario.to_string(),
            seed,
            length,
            passed: false,
            failure_reason: Some(reason),
            nodes: Vec::new(),
            metrics: ScenarioMetrics::default(),
        }
    }
}

/// How a runner fetches sequences for one variant.
trait Fetch: Variant {
    fn fetch(
        net: &mut Network<Self>,
        name: &str,
        len: usize,
        progress: bool,
    ) -> Result<Arc<[Self::Outcome]>, NetworkError>;
}

impl Fetch for Binary {
    fn fetch(
        net: &mut Network<Self>,
        name: &str,
        len: usize,
        _progress: bool,
    ) -> Result<Arc<[Self::Outcome]>, NetworkError> {
        net.predict(name, len)
    }
}

impl Fetch for Ternary {
    fn fetch(
        net: &mut Network<Self>,
        name: &str,
        len: usize,
        progress: bool,
    ) -> Result<Arc<[Self::Outcome]>, NetworkError> {
        if progress {
            net.predict_with_progress(name, len, &mut TracingProgress::new())
        } else {
            net.predict(name, len)
        }
    }
}

/// Runs comparative scenarios.
pub struct ScenarioRunner {
    /// Master seed
    seed: u64,

    /// Predictions per node
    length: usize,

    /// Report progress for ternary generation
    progress: bool,
}

impl ScenarioRunner {
    /// Creates a new runner.
    pub fn new(seed: u64) -> Self {
        let defaults = SimConfig::default();
        Self {
            seed,
            length: defaults.length,
            progress: defaults.progress,
        }
    }

    /// Creates a runner from a full configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.seed)
            .with_length(config.length)
            .with_progress(config.progress)
    }

    /// Sets the number of predictions per node.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.max(1);
        self
    }

    /// Enables progress reporting.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Runs a scenario and returns results.
    pub fn run(&self, scenario: ScenarioId) -> ScenarioResult {
        info!("Running scenario: {} (seed={})", scenario.name(), self.seed);
        debug!("  {}", scenario.description());

        let entropy = SeededEntropy::for_stream(self.seed, scenario.stream());
        let outcome = match scenario {
            ScenarioId::Panel => self.run_panel(entropy),
            ScenarioId::Contrarian => self.run_contrarian(entropy),
            ScenarioId::IndecisiveJury => self.run_indecisive_jury(entropy),
            ScenarioId::Chain => self.run_chain(entropy),
            ScenarioId::Calibration => self.run_calibration(entropy),
            ScenarioId::CycleGuard => self.run_cycle_guard(entropy),
        };

        match outcome {
            Ok(result) => result,
            Err(e) => {
                warn!("Scenario {} aborted: {}", scenario.name(), e);
                ScenarioResult::failed(scenario.name(), self.seed, self.length, e.to_string())
            }
        }
    }

    /// Runs a network loaded from a definition file.
    ///
    /// Configuration errors are returned rather than reported as a failed run.
    pub fn run_definition(&self, definition: &NetworkDefinition) -> Result<ScenarioResult, SimError> {
        info!(
            "Running network: {} ({} nodes, seed={})",
            definition.label(),
            definition.nodes.len(),
            self.seed
        );

        let entropy = SeededEntropy::new(self.seed);
        let names: Vec<&str> = definition.nodes.iter().map(|n| n.name.as_str()).collect();
        let reference = definition.reference.as_deref();
        let length = definition.length;

        let (nodes, metrics) = match definition.variant {
            VariantKind::Binary => {
                let mut net = self.build::<Binary>(entropy, definition.nodes.clone())?;
                self.collect(&mut net, &names, reference, length)?
            }
            VariantKind::Ternary => {
                let mut net = self.build::<Ternary>(entropy, definition.nodes.clone())?;
                self.collect(&mut net, &names, reference, length)?
            }
        };

        Ok(ScenarioResult {
            scenario: definition.label().to_string(),
            seed: self.seed,
            length,
            passed: true,
            failure_reason: None,
            nodes,
            metrics,
        })
    }

    fn build<V: Variant>(
        &self,
        entropy: SeededEntropy,
        specs: Vec<NodeSpec>,
    ) -> Result<Network<V>, NetworkError> {
        let mut net = Network::<V>::with_entropy(entropy);
        for spec in specs {
            net.create(spec)?;
        }
        Ok(net)
    }

    fn collect<V: Fetch>(
        &self,
        net: &mut Network<V>,
        names: &[&str],
        reference: Option<&str>,
        length: usize,
    ) -> Result<(Vec<NodeReport>, ScenarioMetrics), NetworkError> {
        let reference_sequence = match reference {
            Some(name) => Some(V::fetch(net, name, length, self.progress)?),
            None => None,
        };

        let mut reports = Vec::with_capacity(names.len());
        for &name in names {
            let sequence = V::fetch(net, name, length, self.progress)?;
            let versus_reference = match (reference, &reference_sequence) {
                (Some(r), Some(reference_sequence)) if r != name => {
                    Some(agreement(reference_sequence, &sequence))
                }
                _ => None,
            };

            reports.push(NodeReport {
                name: name.to_string(),
                seed: net.node(name)?.seed(),
                positive_rate: positive_rate(&sequence),
                undecided_rate: undecided_rate(&sequence),
                versus_reference,
                sequence: sequence.iter().map(|o| o.decided()).collect(),
            });
        }

        let stats = net.cache_stats();
        let metrics = ScenarioMetrics {
            nodes: net.registry().len(),
            cache_hits: stats.hits,
            cache_misses: stats.misses,
        };
        Ok((reports, metrics))
    }

    fn finish(
        &self,
        scenario: ScenarioId,
        nodes: Vec<NodeReport>,
        metrics: ScenarioMetrics,
        failures: Vec<String>,
    ) -> ScenarioResult {
        let passed = failures.is_empty();
        if passed {
            info!("  {} checks passed", scenario.name());
        }

        ScenarioResult {
            scenario: scenario.name().to_string(),
            seed: self.seed,
            length: self.length,
            passed,
            failure_reason: if passed { None } else { Some(failures.join("; ")) },
            nodes,
            metrics,
        }
    }

    /// Two standard errors of a proportion estimated from `n` samples.
    fn tolerance(&self, p: f64, n: usize) -> f64 {
        2.0 * (p * (1.0 - p) / n.max(1) as f64).sqrt()
    }

    // ========================================================================
    // VRD-001: PANEL
    // ========================================================================

    fn run_panel(&self, entropy: SeededEntropy) -> Result<ScenarioResult, SimError> {
        let mut net = self.build::<Binary>(
            entropy,
            vec![
                NodeSpec::new("truth"),
                NodeSpec::new("ai").correlate("truth", 2.0),
                NodeSpec::new("human").correlate("truth", 1.0).correlate("ai", 1.0),
            ],
        )?;
        let (nodes, metrics) =
            self.collect(&mut net, &["truth", "ai", "human"], Some("truth"), self.length)?;

        let mut failures = Vec::new();
        // ai matches truth 3/4 of the time; human sees psum +-2 when ai agrees, else 0
        for (name, expected) in [("ai", 0.75), ("human", 0.6875)] {
            let rate = match_rate(&nodes, name);
            let tolerance = 2.0 * self.tolerance(expected, self.length);
            debug!("  {} vs truth: {:.3} (expected {:.3})", name, rate, expected);
            if (rate - expected).abs() > tolerance.max(0.05) {
                failures.push(format!(
                    "{} agrees with truth at {:.3}, expected {:.3}",
                    name, rate, expected
                ));
            }
        }

        Ok(self.finish(ScenarioId::Panel, nodes, metrics, failures))
    }

    // ========================================================================
    // VRD-002: CONTRARIAN
    // ========================================================================

    fn run_contrarian(&self, entropy: SeededEntropy) -> Result<ScenarioResult, SimError> {
        let mut net = self.build::<Binary>(
            entropy,
            vec![
                NodeSpec::new("truth"),
                NodeSpec::new("contrarian").correlate("truth", -2.0),
            ],
        )?;
        let (nodes, metrics) =
            self.collect(&mut net, &["truth", "contrarian"], Some("truth"), self.length)?;

        let mut failures = Vec::new();
        let rate = match_rate(&nodes, "contrarian");
        if rate >= 0.5 {
            failures.push(format!("contrarian agrees with truth at {:.3}", rate));
        }

        Ok(self.finish(ScenarioId::Contrarian, nodes, metrics, failures))
    }

    // ========================================================================
    // VRD-003: INDECISIVE JURY
    // ========================================================================

    fn run_indecisive_jury(&self, entropy: SeededEntropy) -> Result<ScenarioResult, SimError> {
        let jurors = [("juror_low", 0.1), ("juror_mid", 0.25), ("juror_high", 0.4)];

        let mut specs = vec![NodeSpec::new("truth")];
        specs.extend(
            jurors
                .iter()
                .map(|(name, p)| NodeSpec::new(*name).correlate("truth", 1.0).indecision(*p)),
        );
        let mut net = self.build::<Ternary>(entropy, specs)?;

        let mut names = vec!["truth"];
        names.extend(jurors.iter().map(|(name, _)| *name));
        let (nodes, metrics) = self.collect(&mut net, &names, Some("truth"), self.length)?;

        let mut failures = Vec::new();
        let mut previous = 0.0;
        for (name, target) in jurors {
            let report = nodes.iter().find(|r| r.name == name);
            let undecided = report.map(|r| r.undecided_rate).unwrap_or_default();
            debug!("  {} undecided: {:.3} (target {:.2})", name, undecided, target);

            // psum is never 0 here, so indecision stays below the target
            if undecided > target + self.tolerance(target, self.length) {
                failures.push(format!("{} undecided {:.3} above {:.2}", name, undecided, target));
            }
            if undecided < previous {
                failures.push(format!("{} less undecided than the juror before it", name));
            }
            if match_rate(&nodes, name) <= 0.5 {
                failures.push(format!("{} does not lean toward truth", name));
            }
            previous = undecided;
        }

        Ok(self.finish(ScenarioId::IndecisiveJury, nodes, metrics, failures))
    }

    // ========================================================================
    // VRD-004: CHAIN
    // ========================================================================

    fn run_chain(&self, entropy: SeededEntropy) -> Result<ScenarioResult, SimError> {
        let links: Vec<String> = (0..6).map(|i| format!("link_{}", i)).collect();

        let mut specs = vec![NodeSpec::new(links[0].as_str())];
        specs.extend(
            links
                .windows(2)
                .map(|pair| NodeSpec::new(pair[1].as_str()).correlate(pair[0].as_str(), 3.0)),
        );
        let mut net = self.build::<Binary>(entropy, specs)?;

        let names: Vec<&str> = links.iter().map(String::as_str).collect();
        let (nodes, metrics) = self.collect(&mut net, &names, Some(names[0]), self.length)?;

        let mut failures = Vec::new();
        let first = match_rate(&nodes, names[1]);
        let last = match_rate(&nodes, names[names.len() - 1]);
        debug!("  agreement with head: first={:.3} last={:.3}", first, last);

        // Each hop keeps 4/5 of the signal: 0.8 after one, ~0.54 after five
        if first <= 0.7 {
            failures.push(format!("first link agrees at only {:.3}", first));
        }
        if last >= first {
            failures.push(format!("influence did not fade ({:.3} >= {:.3})", last, first));
        }

        Ok(self.finish(ScenarioId::Chain, nodes, metrics, failures))
    }

    // ========================================================================
    // VRD-005: CALIBRATION
    // ========================================================================

    fn run_calibration(&self, entropy: SeededEntropy) -> Result<ScenarioResult, SimError> {
        let target = 0.3;
        let mut net = self.build::<Ternary>(entropy, vec![NodeSpec::new("judge").indecision(target)])?;

        let distribution = net.probability_at("judge", 0, self.length)?;
        let (nodes, metrics) = self.collect(&mut net, &["judge"], None, self.length)?;

        let mut failures = Vec::new();
        if (distribution.p_undecided - target).abs() > 1e-9 {
            failures.push(format!(
                "model indecision {:.6} differs from {}",
                distribution.p_undecided, target
            ));
        }

        let observed = nodes[0].undecided_rate;
        let tolerance = 2.0 * self.tolerance(target, self.length);
        if (observed - target).abs() > tolerance {
            failures.push(format!(
                "observed indecision {:.3} outside {:.2} ± {:.3}",
                observed, target, tolerance
            ));
        }

        Ok(self.finish(ScenarioId::Calibration, nodes, metrics, failures))
    }

    // ========================================================================
    // VRD-006: CYCLE GUARD
    // ========================================================================

    fn run_cycle_guard(&self, entropy: SeededEntropy) -> Result<ScenarioResult, SimError> {
        let mut net = self.build::<Binary>(
            entropy,
            vec![
                NodeSpec::new("echo").correlate("chamber", 1.0),
                NodeSpec::new("chamber").correlate("echo", 1.0),
            ],
        )?;

        let mut failures = Vec::new();
        match net.predict("echo", self.length) {
            Err(NetworkError::CorrelationCycle(path)) => {
                debug!("  cycle refused: {}", path.join(" -> "));
            }
            Err(other) => failures.push(format!("unexpected error: {}", other)),
            Ok(_) => failures.push("cyclic network produced predictions".to_string()),
        }

        let metrics = ScenarioMetrics {
            nodes: net.registry().len(),
            ..Default::default()
        };
        Ok(self.finish(ScenarioId::CycleGuard, Vec::new(), metrics, failures))
    }
}

fn match_rate(nodes: &[NodeReport], name: &str) -> f64 {
    nodes
        .iter()
        .find(|report| report.name == name)
        .and_then(|report| report.versus_reference)
        .map(|agreement| agreement.match_rate)
        .unwrap_or_default()
}
