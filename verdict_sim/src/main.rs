//! Verdict simulator CLI
//!
//! Run the built-in decision-maker scenarios or a network loaded from JSON.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;
use verdict_sim::scenarios::ScenarioId;
use verdict_sim::{NetworkDefinition, ScenarioResult, ScenarioRunner, SimConfig, SimExport};

/// Verdict decision-maker simulator CLI
#[derive(Parser, Debug)]
#[command(name = "verdict-sim")]
#[command(about = "Simulate correlated binary and ternary decision-makers", long_about = None)]
struct Args {
    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Predictions generated per node [default: 1000, or the network file's length]
    #[arg(short, long)]
    length: Option<usize>,

    /// Scenario to run (panel, contrarian, indecisive_jury, chain, calibration, cycle_guard, all)
    #[arg(short = 'S', long, default_value = "all")]
    scenario: String,

    /// Number of consecutive seeds to run (for CI mode)
    #[arg(long, default_value = "1")]
    seeds: usize,

    /// Run a network defined in a JSON file instead of the scenarios
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Log generation progress of ternary nodes
    #[arg(long)]
    progress: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for CI parsing
    #[arg(long)]
    json: bool,

    /// Export all results, sequences included, to a JSON file
    #[arg(long)]
    export: Option<PathBuf>,
}

/// What one invocation runs.
#[derive(Debug)]
enum Workload {
    Definition(NetworkDefinition),
    Scenarios(Vec<ScenarioId>),
}

impl Workload {
    /// Predictions per node actually generated.
    fn length(&self, cli_length: usize) -> usize {
        match self {
            Workload::Definition(definition) => definition.length,
            Workload::Scenarios(_) => cli_length,
        }
    }
}

impl Args {
    fn length(&self) -> usize {
        self.length.unwrap_or(SimConfig::default().length)
    }

    /// Loads the network file, or resolves `--scenario` when there is none.
    ///
    /// An explicit `--length` overrides the length stored in the file.
    fn workload(&self) -> Result<Workload, String> {
        let Some(path) = &self.network else {
            return ScenarioId::select(&self.scenario).map(Workload::Scenarios);
        };

        if self.scenario != "all" {
            warn!("--scenario {} is ignored when --network is given", self.scenario);
        }

        let definition = NetworkDefinition::load(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
        Ok(Workload::Definition(match self.length {
            Some(length) => definition.with_length(length),
            None => definition,
        }))
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn base_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(42)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.json {
        info!("Verdict simulator v{}", env!("CARGO_PKG_VERSION"));
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    let workload = match args.workload() {
        Ok(workload) => workload,
        Err(e) => {
            eprintln!("Error: {}", e);
            if args.network.is_none() {
                eprintln!(
                    "Available scenarios: panel, contrarian, indecisive_jury, chain, calibration, cycle_guard, all"
                );
            }
            return ExitCode::FAILURE;
        }
    };

    let base_seed = base_seed(args.seed);
    let mut export = SimExport::new(base_seed, workload.length(args.length()));

    for seed_offset in 0..args.seeds {
        let config = SimConfig {
            seed: base_seed.wrapping_add(seed_offset as u64),
            length: args.length(),
            progress: args.progress,
        };
        let runner = ScenarioRunner::from_config(&config);

        match &workload {
            Workload::Definition(definition) => match runner.run_definition(definition) {
                Ok(result) => {
                    report(&result, args.json);
                    export.add_run(result);
                }
                Err(e) => {
                    error!("{} (seed={}) could not run: {}", definition.label(), config.seed, e);
                    return ExitCode::FAILURE;
                }
            },
            Workload::Scenarios(scenarios) => {
                for scenario in scenarios {
                    let result = runner.run(*scenario);
                    report(&result, args.json);
                    export.add_run(result);
                }
            }
        }
    }

    // Summary
    let total = export.runs.len();
    let failed = export.failed();

    if args.json {
        let summary = serde_json::json!({
            "total": total,
            "passed": total - failed,
            "failed": failed,
            "results": export.runs.iter().map(|r| {
                serde_json::json!({
                    "scenario": r.scenario,
                    "seed": r.seed,
                    "passed": r.passed,
                    "length": r.length,
                    "metrics": r.metrics,
                    "failure_reason": r.failure_reason,
                    "nodes": r.nodes.iter().map(|n| {
                        serde_json::json!({
                            "name": n.name,
                            "seed": n.seed,
                            "positive_rate": n.positive_rate,
                            "undecided_rate": n.undecided_rate,
                            "match_rate": n.versus_reference.map(|a| a.match_rate),
                        })
                    }).collect::<Vec<_>>(),
                })
            }).collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("Failed to render summary: {}", e),
        }
    } else {
        info!("");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        if failed == 0 {
            info!("✅ All {} runs passed!", total);
        } else {
            error!("❌ {}/{} runs failed!", failed, total);
            for result in export.runs.iter().filter(|r| !r.passed) {
                error!(
                    "  - {} seed={}: {}",
                    result.scenario,
                    result.seed,
                    result.failure_reason.as_deref().unwrap_or("unknown")
                );
            }
        }
    }

    if let Some(path) = &args.export {
        match export.write_to_file(path) {
            Ok(()) => info!("Exported {} runs to {}", total, path.display()),
            Err(e) => {
                error!("Failed to write export: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    // Exit with proper code for CI
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report(result: &ScenarioResult, json: bool) {
    if json {
        return;
    }

    if result.passed {
        info!("✓ {} (seed={}) PASSED", result.scenario, result.seed);
    } else {
        error!(
            "✗ {} (seed={}) FAILED: {}",
            result.scenario,
            result.seed,
            result.failure_reason.as_deref().unwrap_or("unknown")
        );
    }

    for node in &result.nodes {
        let versus = node
            .versus_reference
            .map(|a| format!(" | match={:.3}", a.match_rate))
            .unwrap_or_default();
        info!(
            "    {:<12} seed={:<6} positive={:.3} undecided={:.3}{}",
            node.name, node.seed, node.positive_rate, node.undecided_rate, versus
        );
    }
}
