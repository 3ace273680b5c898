//! `adscope diagnose` - run one scenario through the loop.

use std::path::{Path, PathBuf};

use adscope_engine::{DiagnosticLoop, TracingObserver};
use adscope_probes::{AdsMode, FixtureExecutor};
use adscope_types::ScenarioInput;

use crate::error::{CliError, CliResult};
use crate::output;

pub fn execute(
    fixtures: &Path,
    trace_dir: &Path,
    scenario_arg: &str,
    mode: AdsMode,
    break_competitor: bool,
    write_trace: bool,
) -> CliResult<()> {
    let scenario = load_scenario(fixtures, scenario_arg)?;
    tracing::info!(
        asin = %scenario.asin,
        goal = %scenario.goal,
        scenario = scenario.fixture_name(),
        %mode,
        break_competitor,
        "starting diagnosis"
    );

    let executor = FixtureExecutor::new(fixtures)
        .with_mode(mode)
        .with_competitor_fault(break_competitor);
    let engine = DiagnosticLoop::with_defaults();
    let mut observer = TracingObserver;

    let report = engine.run(scenario, &executor, &mut observer);

    output::print_strategy(&report.strategy, report.total_steps);

    if write_trace {
        let path = output::write_trace(trace_dir, &report.trace)?;
        println!("\nTrace written to {}", path.display());
    }

    Ok(())
}

/// Resolve the scenario argument: a `.json` path is loaded directly,
/// anything else names a scenario directory under the fixtures root.
pub fn load_scenario(fixtures: &Path, arg: &str) -> CliResult<ScenarioInput> {
    let path = if arg.ends_with(".json") {
        PathBuf::from(arg)
    } else {
        fixtures.join(arg).join("scenario.json")
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|source| CliError::ScenarioLoad { path, source })?;
    Ok(serde_json::from_str(&contents)?)
}
