//! `adscope battery` - run every bundled scenario in sequence.

use std::path::Path;

use adscope_engine::{DiagnosticLoop, TracingObserver};
use adscope_probes::FixtureExecutor;

use super::{diagnose, BUNDLED_SCENARIOS};
use crate::error::{CliError, CliResult};
use crate::output;

pub fn execute(fixtures: &Path, trace_dir: &Path) -> CliResult<()> {
    let engine = DiagnosticLoop::with_defaults();
    let executor = FixtureExecutor::new(fixtures);
    let mut failed = 0usize;

    for name in BUNDLED_SCENARIOS {
        println!("=== scenario: {name} ===");
        match diagnose::load_scenario(fixtures, name) {
            Ok(scenario) => {
                let mut observer = TracingObserver;
                let report = engine.run(scenario, &executor, &mut observer);
                output::print_strategy(&report.strategy, report.total_steps);
                output::write_trace(trace_dir, &report.trace)?;
                println!("=== {name}: ok ===\n");
            }
            Err(err) => {
                failed += 1;
                eprintln!("=== {name}: failed ({err}) ===\n");
            }
        }
    }

    if failed > 0 {
        return Err(CliError::BatteryFailed {
            failed,
            total: BUNDLED_SCENARIOS.len(),
        });
    }

    println!("battery complete: {} scenarios ok", BUNDLED_SCENARIOS.len());
    Ok(())
}
