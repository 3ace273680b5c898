//! `adscope doctor` - validate fixtures and environment setup.

use std::path::Path;

use super::{BUNDLED_SCENARIOS, SCENARIO_FILES};
use crate::error::{CliError, CliResult};

pub fn execute(fixtures: &Path, trace_dir: &Path) -> CliResult<()> {
    let mut problems = Vec::new();

    if fixtures.is_dir() {
        println!("ok: fixtures directory {}", fixtures.display());
    } else {
        problems.push(format!("fixtures directory missing: {}", fixtures.display()));
    }

    for scenario in BUNDLED_SCENARIOS {
        let dir = fixtures.join(scenario);
        let missing: Vec<&str> = SCENARIO_FILES
            .iter()
            .copied()
            .filter(|file| !dir.join(file).is_file())
            .collect();
        if missing.is_empty() {
            println!("ok: scenario {scenario} ({} files)", SCENARIO_FILES.len());
        } else {
            problems.push(format!(
                "scenario {scenario} missing files: {}",
                missing.join(", ")
            ));
        }
    }

    match std::fs::create_dir_all(trace_dir) {
        Ok(()) => println!("ok: trace directory {}", trace_dir.display()),
        Err(err) => problems.push(format!(
            "trace directory {} not writable: {err}",
            trace_dir.display()
        )),
    }

    if problems.is_empty() {
        println!("environment looks good");
        Ok(())
    } else {
        for problem in &problems {
            eprintln!("problem: {problem}");
        }
        Err(CliError::Doctor(problems.join("; ")))
    }
}
