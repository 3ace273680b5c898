//! Terminal output and trace persistence.

use std::path::{Path, PathBuf};

use adscope_types::{ActionStrategy, RunTrace};

use crate::error::CliResult;

/// Print the final strategy in a compact operator-readable form.
pub fn print_strategy(strategy: &ActionStrategy, total_steps: u32) {
    println!();
    println!(
        "Diagnosis: {} ({:.1}% confidence, {} steps)",
        strategy.primary_hypothesis,
        strategy.confidence * 100.0,
        total_steps
    );
    println!();
    println!("Recommended actions:");
    for (i, action) in strategy.actions.iter().enumerate() {
        println!("  {}. {}", i + 1, action.description);
        println!("     impact: {}", action.impact);
        println!("     risk:   {}", action.risk);
        println!("     kpi:    {}", action.kpi);
    }
    println!();
    println!("{}", strategy.reasoning);
}

/// Write the run trace as pretty-printed JSON, one file per run.
pub fn write_trace(dir: &Path, trace: &RunTrace) -> CliResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("trace_{}.json", trace.run_id));
    let json = serde_json::to_vec_pretty(trace)?;
    std::fs::write(&path, json)?;
    Ok(path)
}
