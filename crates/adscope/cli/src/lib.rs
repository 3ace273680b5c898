//! Adscope CLI - terminal interface for the diagnostic loop.
//!
//! Commands:
//! - `diagnose` runs one scenario and prints the ranked strategy
//! - `battery` runs every bundled scenario in sequence
//! - `doctor` validates the fixtures directory and trace destination

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adscope_probes::AdsMode;

mod commands;
mod error;
mod output;

pub use error::{CliError, CliResult};

/// Adscope CLI application.
#[derive(Parser)]
#[command(name = "adscope")]
#[command(about = "Adscope - belief-revision diagnostics for ad performance", long_about = None)]
#[command(version)]
struct Cli {
    /// Fixtures directory holding scenario data
    #[arg(
        long,
        global = true,
        env = "ADSCOPE_FIXTURES",
        default_value = "fixtures"
    )]
    fixtures: PathBuf,

    /// Directory run traces are written to
    #[arg(
        long,
        global = true,
        env = "ADSCOPE_TRACE_DIR",
        default_value = "trace"
    )]
    trace_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Diagnose a single scenario
    Diagnose {
        /// Scenario name under the fixtures directory, or a path to a
        /// scenario JSON file
        #[arg(long)]
        scenario: String,

        /// Ads analysis mode (keyword or campaign)
        #[arg(long, default_value = "keyword")]
        mode: AdsMode,

        /// Simulate a competitor-probe failure
        #[arg(long)]
        break_competitor: bool,

        /// Skip writing the run trace
        #[arg(long)]
        no_trace: bool,
    },

    /// Run the bundled scenario battery
    Battery,

    /// Validate fixtures and environment setup
    Doctor,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Diagnose {
            scenario,
            mode,
            break_competitor,
            no_trace,
        } => commands::diagnose::execute(
            &cli.fixtures,
            &cli.trace_dir,
            &scenario,
            mode,
            break_competitor,
            !no_trace,
        ),
        Commands::Battery => commands::battery::execute(&cli.fixtures, &cli.trace_dir),
        Commands::Doctor => commands::doctor::execute(&cli.fixtures, &cli.trace_dir),
    }
}
