//! Demo runner for the user-lookup suite.
//!
//! Three modes, matching what an external discovery tool expects:
//!
//! ```bash
//! user-lookup                 # run everything, libtest-style report
//! user-lookup --list          # enumerate case names, one per line
//! user-lookup --case NAME     # run a single case; nonzero exit on failure
//! ```

use std::process::ExitCode;

use clap::Parser;
use libtest_mimic::Arguments;
use owo_colors::OwoColorize as _;
use understudy::{TestRegistry, runner};

mod component;
mod suite;

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run a single named case and exit.
    #[arg(long)]
    case: Option<String>,

    /// List known case names, one per line.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = TestRegistry::discover();

    if cli.list {
        for name in registry.list() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    if let Some(case) = cli.case {
        // Assertion failures propagate as panics, unchanged; only dispatch
        // errors are rendered here.
        return match registry.run(&case) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}: {e}", "error".red().bold());
                ExitCode::FAILURE
            }
        };
    }

    runner::run(&registry, &Arguments::default()).exit()
}
