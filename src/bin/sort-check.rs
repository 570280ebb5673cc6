//! Command-line harness for the sorting algorithms.
//!
//! Usage:
//!   sort-check --algo all                    # Verify every algorithm
//!   sort-check --algo quick --report json    # JSON report for one algorithm
//!   sort-check --algo bubble --failfast      # Stop at the first failure
//!   sort-check --algo merge --visualize      # Step trace on stderr
//!   sort-check --algo all --array "3,1,2"    # Sort a single literal array
//!   sort-check --list                        # List algorithms and datasets

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::error;

use sort_check::datasets::DatasetSuite;
use sort_check::harness::{self, HarnessConfig};
use sort_check::registry::Selection;
use sort_check::report::{self, ReportFormat};
use sort_check::sorting::{NoopObserver, StepObserver};
use sort_check::tui::{self, TraceObserver};
use sort_check::utils::parse_array_or_default;
use sort_check::HarnessError;

#[derive(Parser, Debug)]
#[command(
    name = "sort-check",
    version,
    about = "Verify the sorting algorithms against a fixed dataset suite"
)]
struct Cli {
    /// Algorithm to run: bubble, selection, merge, quick, or all
    #[arg(long, required_unless_present = "list")]
    algo: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    report: ReportFormat,

    /// Stop at the first failing dataset
    #[arg(long)]
    failfast: bool,

    /// Print a step-by-step trace of each sort to stderr
    #[arg(long)]
    visualize: bool,

    /// Sort one comma-separated list instead of the dataset suite
    #[arg(long)]
    array: Option<String>,

    /// List available algorithms and datasets
    #[arg(long, short)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<u8, HarnessError> {
    let suite = DatasetSuite::standard();

    if cli.list {
        tui::print_header();
        tui::print_available(&suite);
        return Ok(0);
    }

    // clap guarantees --algo when --list is absent
    let selection: Selection = cli.algo.as_deref().unwrap_or_default().parse()?;

    let mut trace = TraceObserver::new(io::stderr().lock());
    let mut noop = NoopObserver;
    let observer: &mut dyn StepObserver = if cli.visualize { &mut trace } else { &mut noop };

    if let Some(literal) = cli.array.as_deref() {
        let input = parse_array_or_default(literal);
        let outcomes = harness::run_adhoc(selection, &input, observer);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut code = 0;
        for outcome in &outcomes {
            writeln!(
                out,
                "ALGO={} OUTPUT={:?} RESULT={}",
                outcome.name,
                outcome.output,
                if outcome.passed { "PASS" } else { "FAIL" }
            )?;
            if !outcome.passed {
                code = 1;
            }
        }
        trace.finish()?;
        return Ok(code);
    }

    let config = HarnessConfig {
        fail_fast: cli.failfast,
    };
    let outcome = harness::run_observed(selection, &suite, &config, observer)?;
    trace.finish()?;

    let stdout = io::stdout();
    report::emit(&outcome, cli.report, &mut stdout.lock())?;

    Ok(outcome.exit_code())
}
