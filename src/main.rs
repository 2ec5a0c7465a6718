//! Command-line interface for nfa-star.

use clap::Parser;
use nfa_star::runner::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use nfa_star::{render_file, run, Error, RunConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nfa-star", version)]
#[command(
    about = "Validate a JSON automaton and write its Kleene-star construction",
    long_about = None
)]
struct Cli {
    /// Automaton document to read
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the result
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the result instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), Error> {
    if cli.stdout {
        print!("{}", render_file(&cli.input)?);
        return Ok(());
    }

    let config = RunConfig::builder()
        .input(cli.input)
        .output(cli.output)
        .build()?;
    let report = run(&config)?;
    info!(
        states = report.states,
        transitions = report.transitions,
        "Done"
    );
    Ok(())
}
