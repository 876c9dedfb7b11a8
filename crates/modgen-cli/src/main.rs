use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use modgen_core::{ConfigError, parse_configuration, scheme, validate_stanza};
use modgen_generate::{GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Host-invoked modular input generating synthetic events.
///
/// With no flag the process streams events for the configuration payload on
/// stdin. `--scheme` and `--validate-arguments` select the two auxiliary
/// protocol modes.
#[derive(Parser, Debug)]
#[command(name = "modgen", version, about = "Synthetic event modular input")]
struct Cli {
    /// Print the capability scheme and exit.
    #[arg(long, exclusive = true)]
    scheme: bool,
    /// Validate a proposed stanza read from stdin; exit 1 on rejection.
    #[arg(long = "validate-arguments", exclusive = true)]
    validate_arguments: bool,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    if cli.scheme {
        // stdout is the protocol channel in every mode; logs stay on stderr.
        println!("{}", scheme());
        return ExitCode::SUCCESS;
    }

    if cli.validate_arguments {
        return run_validate();
    }

    match run_stream() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "streaming run aborted");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_validate() -> ExitCode {
    let payload = match read_stdin() {
        Ok(payload) => payload,
        Err(err) => {
            error!(error = %err, "could not read stanza payload");
            return ExitCode::FAILURE;
        }
    };

    match validate_stanza(&payload) {
        Ok(()) => {
            info!("stanza accepted");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "stanza rejected");
            ExitCode::FAILURE
        }
    }
}

fn run_stream() -> Result<(), CliError> {
    let payload = read_stdin()?;
    let config = parse_configuration(&payload)?;

    let engine = GenerationEngine::new();
    let mut rng = rand::rng();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = engine.run(&config, &mut out, &mut rng)?;

    info!(
        stanzas = report.stanzas.len(),
        generated = report.generated(),
        skipped = report.skipped(),
        "streaming run finished"
    );
    Ok(())
}

fn read_stdin() -> Result<String, io::Error> {
    let mut payload = String::new();
    io::stdin().read_to_string(&mut payload)?;
    Ok(payload)
}
