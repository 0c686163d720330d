//! Pono Match - Main entrypoint.
//!
//! This is the main entry point for the Pono Match service. It loads the
//! configuration, initializes the logging system, and then either starts the
//! HTTP server or runs a one-shot command.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use pono_match_lib::config::{ConfigLoader, LogConfig, PonoConfig, ENV_PREFIX};
use pono_match_lib::engine::{CompareRequest, MatchEngine, MatchRequest};
use pono_match_lib::error::{
    report_error, set_error_reporter, EngineResult, ErrorContext, PonoError, PonoResult,
    TracingErrorReporter,
};
use pono_match_lib::protocol::http::{self, CompareResponse, ErrorResponse, MatchResponse};
use pono_match_lib::{init_logging, VERSION};

/// Command line arguments for Pono Match.
#[derive(Parser, Debug)]
#[clap(name = "Pono Match", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server
    Serve,

    /// Run a single algorithm once and print the result as JSON
    Match {
        /// Algorithm identifier (naive, kmp, boyer_moore, rabin_karp)
        #[clap(short, long)]
        algorithm: String,

        /// Text to search in
        #[clap(short, long)]
        text: String,

        /// Pattern to search for
        #[clap(short, long)]
        pattern: String,
    },

    /// Run every algorithm once and print the comparison as JSON
    Compare {
        /// Text to search in
        #[clap(short, long)]
        text: String,

        /// Pattern to search for
        #[clap(short, long)]
        pattern: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Main entry point for the application.
fn main() -> PonoResult<()> {
    let args = Args::parse();
    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Log with the configured settings when they are usable, defaults otherwise
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_else(|_| LogConfig::default());
    init_logging(&log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Serve);
    if let Command::GenConfig { output } = &command {
        return gen_config(output);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration error");
            process::exit(1);
        }
    };

    match command {
        Command::Serve => {
            info!(version = VERSION, "Starting Pono Match");
            if let Err(e) = runtime(&config)?.block_on(http::serve(&config)) {
                report_error(
                    ErrorContext::new(e, "main.serve")
                        .with_details(format!("address: {}", config.server.address)),
                );
                process::exit(1);
            }
            Ok(())
        }
        Command::Match {
            algorithm,
            text,
            pattern,
        } => {
            let engine = MatchEngine::new(&config.limits);
            let outcome = runtime(&config)?
                .block_on(engine.run_single(MatchRequest::new(text, pattern, algorithm)));
            print_outcome(outcome.map(|result| MatchResponse::from(&result)))
        }
        Command::Compare { text, pattern } => {
            let engine = MatchEngine::new(&config.limits);
            let outcome =
                runtime(&config)?.block_on(engine.compare_all(CompareRequest::new(text, pattern)));
            print_outcome(outcome.map(|comparison| CompareResponse::from(&comparison)))
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}

/// Builds the multi-threaded runtime sized from the configuration.
fn runtime(config: &PonoConfig) -> PonoResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.worker_threads)
        .thread_name("pono-worker")
        .enable_all()
        .build()
        .map_err(PonoError::Io)
}

/// Prints the response body the HTTP API would have returned.
///
/// Exits with status 1 when the engine reported an error.
fn print_outcome<T: Serialize>(outcome: EngineResult<T>) -> PonoResult<()> {
    match outcome {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&e))?);
            process::exit(1);
        }
    }
}

fn gen_config(output: &Path) -> PonoResult<()> {
    info!("Generating default configuration");
    let default_config = PonoConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}
