//! Kupu - Main entrypoint.
//!
//! Loads configuration, initializes logging, loads a word list and answers
//! queries against it, either once from the command line or interactively
//! from standard input.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kupu_lib::config::{ConfigLoader, KupuConfig, LogConfig, ENV_PREFIX};
use kupu_lib::error::config::ConfigError;
use kupu_lib::error::{set_error_reporter, KupuError, KupuResult, TracingErrorReporter};
use kupu_lib::service::{IndexHandle, LookupService, VocabularyLoader};
use kupu_lib::shell::{Outcome, Shell};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

/// Command line arguments for Kupu.
#[derive(Parser, Debug)]
#[clap(name = "Kupu", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether words exist, counting each hit
    Search {
        /// Word list to load
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Words to look up, in order
        #[clap(required = true)]
        queries: Vec<String>,
    },

    /// Report the rank of a word
    Rank {
        /// Word list to load
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Word to look up
        word: String,
    },

    /// List words starting with a prefix
    Suggest {
        /// Word list to load
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Prefix to complete
        prefix: String,
    },

    /// Read commands from standard input
    Shell {
        /// Word list to load
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,
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

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> KupuResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KupuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the services around a shared index and loads the word list into it.
async fn open(config: &KupuConfig, words: Option<&Path>) -> KupuResult<(VocabularyLoader, LookupService)> {
    let path = words
        .or(config.vocabulary.word_list.as_deref())
        .ok_or(ConfigError::MissingWordList)?;

    let handle = IndexHandle::new();
    let loader = VocabularyLoader::new(config.vocabulary.clone(), handle.clone());
    let lookup = LookupService::new(config.vocabulary.clone(), config.lookup.clone(), handle);

    let report = loader.load_path(path).await?;
    info!(
        path = %path.display(),
        valid = report.valid_count,
        invalid = report.invalid_count,
        "Loaded {} valid words",
        report.valid_count
    );

    Ok((loader, lookup))
}

/// Reads commands from standard input until EOF or `quit`.
async fn run_shell(shell: Shell) -> KupuResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        match shell.execute(&line).await? {
            Outcome::Reply(reply) => {
                stdout.write_all(reply.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Outcome::Skip => {}
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> KupuResult<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Main entry point for the application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = config_loader.load().context("Failed to load configuration")?;

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    info!(version = kupu_lib::VERSION, "Starting Kupu");

    match args.command {
        Command::Search { words, queries } => {
            let (_, lookup) = open(&config, words.as_deref()).await?;
            for query in &queries {
                match lookup.search(query) {
                    Ok(response) => print_json(&response)?,
                    Err(e) => print_json(&serde_json::json!({ "error": e.to_string() }))?,
                }
            }
        }
        Command::Rank { words, word } => {
            let (_, lookup) = open(&config, words.as_deref()).await?;
            print_json(&lookup.rank(&word)?)?;
        }
        Command::Suggest { words, prefix } => {
            let (_, lookup) = open(&config, words.as_deref()).await?;
            print_json(&lookup.suggest(&prefix)?)?;
        }
        Command::Shell { words } => {
            let (loader, lookup) = open(&config, words.as_deref()).await?;
            info!("Reading commands from standard input");
            run_shell(Shell::new(loader, lookup)).await?;
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KupuConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(KupuError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KupuError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml).map_err(KupuError::Io)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}
