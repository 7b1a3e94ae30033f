//! Prefix Heap - configuration tooling.
//!
//! Validates configuration files for the prefix trie and binary heap, and
//! generates a file holding the defaults.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use prefix_heap_lib::config::{
    write_default_config, AppConfig, ConfigLoader, ConfigResult, LogConfig, ENV_PREFIX,
};
use prefix_heap_lib::error::{
    report_error, set_error_reporter, ErrorContext, PrefixHeapError, PrefixHeapResult,
    TracingErrorReporter,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix_heap", version, author, about)]
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
    /// Validate the configuration file
    Validate,

    /// Print the effective configuration as TOML
    Show,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (.toml or .json)
        #[clap(short, long, value_parser)]
        output: PathBuf,

        /// Overwrite the output file if it exists
        #[clap(long)]
        force: bool,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> PrefixHeapResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    installed.map_err(|e| {
        PrefixHeapError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

fn validate(loaded: ConfigResult<AppConfig>) -> PrefixHeapResult<()> {
    let config = loaded?;
    let trie = config.build_trie();
    let heap = config.build_heap::<u64>();

    info!(
        alphabet = trie.config().alphabet.name(),
        case_sensitive = trie.config().case_sensitive,
        max_depth = trie.config().max_depth,
        order = ?heap.order(),
        "Configuration validated successfully"
    );
    Ok(())
}

fn show(loaded: ConfigResult<AppConfig>) -> PrefixHeapResult<()> {
    let rendered = loaded?.render_for(Path::new("effective.toml"))?;
    println!("{rendered}");
    Ok(())
}

/// Main entry point for the application.
fn main() -> PrefixHeapResult<()> {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    set_error_reporter(Arc::new(TracingErrorReporter));

    let result = match args.command.unwrap_or(Command::Validate) {
        Command::Validate => validate(loaded),
        Command::Show => show(loaded),
        Command::GenConfig { output, force } => write_default_config(&output, force),
    };

    if let Err(e) = result {
        report_error(ErrorContext::new(e, "cli"));
        process::exit(1);
    }

    Ok(())
}
