// Rust guideline compliant 2026-10-17

//! Albert Collections CLI Application
//!
//! Resolves configured collection names to catalog identifiers.

use albert_cli::{commands, init_tracing, LogLevel, LogOptions};
use albert_core::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "albert-collections",
    version,
    about = "Albert Data Collections CLI",
    long_about = "Resolves the collections declared in a configuration file to their Albert API identifiers and writes the enriched dictionary to data/data_gouv_search_collections.json.",
    arg_required_else_help = true,
    after_help = "Examples:\n  albert-collections update_collections_dict\n  albert-collections update_collections_dict --config-file=config/data_gouv_search_config.json\n"
)]
struct Cli {
    /// Log verbosity
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Append JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Update the collections dictionary from the given configuration file
    #[command(name = "update_collections_dict")]
    UpdateCollectionsDict {
        /// Path to the configuration file
        #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
        config_file: PathBuf,
    },
}

fn main() -> ExitCode {
    // Usage errors exit 1 like any other failure; help and version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    let options = LogOptions {
        level: cli.log_level,
        file: cli.log_file.clone(),
    };
    let _guard = match init_tracing(&options) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Commands::UpdateCollectionsDict { config_file } => {
            commands::update_collections_dict::execute(config_file).map(|_| ())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("An error occurred: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
