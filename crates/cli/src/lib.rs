pub mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commonground_core::config::{AppConfig, LoadOptions, LogFormat, LoggingConfig};
use commonground_core::domain::question::{DepthTier, SituationTag};

#[derive(Debug, Parser)]
#[command(
    name = "commonground",
    about = "Common Ground operator CLI",
    long_about = "Generate conversation starters for two interest profiles and inspect the question catalog, configuration, and runtime readiness.",
    after_help = "Examples:\n  commonground suggest --mine coffee,hiking --theirs coffee,movies\n  commonground suggest --mine travel --theirs travel --depth deep --json\n  commonground doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Generate bucketed conversation starters for two interest profiles")]
    Suggest {
        #[arg(long, value_delimiter = ',', help = "Caller interest ids, comma separated")]
        mine: Vec<String>,
        #[arg(long, value_delimiter = ',', help = "Counterpart interest ids, comma separated")]
        theirs: Vec<String>,
        #[arg(long, help = "Restrict every bucket to one depth tier (icebreaker|casual|deep)")]
        depth: Option<DepthTier>,
        #[arg(
            long,
            help = "Restrict starters to one situation tag (first_meeting|group_setting|networking)"
        )]
        situation: Option<SituationTag>,
        #[arg(long, help = "Cap each bucket at N questions (default: configured or unlimited)")]
        max_per_bucket: Option<usize>,
        #[arg(long, help = "Opaque variety token; same token yields the same capped subset")]
        refresh: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List the interest catalog with labels and categories")]
    Interests {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Summarize the question catalog by kind, depth tier, and situation tag")]
    Catalog {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Validate config, catalog integrity, and engine readiness checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&effective_logging_config());

    let result = match cli.command {
        Command::Suggest { mine, theirs, depth, situation, max_per_bucket, refresh, json } => {
            commands::suggest::run(commands::suggest::SuggestArgs {
                mine,
                theirs,
                depth,
                situation,
                max_per_bucket,
                refresh,
                json,
            })
        }
        Command::Interests { json } => {
            commands::CommandResult { exit_code: 0, output: commands::interests::run(json) }
        }
        Command::Catalog { json } => {
            commands::CommandResult { exit_code: 0, output: commands::catalog::run(json) }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logging must come up before dispatch; a broken config still gets the
/// default subscriber so the failure itself is observable.
fn effective_logging_config() -> LoggingConfig {
    AppConfig::load(LoadOptions::default())
        .map(|config| config.logging)
        .unwrap_or_else(|_| LoggingConfig { level: "info".to_string(), format: LogFormat::Compact })
}

fn init_logging(config: &LoggingConfig) {
    use tracing::Level;

    let log_level = config.level.parse::<Level>().unwrap_or(Level::INFO);

    // Diagnostics go to stderr; stdout carries the command payload.
    match config.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .pretty()
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
    }
}
