use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rehearse", version)]
#[command(about = "Rehearse - score role-play sales calls and narrate the outcome", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/rehearse/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a saved transcript (JSON)
    Score {
        /// Transcript file: a message array or {"persona": ..., "messages": [...]}
        transcript: PathBuf,

        /// Prospect name used in the outcome narrative
        #[arg(long)]
        persona: Option<String>,

        /// Company name used in the outcome narrative
        #[arg(long)]
        company: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let repo = commands::utils::open_repository(cli.config)?;

    match cli.command {
        Commands::Score {
            transcript,
            persona,
            company,
            json,
        } => commands::score::run(&repo, &transcript, persona, company, json)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&repo)?,
            ConfigAction::Init { force } => commands::config::init(&repo, force)?,
        },
    }

    Ok(())
}
