// src/main.rs
// triage - classify campus issue reports and feedback from the command line

use anyhow::Result;
use campus_triage::cli::{self, Cli};
use campus_triage::config::{self, EnvConfig, TriageConfig};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Load .env files (global first, then current directory)
    let _ = dotenvy::from_path(config::config_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let env = EnvConfig::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(env.resolve_log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    env.log_rejected();

    let file_config = TriageConfig::load();
    let format = cli.format.unwrap_or_else(|| env.resolve_output(&file_config));
    let thresholds = file_config.analysis;
    debug!(?format, ?thresholds, "Resolved configuration");

    let outcome = cli::execute(&cli.command, &thresholds, env.quiet)?;
    println!("{}", cli::render(&outcome, format, &thresholds)?);

    Ok(())
}
