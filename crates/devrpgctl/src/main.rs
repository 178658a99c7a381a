//! Dev-RPG Control - CLI for the gamification derivation engine
//!
//! Loads analysis data, runs the pure derivations from devrpg_common,
//! and renders the results.

mod cli;
mod commands;
mod display;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use devrpg_common::EngineConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Level { xp, json } => commands::level(&config, xp, json),
        Commands::Curve { levels } => commands::curve(&config, levels),
        Commands::Classify { score } => commands::classify(&config, score),
        Commands::Health { statuses } => commands::health(&statuses),
        Commands::Achievements { xp, report } => {
            commands::achievements(&config, xp, report.as_deref())
        }
        Commands::Leaderboard { users, json } => commands::leaderboard(&config, &users, json),
        Commands::Score { report, xp, json } => commands::score(&config, &report, xp, json),
    }
}
