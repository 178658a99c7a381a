//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dev-RPG Control CLI
#[derive(Parser)]
#[command(name = "devrpgctl")]
#[command(about = "Dev-RPG - CI/CD analysis gamification engine", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to engine config TOML (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show level progression for an XP total
    Level {
        /// Cumulative XP
        xp: u64,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Print the XP requirement table for the leveling curve
    Curve {
        /// Highest level to print
        #[arg(long, default_value_t = 10)]
        levels: u32,
    },

    /// Classify a 0-100 score into a quality tier
    Classify {
        /// Overall score
        score: u8,
    },

    /// Aggregate service statuses into boss HP
    Health {
        /// Statuses: healthy, degraded or unavailable
        statuses: Vec<String>,
    },

    /// Show achievement unlock state for an XP total
    Achievements {
        /// Cumulative XP
        xp: u64,

        /// Sub-scores JSON file for per-report badges
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Rank users from a JSON file
    Leaderboard {
        /// JSON array of users ({id, xp_total, ...})
        users: PathBuf,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Derive a full analysis report from a sub-scores JSON file
    Score {
        /// Sub-scores JSON file
        report: PathBuf,

        /// Current XP total; prints achievements this report unlocks
        #[arg(long)]
        xp: Option<u64>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}
