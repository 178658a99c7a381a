//! Shared derivation engine for the Dev-RPG dashboard.
//!
//! Pure, side-effect-free functions that turn raw analysis data (XP
//! totals, 0-100 scores, service statuses) into presentation facts:
//! levels, achievements, quality tiers, boss HP and leaderboards.
//! Nothing in this crate performs I/O or holds mutable state; callers
//! read a consistent snapshot from the backing store and hand it in.

pub mod achievements;
pub mod config;
pub mod error;
pub mod health;
pub mod leaderboard;
pub mod leveling;
pub mod report;
pub mod tier;
pub mod user;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use health::{boss_hp, ServiceStatus, MAX_BOSS_HP};
pub use leaderboard::{rank, rank_tier, Contender, LeaderboardEntry, RankTier};
pub use leveling::{LevelCurve, LevelProgress};
pub use report::{AnalysisReport, ReportStatus, RpgSummary, SubScores};
pub use tier::{classify, damage, Tier, TierThresholds};
pub use user::User;
