//! Deterministic leaderboard ranking.
//!
//! Sort key: XP descending, then level descending, then identifier
//! ascending. The identifier tie-break makes the order total, so ranks
//! are strictly sequential (1, 2, 3, ...) with no shared ranks.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ranking input: one user with their XP and derived level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contender {
    pub id: String,
    pub xp_total: u64,
    pub level: u32,
}

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based, contiguous, never shared.
    pub rank: u32,
    pub id: String,
    pub xp_total: u64,
    pub level: u32,
}

/// Cosmetic tier for a leaderboard rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Default,
}

impl std::fmt::Display for RankTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::Silver => write!(f, "silver"),
            Self::Bronze => write!(f, "bronze"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Map a 1-based rank to its cosmetic tier.
pub fn rank_tier(rank: u32) -> RankTier {
    match rank {
        1 => RankTier::Gold,
        2 => RankTier::Silver,
        3 => RankTier::Bronze,
        _ => RankTier::Default,
    }
}

/// Rank a collection of contenders.
///
/// Empty input yields an empty board. Duplicate identifiers are a
/// caller error since rank uniqueness depends on identifier
/// uniqueness.
pub fn rank(contenders: &[Contender]) -> Result<Vec<LeaderboardEntry>> {
    let mut seen = HashSet::new();
    for contender in contenders {
        if !seen.insert(contender.id.as_str()) {
            return Err(EngineError::InvalidArgument(format!(
                "duplicate leaderboard identifier '{}'",
                contender.id
            )));
        }
    }

    let mut sorted: Vec<&Contender> = contenders.iter().collect();
    sorted.sort_by(|a, b| {
        b.xp_total
            .cmp(&a.xp_total)
            .then(b.level.cmp(&a.level))
            .then(a.id.cmp(&b.id))
    });

    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(i, c)| LeaderboardEntry {
            rank: i as u32 + 1,
            id: c.id.clone(),
            xp_total: c.xp_total,
            level: c.level,
        })
        .collect())
}
