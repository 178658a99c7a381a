//! User records as seen by the derivation engine.
//!
//! Level is never stored on the record: it is always recomputed from
//! the XP total through the leveling curve, so a stale persisted level
//! can never leak into presentation.

use crate::leaderboard::Contender;
use crate::leveling::{LevelCurve, LevelProgress};
use serde::{Deserialize, Serialize};

/// A user as supplied by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Cumulative XP, the only authoritative progression value.
    pub xp_total: u64,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl User {
    /// Current level, derived from XP.
    pub fn level(&self, curve: &LevelCurve) -> u32 {
        curve.level_for_xp(self.xp_total).level
    }

    /// Full progression decomposition.
    pub fn progress(&self, curve: &LevelCurve) -> LevelProgress {
        curve.level_for_xp(self.xp_total)
    }

    /// Ranking input for this user, with the level derived fresh.
    pub fn contender(&self, curve: &LevelCurve) -> Contender {
        Contender {
            id: self.id.clone(),
            xp_total: self.xp_total,
            level: self.level(curve),
        }
    }

    /// Name to show: display name when set, identifier otherwise.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}
