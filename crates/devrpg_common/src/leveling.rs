//! XP leveling curve.
//!
//! Each level costs more XP than the last by a constant multiplicative
//! factor, floored at every step. The floor makes the curve
//! non-invertible in closed form, so decomposition always walks the
//! curve iteratively from level 1.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Constants defining the leveling curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelCurve {
    /// XP required to complete level 1.
    pub base_xp: u64,
    /// Multiplier applied to the requirement at each subsequent level.
    pub growth_factor: f64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            base_xp: 100,
            growth_factor: 1.5,
        }
    }
}

/// Decomposition of a cumulative XP total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level (1-based, unbounded above).
    pub level: u32,
    /// XP accumulated toward the next level.
    pub xp_into_level: u64,
    /// Full requirement of the next level (not the remaining gap).
    pub xp_to_next_level: u64,
}

impl LevelCurve {
    /// Build a curve, rejecting degenerate constants up front.
    pub fn new(base_xp: u64, growth_factor: f64) -> Result<Self> {
        let curve = Self {
            base_xp,
            growth_factor,
        };
        curve.validate()?;
        Ok(curve)
    }

    /// Check the curve constants. A growth factor at or below 1.0 would
    /// break the strictly-increasing invariant.
    pub fn validate(&self) -> Result<()> {
        if self.base_xp == 0 {
            return Err(EngineError::InvalidConfiguration(
                "base_xp must be positive".into(),
            ));
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "growth_factor must be a finite value above 1.0, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }

    /// XP required to complete the given level.
    ///
    /// Level 0 (or below, unrepresentable here) is a caller error, not a
    /// clamp.
    pub fn xp_required_for_level(&self, level: u32) -> Result<u64> {
        if level == 0 {
            return Err(EngineError::InvalidArgument(
                "level must be >= 1".into(),
            ));
        }
        let mut required = self.base_xp;
        for _ in 1..level {
            required = (required as f64 * self.growth_factor).floor() as u64;
        }
        Ok(required)
    }

    /// Decompose a cumulative XP total into level plus remainder.
    ///
    /// Walks the curve from level 1, spending XP one level at a time
    /// until the remainder no longer covers the next requirement. Zero
    /// XP means level 1 with nothing into it.
    pub fn level_for_xp(&self, xp_total: u64) -> LevelProgress {
        let mut level = 1u32;
        let mut xp_for_next = self.base_xp;
        let mut remaining = xp_total;

        while remaining >= xp_for_next {
            remaining -= xp_for_next;
            level += 1;
            xp_for_next = (xp_for_next as f64 * self.growth_factor).floor() as u64;
        }

        LevelProgress {
            level,
            xp_into_level: remaining,
            xp_to_next_level: xp_for_next,
        }
    }
}
