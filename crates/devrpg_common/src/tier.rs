//! Score-to-tier classification for the boss-battle framing.
//!
//! A 0-100 score maps onto one of three qualitative tiers via
//! configurable thresholds. Classification is stateless: the same score
//! and thresholds always produce the same tier, with no hysteresis.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Qualitative quality tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Stable,
    Warning,
    Critical,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Tier boundaries. Each value is the inclusive lower bound of its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub stable_min: u8,
    pub warning_min: u8,
    pub critical_min: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            stable_min: 80,
            warning_min: 50,
            critical_min: 30,
        }
    }
}

impl TierThresholds {
    /// Thresholds must be strictly ordered or bands would overlap.
    pub fn validate(&self) -> Result<()> {
        if self.stable_min > self.warning_min && self.warning_min > self.critical_min {
            Ok(())
        } else {
            Err(EngineError::InvalidConfiguration(format!(
                "tier thresholds must satisfy stable_min > warning_min > critical_min, \
                 got {} / {} / {}",
                self.stable_min, self.warning_min, self.critical_min
            )))
        }
    }
}

/// Classify a score against the given thresholds.
///
/// Bands are inclusive on their lower bound: a score equal to
/// `warning_min` is Warning, not Critical. Scores above 100 are a
/// caller error, never clamped.
pub fn classify(score: u8, thresholds: &TierThresholds) -> Result<Tier> {
    if score > 100 {
        return Err(EngineError::InvalidArgument(format!(
            "score must be within 0-100, got {score}"
        )));
    }
    if score >= thresholds.stable_min {
        Ok(Tier::Stable)
    } else if score >= thresholds.warning_min {
        Ok(Tier::Warning)
    } else {
        Ok(Tier::Critical)
    }
}

/// Health lost by the boss: the inverse of the score, clamped to 0-100.
pub fn damage(score: u8) -> u8 {
    100 - score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        let thresholds = TierThresholds::default();
        assert_eq!(classify(55, &thresholds).unwrap(), Tier::Warning);
        assert_eq!(damage(55), 45);
    }

    #[test]
    fn band_lower_bounds_are_inclusive() {
        let thresholds = TierThresholds::default();
        assert_eq!(classify(80, &thresholds).unwrap(), Tier::Stable);
        assert_eq!(classify(79, &thresholds).unwrap(), Tier::Warning);
        assert_eq!(classify(50, &thresholds).unwrap(), Tier::Warning);
        assert_eq!(classify(49, &thresholds).unwrap(), Tier::Critical);
        assert_eq!(classify(0, &thresholds).unwrap(), Tier::Critical);
        assert_eq!(classify(100, &thresholds).unwrap(), Tier::Stable);
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let err = classify(101, &TierThresholds::default()).unwrap_err();
        assert_eq!(err.code(), "invalid_argument");
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let bad = TierThresholds {
            stable_min: 50,
            warning_min: 80,
            critical_min: 30,
        };
        assert!(bad.validate().is_err());

        let equal = TierThresholds {
            stable_min: 80,
            warning_min: 80,
            critical_min: 30,
        };
        assert!(equal.validate().is_err());
    }

    #[test]
    fn tier_serializes_snake_case() {
        // The dashboard consumes these labels verbatim.
        assert_eq!(serde_json::to_string(&Tier::Stable).unwrap(), "\"stable\"");
        assert_eq!(
            serde_json::to_string(&Tier::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn damage_clamps_at_the_edges() {
        assert_eq!(damage(0), 100);
        assert_eq!(damage(100), 0);
        assert_eq!(damage(250), 0);
    }
}
