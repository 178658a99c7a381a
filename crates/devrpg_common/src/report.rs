//! Analysis report derivation.
//!
//! A CI run produces up to four sub-scores (code quality, architecture,
//! event-loop safety, cost efficiency). Everything presentational about
//! a report derives deterministically from those: the weighted overall
//! score, the status band, the XP award, and the badge list.

use crate::achievements;
use crate::error::{EngineError, Result};
use crate::leveling::LevelCurve;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sub-scores of a single analysis run, each 0-100 when present.
///
/// Absence of a component is an explicit, distinguishable case: a
/// missing sub-report simply does not participate in the weighted
/// average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub code_quality: Option<u8>,
    pub architecture: Option<u8>,
    pub event_loop: Option<u8>,
    pub cost: Option<u8>,
}

impl SubScores {
    /// Weighted overall score, renormalized over the components that
    /// are present. No components at all scores 0. Truncates toward
    /// zero.
    pub fn overall_score(&self) -> Result<u8> {
        let components = [
            (self.code_quality, 0.30),
            (self.architecture, 0.25),
            (self.event_loop, 0.20),
            (self.cost, 0.25),
        ];
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (component, weight) in components {
            if let Some(score) = component {
                if score > 100 {
                    return Err(EngineError::InvalidArgument(format!(
                        "sub-score must be within 0-100, got {score}"
                    )));
                }
                weighted_sum += score as f64 * weight;
                total_weight += weight;
            }
        }
        if total_weight == 0.0 {
            return Ok(0);
        }
        Ok((weighted_sum / total_weight) as u8)
    }
}

/// Four-band status derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl ReportStatus {
    pub fn from_score(overall: u8) -> Self {
        match overall {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::NeedsImprovement,
            _ => Self::Critical,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Good => write!(f, "good"),
            Self::NeedsImprovement => write!(f, "needs_improvement"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// XP awarded for an analysis run. Ten XP per score point, never
/// random.
pub fn xp_for_score(overall: u8) -> u64 {
    overall as u64 * 10
}

/// Gamified outcome of a single report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpgSummary {
    pub xp_earned: u64,
    pub badges_earned: Vec<String>,
    pub level_up: bool,
}

/// A derived analysis report, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub report_id: String,
    pub overall_score: u8,
    pub status: ReportStatus,
    pub sub_scores: SubScores,
    pub analyzed_at: DateTime<Utc>,
    pub rpg_summary: RpgSummary,
}

impl AnalysisReport {
    /// Derive the full report from raw sub-scores.
    pub fn derive(sub_scores: SubScores, analyzed_at: DateTime<Utc>) -> Result<Self> {
        let overall_score = sub_scores.overall_score()?;
        let badges_earned = achievements::report_badges(&sub_scores, overall_score)
            .into_iter()
            .map(String::from)
            .collect();
        Ok(Self {
            report_id: report_id_at(analyzed_at),
            overall_score,
            status: ReportStatus::from_score(overall_score),
            sub_scores,
            analyzed_at,
            rpg_summary: RpgSummary {
                xp_earned: xp_for_score(overall_score),
                badges_earned,
                level_up: overall_score >= 90,
            },
        })
    }

    /// Whether applying this report's XP award moves a user to a higher
    /// level.
    pub fn levels_up_user(&self, xp_total: u64, curve: &LevelCurve) -> bool {
        let before = curve.level_for_xp(xp_total).level;
        let after = curve
            .level_for_xp(xp_total + self.rpg_summary.xp_earned)
            .level;
        after > before
    }
}

/// Timestamp-derived report identifier, e.g. `RPT-20260830120000`.
pub fn report_id_at(at: DateTime<Utc>) -> String {
    format!("RPT-{}", at.format("%Y%m%d%H%M%S"))
}
