//! Aggregate service health as boss hit points.
//!
//! The dashboard renders overall system health as a boss with up to
//! 100_000 HP. Each dependent service contributes full credit when
//! healthy, half credit when degraded, and nothing when unavailable.

use serde::{Deserialize, Serialize};

/// Health of a single dependent service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unavailable,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Degraded => write!(f, "degraded"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

impl std::str::FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Self::Healthy),
            "degraded" => Ok(Self::Degraded),
            "unavailable" => Ok(Self::Unavailable),
            other => Err(format!(
                "unknown service status '{other}' (expected healthy, degraded or unavailable)"
            )),
        }
    }
}

/// Full boss HP: all services healthy.
pub const MAX_BOSS_HP: u64 = 100_000;

/// Weighted aggregate health on the boss HP scale.
///
/// healthy counts 100, degraded 50, unavailable 0, averaged over all
/// services and scaled to 0-100_000. Integer arithmetic throughout,
/// truncating. An empty service set is full HP: overall health only
/// drops on observed failures.
pub fn boss_hp(statuses: &[ServiceStatus]) -> u64 {
    if statuses.is_empty() {
        return MAX_BOSS_HP;
    }
    let healthy = statuses
        .iter()
        .filter(|s| **s == ServiceStatus::Healthy)
        .count() as u64;
    let degraded = statuses
        .iter()
        .filter(|s| **s == ServiceStatus::Degraded)
        .count() as u64;
    let total = statuses.len() as u64;

    (healthy * 100 + degraded * 50) * MAX_BOSS_HP / (total * 100)
}
