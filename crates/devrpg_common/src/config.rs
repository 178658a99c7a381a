//! Engine configuration.
//!
//! All tunable constants in one place: the leveling curve and the tier
//! thresholds. Loaded from TOML and validated eagerly, so a broken
//! configuration fails at startup instead of misclassifying mid-run.

use crate::error::{EngineError, Result};
use crate::leveling::LevelCurve;
use crate::tier::TierThresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static configuration for the derivation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub curve: LevelCurve,
    pub thresholds: TierThresholds,
}

impl EngineConfig {
    /// Load from a TOML file and validate.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::InvalidConfiguration(format!(
                "failed to read {}: {e}",
                path.display()
            ))
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| {
            EngineError::InvalidConfiguration(format!(
                "failed to parse {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every constant before the engine is used.
    pub fn validate(&self) -> Result<()> {
        self.curve.validate()?;
        self.thresholds.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_reference_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.curve.base_xp, 100);
        assert_eq!(config.curve.growth_factor, 1.5);
        assert_eq!(config.thresholds.stable_min, 80);
        assert_eq!(config.thresholds.warning_min, 50);
        assert_eq!(config.thresholds.critical_min, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[curve]\nbase_xp = 200\ngrowth_factor = 2.0").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.curve.base_xp, 200);
        assert_eq!(config.thresholds, TierThresholds::default());
    }

    #[test]
    fn bad_threshold_order_fails_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[thresholds]\nstable_min = 40\nwarning_min = 50\ncritical_min = 30"
        )
        .unwrap();
        let err = EngineConfig::load(file.path()).unwrap_err();
        assert_eq!(err.code(), "invalid_configuration");
    }

    #[test]
    fn missing_file_fails_with_configuration_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/devrpg.toml")).unwrap_err();
        assert_eq!(err.code(), "invalid_configuration");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = EngineConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
