//! Error types for the Dev-RPG derivation engine.

use thiserror::Error;

/// Failures the engine can report.
///
/// The engine performs no I/O of its own, so every failure is either a
/// caller mistake (`InvalidArgument`) or a bad static configuration
/// (`InvalidConfiguration`). Configuration is checked eagerly at load
/// time so a broken threshold ordering can never misclassify mid-run.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Stable machine-readable code for each error kind.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidArgument(_) => "invalid_argument",
            EngineError::InvalidConfiguration(_) => "invalid_configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let arg = EngineError::InvalidArgument("x".into());
        let cfg = EngineError::InvalidConfiguration("y".into());
        assert_ne!(arg.code(), cfg.code());
    }

    #[test]
    fn display_includes_detail() {
        let err = EngineError::InvalidArgument("level must be >= 1".into());
        assert!(err.to_string().contains("level must be >= 1"));
    }
}
