//! # Generator Errors
//!
//! Configuration errors are raised by `validate()` before any generation
//! work. Everything that can go wrong during a run is a [`GenerateError`].

use crate::random::RandomSourceError;
use sculpt_mesh::MeshError;
use thiserror::Error;

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value must lie in a closed or half-open interval.
    #[error("{field} = {value} is outside {range}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    /// NaN or infinite value.
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    /// Value below its lower bound.
    #[error("{field} = {value} is below the minimum of {min}")]
    TooSmall {
        field: &'static str,
        value: f64,
        min: f64,
    },

    /// Value above its upper bound.
    #[error("{field} = {value} exceeds the maximum of {max}")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

/// Errors that can occur while running a generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Randomness source failed: {0}")]
    Random(#[from] RandomSourceError),

    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

/// Field checks shared by the generator configurations.
pub(crate) mod check {
    use super::ConfigError;

    pub fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConfigError::NotFinite { field })
        }
    }

    pub fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if finite(field, value)? <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field,
                value,
                range: "(0, inf)",
            });
        }
        Ok(())
    }

    pub fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
        at_least(field, value, 0.0)
    }

    pub fn at_least(field: &'static str, value: f64, min: f64) -> Result<(), ConfigError> {
        if finite(field, value)? < min {
            return Err(ConfigError::TooSmall { field, value, min });
        }
        Ok(())
    }

    pub fn at_most(field: &'static str, value: f64, max: f64) -> Result<(), ConfigError> {
        if finite(field, value)? > max {
            return Err(ConfigError::TooLarge { field, value, max });
        }
        Ok(())
    }

    pub fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&finite(field, value)?) {
            return Err(ConfigError::OutOfRange {
                field,
                value,
                range: "[0, 1]",
            });
        }
        Ok(())
    }
}
