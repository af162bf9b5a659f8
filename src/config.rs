//! Top-level configuration for the classification pipeline.

use bevy::prelude::*;
use thiserror::Error;

use crate::projection::TilingConfig;
use crate::region::ClassifierConfig;

/// Errors returned when validating a [`BuildingConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    FractionOutOfRange { name: &'static str, value: f32 },

    #[error("roof_fraction ({roof}) must not be below ground_fraction ({ground})")]
    RoofBelowGround { roof: f32, ground: f32 },

    #[error("{name} must be a positive finite number, got {value}")]
    InvalidTilingScale { name: &'static str, value: f32 },
}

/// Every tunable knob of the pipeline.
///
/// # Example
/// ```
/// use bevy_facade::config::BuildingConfig;
///
/// let config = BuildingConfig::default()
///     .with_ground_fraction(0.15)
///     .with_roof_fraction(0.85)
///     .with_wall_tiling_scale(2.5);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct BuildingConfig {
    pub classifier: ClassifierConfig,
    pub tiling: TilingConfig,
}

impl BuildingConfig {
    pub fn with_ground_fraction(mut self, fraction: f32) -> Self {
        self.classifier.ground_fraction = fraction;
        self
    }

    pub fn with_roof_fraction(mut self, fraction: f32) -> Self {
        self.classifier.roof_fraction = Some(fraction);
        self
    }

    /// Turn the upper-roof rule off, so upright faces are always walls.
    pub fn without_roof_fraction(mut self) -> Self {
        self.classifier.roof_fraction = None;
        self
    }

    pub fn with_wall_tiling_scale(mut self, scale: f32) -> Self {
        self.tiling.wall_scale = scale;
        self
    }

    pub fn with_roof_ground_tiling_scale(mut self, scale: f32) -> Self {
        self.tiling.roof_ground_scale = scale;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier.validate()?;
        self.tiling.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BuildingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_without_roof_fraction_restores_basic_mode() {
        let config = BuildingConfig::default()
            .with_roof_fraction(0.85)
            .without_roof_fraction();
        assert_eq!(config.classifier.roof_fraction, None);
        assert_eq!(config, BuildingConfig::default());
    }

    #[test]
    fn test_invalid_tiling_scale() {
        let err = BuildingConfig::default()
            .with_roof_ground_tiling_scale(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTilingScale {
                name: "roof_ground_tiling_scale",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_error_message() {
        let err = BuildingConfig::default()
            .with_ground_fraction(-0.1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "ground_fraction must be within 0.0..=1.0, got -0.1"
        );
    }
}
