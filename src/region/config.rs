//! Classifier thresholds.

use crate::config::ConfigError;

/// Default fraction of the model height below which flat faces count as ground.
pub const DEFAULT_GROUND_FRACTION: f32 = 0.20;

/// Suggested fraction for the upper-roof rule when it is enabled.
pub const DEFAULT_ROOF_FRACTION: f32 = 0.85;

/// Faces whose normal has a larger absolute Z component than this are flat.
///
/// 0.5 is 60 degrees away from vertical.
pub const HORIZONTALITY_CUTOFF: f32 = 0.5;

/// Height-fraction thresholds used by [`classify`](super::classify).
///
/// Both fractions are relative to the model's own height range, so the same
/// configuration works for meshes of any size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Flat faces whose average height is below this fraction are ground,
    /// the rest are roof.
    ///
    /// Default: 0.20
    pub ground_fraction: f32,

    /// Upright faces whose average height is at or above this fraction are
    /// reclassified as roof, catching steep pitched roofs near the apex.
    ///
    /// `None` keeps every upright face a wall.
    /// Default: `None`
    pub roof_fraction: Option<f32>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ground_fraction: DEFAULT_GROUND_FRACTION,
            roof_fraction: None,
        }
    }
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ground_fraction(mut self, fraction: f32) -> Self {
        self.ground_fraction = fraction;
        self
    }

    /// Enable the upper-roof rule at the given fraction.
    pub fn with_roof_fraction(mut self, fraction: f32) -> Self {
        self.roof_fraction = Some(fraction);
        self
    }

    /// Disable the upper-roof rule.
    pub fn without_roof_fraction(mut self) -> Self {
        self.roof_fraction = None;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("ground_fraction", self.ground_fraction)?;

        if let Some(roof) = self.roof_fraction {
            check_fraction("roof_fraction", roof)?;
            if roof < self.ground_fraction {
                return Err(ConfigError::RoofBelowGround {
                    roof,
                    ground: self.ground_fraction,
                });
            }
        }

        Ok(())
    }
}

fn check_fraction(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::FractionOutOfRange { name, value });
    }
    Ok(())
}
