//! Revolution profile configuration.

use crate::error::{check, ConfigError};
use ::config::constants::{MAX_CURVES, MAX_ROTATIONS, MAX_SEGMENTS};
use serde::{Deserialize, Serialize};

/// Tunables of the revolution profile generator.
///
/// Lengths are in centimetres. `twist` is in full turns over the height.
///
/// # Example
///
/// ```rust
/// use sculpt_gen::revolution::RevolutionConfig;
///
/// let config: RevolutionConfig =
///     serde_json::from_str(r#"{ "segments": 1, "rotations": 4, "curveCount": 1 }"#).unwrap();
/// assert_eq!(config.base_radius, 5.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevolutionConfig {
    pub base_radius: f64,
    /// Carried for presets; the profile formula does not read it.
    pub base_height: f64,
    pub height: f64,
    /// Height subdivisions; rings = `segments + 1`.
    pub segments: u32,
    /// Angular subdivisions; steps per ring = `rotations + 1`.
    pub rotations: u32,
    /// Number of independent profile curves spread around the axis.
    pub curve_count: u32,
    pub noise_scale: f64,
    pub noise_strength: f64,
    /// Reserved.
    pub radius_variation: f64,
    pub twist: f64,
    pub noise_seed: u32,
}

impl Default for RevolutionConfig {
    fn default() -> Self {
        Self {
            base_radius: 5.0,
            base_height: 2.0,
            height: 15.0,
            segments: 32,
            rotations: 64,
            curve_count: 5,
            noise_scale: 2.0,
            noise_strength: 3.0,
            radius_variation: 0.5,
            twist: 0.25,
            noise_seed: 0,
        }
    }
}

impl RevolutionConfig {
    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check::positive("baseRadius", self.base_radius)?;
        check::non_negative("baseHeight", self.base_height)?;
        check::positive("height", self.height)?;

        check::at_least("segments", self.segments as f64, 1.0)?;
        check::at_most("segments", self.segments as f64, MAX_SEGMENTS as f64)?;
        check::at_least("rotations", self.rotations as f64, 1.0)?;
        check::at_most("rotations", self.rotations as f64, MAX_ROTATIONS as f64)?;
        check::at_least("curveCount", self.curve_count as f64, 1.0)?;
        check::at_most("curveCount", self.curve_count as f64, MAX_CURVES as f64)?;

        check::non_negative("noiseScale", self.noise_scale)?;
        check::non_negative("noiseStrength", self.noise_strength)?;
        check::non_negative("radiusVariation", self.radius_variation)?;
        check::finite("twist", self.twist)?;

        Ok(())
    }
}
