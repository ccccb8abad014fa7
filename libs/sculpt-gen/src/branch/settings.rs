//! Branch growth configuration.

use crate::error::{check, ConfigError};
use config::constants::{MAX_BRANCHES_PER_NODE, MAX_GROWTH_DEPTH};
use serde::{Deserialize, Serialize};

/// Extents of the base slab the growth starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for BaseDimensions {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 1.0,
            depth: 5.0,
        }
    }
}

/// Tunables of the branch growth generator.
///
/// Angles are in degrees, lengths in centimetres. Fields missing from a
/// JSON document take their default value.
///
/// # Example
///
/// ```rust
/// use sculpt_gen::branch::BranchGrowthConfig;
///
/// let config: BranchGrowthConfig = serde_json::from_str(r#"{ "maxDepth": 3 }"#).unwrap();
/// assert_eq!(config.max_depth, 3);
/// assert_eq!(config.max_branches_per_node, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchGrowthConfig {
    pub base_dimensions: BaseDimensions,
    pub max_depth: u32,
    pub max_branches_per_node: u32,
    pub branch_probability: f64,
    pub min_cubes_before_split: u32,
    pub split_probability: f64,
    pub initial_size: f64,
    pub size_decay: f64,
    pub size_variation: f64,
    pub length_variation: f64,
    pub base_angle_deg: f64,
    pub angle_variation_deg: f64,
    pub twist_variation_deg: f64,
    pub position_variation: f64,
    /// Treat a drawn child count of two like a split: both children grow
    /// and restart their split counter.
    pub pair_always_splits: bool,
}

impl Default for BranchGrowthConfig {
    fn default() -> Self {
        Self {
            base_dimensions: BaseDimensions::default(),
            max_depth: 5,
            max_branches_per_node: 3,
            branch_probability: 0.7,
            min_cubes_before_split: 2,
            split_probability: 0.4,
            initial_size: 3.0,
            size_decay: 0.9,
            size_variation: 0.2,
            length_variation: 0.4,
            base_angle_deg: 35.0,
            angle_variation_deg: 25.0,
            twist_variation_deg: 30.0,
            position_variation: 0.0,
            pair_always_splits: false,
        }
    }
}

impl BranchGrowthConfig {
    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.base_dimensions;
        check::positive("baseDimensions.width", base.width)?;
        check::positive("baseDimensions.height", base.height)?;
        check::positive("baseDimensions.depth", base.depth)?;

        check::at_most("maxDepth", self.max_depth as f64, MAX_GROWTH_DEPTH as f64)?;
        check::at_least("maxBranchesPerNode", self.max_branches_per_node as f64, 1.0)?;
        check::at_most(
            "maxBranchesPerNode",
            self.max_branches_per_node as f64,
            MAX_BRANCHES_PER_NODE as f64,
        )?;

        check::unit_interval("branchProbability", self.branch_probability)?;
        check::unit_interval("splitProbability", self.split_probability)?;

        check::positive("initialSize", self.initial_size)?;
        check::positive("sizeDecay", self.size_decay)?;
        check::at_most("sizeDecay", self.size_decay, 1.0)?;
        check::unit_interval("sizeVariation", self.size_variation)?;
        check::unit_interval("lengthVariation", self.length_variation)?;

        check::finite("baseAngleDeg", self.base_angle_deg)?;
        check::non_negative("angleVariationDeg", self.angle_variation_deg)?;
        check::non_negative("twistVariationDeg", self.twist_variation_deg)?;
        check::non_negative("positionVariation", self.position_variation)?;

        Ok(())
    }
}
