//! # Branch Growth
//!
//! Grows a coral-like structure as a flat list of placed primitives.
//!
//! Growth starts on top of a box slab and advances one primitive at a time.
//! After each primitive the branch may continue, fan out into several
//! children, or split into exactly two. Every child shrinks by
//! `size_decay`; a branch stops when it reaches `max_depth` or its size
//! falls below [`MIN_GROWTH_SIZE`].
//!
//! ## Draw order
//!
//! Results are a pure function of the configuration and the sequence of
//! draws taken from the [`RandomSource`]. Per primitive the draws are:
//!
//! 1. overlap ratio, length jitter, size jitter
//! 2. horizontal jitter along X, then along Z (always drawn, even at zero spread)
//! 3. primitive kind, then the three rotation angles
//! 4. cylinder stretch, for cylinders only
//! 5. split trial (only once the branch has enough primitives), else child count
//!
//! then for each child, in order: the acceptance trial, and when accepted
//! the growth angle, twist and rotation, followed by that child's whole
//! subtree before the next sibling is considered.

pub mod geometry;
pub mod settings;


pub use self::settings::{BaseDimensions, BranchGrowthConfig};

use crate::error::{ConfigError, GenerateError};
use crate::random::RandomSource;
use ::config::constants::{
    CYLINDER_STRETCH_MAX, CYLINDER_STRETCH_MIN, MIN_GROWTH_SIZE, OVERLAP_RATIO_MAX,
    OVERLAP_RATIO_MIN,
};
use glam::DVec3;
use sculpt_mesh::{Primitive, PrimitiveKind, Shape};
use tracing::{debug, trace};

/// Recursion context of one growth step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchState {
    pub position: DVec3,
    /// Unit growth direction.
    pub direction: DVec3,
    /// Nominal size before jitter.
    pub size: f64,
    pub depth: u32,
    pub base_rotation_deg: f64,
    /// Primitives emitted since the branch last split.
    pub cubes_in_branch: u32,
}

impl BranchState {
    /// State the growth starts from: on top of the base, pointing up.
    pub fn initial(config: &BranchGrowthConfig) -> Self {
        Self {
            position: DVec3::new(0.0, config.base_dimensions.height, 0.0),
            direction: DVec3::Y,
            size: config.initial_size,
            depth: 0,
            base_rotation_deg: 0.0,
            cubes_in_branch: 0,
        }
    }

    /// Whether this state ends its branch without emitting anything.
    pub fn is_terminal(&self, max_depth: u32) -> bool {
        self.depth >= max_depth || self.size < MIN_GROWTH_SIZE
    }
}

/// Where a generated primitive came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Origin {
    /// The slab growth starts from.
    Base,
    /// A primitive grown at `depth`.
    Branch {
        depth: u32,
        nominal_size: f64,
        actual_size: f64,
    },
}

/// A primitive together with the step that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPrimitive {
    pub primitive: Primitive,
    pub origin: Origin,
}

/// Pending work on the growth stack.
enum Frame {
    /// Emit a primitive for this state, then decide its children.
    Grow(BranchState),
    /// Children still to be considered after a primitive at `parent`.
    Children {
        parent: BranchState,
        remaining: u32,
        forced_split: bool,
    },
}

/// Stochastic branch-growth generator.
///
/// # Example
///
/// ```rust
/// use sculpt_gen::branch::{BranchGrowthConfig, BranchGrowthGenerator};
/// use sculpt_gen::random::RngSource;
///
/// let generator = BranchGrowthGenerator::new(BranchGrowthConfig::default()).unwrap();
/// let primitives = generator.generate(&mut RngSource::seeded(42)).unwrap();
/// assert!(!primitives.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BranchGrowthGenerator {
    config: BranchGrowthConfig,
}

impl BranchGrowthGenerator {
    /// Validates `config` and wraps it.
    pub fn new(config: BranchGrowthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BranchGrowthConfig {
        &self.config
    }

    /// Grows a structure; the base slab comes first.
    pub fn generate(&self, rng: impl RandomSource) -> Result<Vec<Primitive>, GenerateError> {
        Ok(self
            .generate_traced(rng)?
            .into_iter()
            .map(|traced| traced.primitive)
            .collect())
    }

    /// Like [`generate`](Self::generate), keeping each primitive's depth and size.
    ///
    /// After each primitive a split trial runs once the branch has emitted
    /// `min_cubes_before_split` primitives. A successful trial yields two
    /// children that always grow and reset their counter. Otherwise the
    /// child count is drawn from `1..=max_branches_per_node` and each child
    /// must pass `branch_probability`; a drawn count of two is an ordinary
    /// count unless `pair_always_splits` is set, in which case it behaves
    /// like a split.
    pub fn generate_traced(&self, mut rng: impl RandomSource) -> Result<Vec<TracedPrimitive>, GenerateError> {
        let config = &self.config;
        let mut out = vec![self.base()];

        let mut stack = vec![Frame::Grow(BranchState::initial(config))];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Grow(state) => {
                    if state.is_terminal(config.max_depth) {
                        trace!(depth = state.depth, size = state.size, "branch ends");
                        continue;
                    }
                    let (traced, parent) = self.grow(&state, &mut rng)?;
                    out.push(traced);

                    let split = parent.cubes_in_branch >= config.min_cubes_before_split
                        && rng.chance(config.split_probability)?;
                    let remaining = if split {
                        2
                    } else {
                        rng.index(config.max_branches_per_node as usize)? as u32 + 1
                    };
                    let forced_split = split || (config.pair_always_splits && remaining == 2);

                    stack.push(Frame::Children {
                        parent,
                        remaining,
                        forced_split,
                    });
                }
                Frame::Children {
                    parent,
                    remaining,
                    forced_split,
                } => {
                    if remaining == 0 {
                        continue;
                    }
                    // Siblings resume only after this child's subtree is done
                    if remaining > 1 {
                        stack.push(Frame::Children {
                            parent,
                            remaining: remaining - 1,
                            forced_split,
                        });
                    }

                    let accepted = rng.chance(config.branch_probability)?;
                    if accepted || forced_split {
                        let child = self.child(&parent, forced_split, &mut rng)?;
                        stack.push(Frame::Grow(child));
                    }
                }
            }
        }

        debug!(
            primitives = out.len(),
            max_depth = config.max_depth,
            "grew branch structure"
        );
        Ok(out)
    }

    fn base(&self) -> TracedPrimitive {
        let base = self.config.base_dimensions;
        TracedPrimitive {
            primitive: Primitive::new(
                Shape::Box {
                    width: base.width,
                    height: base.height,
                    depth: base.depth,
                },
                DVec3::new(0.0, base.height / 2.0, 0.0),
                DVec3::ZERO,
            ),
            origin: Origin::Base,
        }
    }

    /// Emits one primitive and returns the state its children grow from.
    fn grow(
        &self,
        state: &BranchState,
        rng: &mut impl RandomSource,
    ) -> Result<(TracedPrimitive, BranchState), GenerateError> {
        let config = &self.config;

        let overlap = rng.uniform(OVERLAP_RATIO_MIN, OVERLAP_RATIO_MAX)?;
        let length = geometry::segment_length(state.size, overlap, rng.symmetric(config.length_variation)?);
        let actual_size = geometry::actual_size(state.size, rng.symmetric(config.size_variation)?);

        let spread = geometry::jitter_spread(config.position_variation, state.size);
        let jitter_x = rng.symmetric(spread)?;
        let jitter_z = rng.symmetric(spread)?;
        let position = geometry::advance(state.position, state.direction, length, jitter_x, jitter_z);

        let kind = PrimitiveKind::ALL[rng.index(PrimitiveKind::ALL.len())?];
        let rotation = DVec3::new(
            state.base_rotation_deg + rng.symmetric(config.twist_variation_deg)?,
            rng.symmetric(config.angle_variation_deg)?,
            rng.symmetric(config.angle_variation_deg)?,
        );
        let stretch = match kind {
            PrimitiveKind::Cylinder => rng.uniform(CYLINDER_STRETCH_MIN, CYLINDER_STRETCH_MAX)?,
            _ => 1.0,
        };

        let primitive = Primitive::new(geometry::shape_for(kind, actual_size, stretch), position, rotation);
        trace!(depth = state.depth, %kind, size = actual_size, "emitted primitive");

        let traced = TracedPrimitive {
            primitive,
            origin: Origin::Branch {
                depth: state.depth,
                nominal_size: state.size,
                actual_size,
            },
        };
        let parent = BranchState {
            position,
            cubes_in_branch: state.cubes_in_branch + 1,
            ..*state
        };
        Ok((traced, parent))
    }

    /// Samples the state of an accepted child.
    fn child(
        &self,
        parent: &BranchState,
        forced_split: bool,
        rng: &mut impl RandomSource,
    ) -> Result<BranchState, GenerateError> {
        let config = &self.config;

        let angle = config.base_angle_deg + rng.symmetric(config.angle_variation_deg)?;
        let twist = rng.uniform(0.0, 360.0)?;
        let rotation = parent.base_rotation_deg + rng.symmetric(config.twist_variation_deg)?;

        Ok(BranchState {
            position: parent.position,
            direction: geometry::growth_direction(angle, twist),
            size: parent.size * config.size_decay,
            depth: parent.depth + 1,
            base_rotation_deg: rotation,
            cubes_in_branch: if forced_split { 0 } else { parent.cubes_in_branch },
        })
    }
}
