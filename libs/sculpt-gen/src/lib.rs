//! # Sculpt Generators
//!
//! Procedural generators for printable sculptures.
//!
//! - [`branch`]: stochastic branch growth producing a list of placed
//!   [`Primitive`](sculpt_mesh::Primitive)s (coral-like structures).
//! - [`revolution`]: noise-driven profile curves revolved into a closed
//!   [`Mesh`](sculpt_mesh::Mesh) (vessels).
//!
//! Every configuration is validated before any work starts. Branch growth
//! takes its randomness from an explicit [`RandomSource`], so a seed or a
//! scripted draw sequence reproduces a run exactly.
//!
//! ## Example
//!
//! ```rust
//! use sculpt_gen::{BranchGrowthConfig, BranchGrowthGenerator, RngSource};
//!
//! let config = BranchGrowthConfig { max_depth: 3, ..Default::default() };
//! let generator = BranchGrowthGenerator::new(config).unwrap();
//!
//! let a = generator.generate(RngSource::seeded(5)).unwrap();
//! let b = generator.generate(RngSource::seeded(5)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod branch;
pub mod error;
pub mod noise_field;
pub mod random;
pub mod revolution;

pub use branch::{BranchGrowthConfig, BranchGrowthGenerator, Origin, TracedPrimitive};
pub use error::{ConfigError, GenerateError};
pub use noise_field::NoiseField;
pub use random::{DrawSequence, RandomSource, RandomSourceError, RngSource};
pub use revolution::{RevolutionConfig, RevolutionProfileGenerator};
