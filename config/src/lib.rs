//! # Config Crate
//!
//! Centralized configuration constants for the sculpt pipeline.
//! Every literal the generators and the exporter depend on is defined here
//! so the growth rules, profile shaping and export conventions stay in one
//! place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_GROWTH_SIZE, EXPORT_UNIT_SCALE};
//!
//! // Branches thinner than the floor stop growing
//! let size = 0.25;
//! assert!(size < MIN_GROWTH_SIZE);
//!
//! // Model centimetres become millimetres on export
//! assert_eq!(2.5 * EXPORT_UNIT_SCALE, 25.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Absolute Bounds**: Growth and profile limits are absolute, not relative to a config
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
