//! # Sculpt CLI
//!
//! Library half of the `sculpt` binary: argument definitions and the
//! generate, combine and write pipeline behind each subcommand.
//!
//! ```text
//! sculpt coral --seed 42 -o coral.stl
//! sculpt vessel --config vase.json --axes y-up-to-z-up
//! ```

pub mod args;
pub mod pipeline;

pub use args::{Cli, Commands, ExportArgs};
pub use pipeline::{build_coral, build_vessel, load_config, run, write_solid};
