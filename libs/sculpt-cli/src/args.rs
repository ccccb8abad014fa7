//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use config::constants::{DEFAULT_SEGMENTS, EXPORT_UNIT_SCALE, NORMAL_EPSILON};
use sculpt_mesh::AxisRemap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sculpt")]
#[command(about = "Procedural sculpture generator writing ASCII STL")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grow a coral-like structure from boxes, spheres and cylinders
    Coral {
        #[command(flatten)]
        export: ExportArgs,

        /// Random seed (operating-system entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Export each primitive as its own shell instead of a union
        #[arg(long)]
        separate: bool,

        /// Tessellation segments per primitive
        #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
        segments: u32,
    },

    /// Revolve noisy profile curves into a vessel
    Vessel {
        #[command(flatten)]
        export: ExportArgs,

        /// Noise seed (overrides the configuration file)
        #[arg(long)]
        seed: Option<u32>,
    },
}

/// Options shared by every generator.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// JSON configuration; missing fields keep their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output .stl path (defaults to <name>.stl)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Solid name written to the STL header
    #[arg(long)]
    pub name: Option<String>,

    /// Model-to-output unit scale (centimetres to millimetres by default)
    #[arg(long, default_value_t = EXPORT_UNIT_SCALE)]
    pub scale: f64,

    /// Axis remap: identity, swap-yz or y-up-to-z-up
    #[arg(long, default_value_t = AxisRemap::SwapYZ)]
    pub axes: AxisRemap,

    /// Facets with an edge or altitude shorter than this (model units) are dropped
    #[arg(long, default_value_t = NORMAL_EPSILON)]
    pub tolerance: f64,
}
