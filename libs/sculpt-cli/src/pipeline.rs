//! Generate, combine and write.

use crate::args::{Cli, Commands, ExportArgs};
use anyhow::{Context, Result};
use config::constants::{GlobalConfig, DEFAULT_SEGMENTS};
use sculpt_gen::{
    BranchGrowthConfig, BranchGrowthGenerator, RevolutionConfig, RevolutionProfileGenerator,
    RngSource,
};
use sculpt_mesh::{
    combine_or_separate, BspUnion, CoordinateTransform, ExportSummary, Solid, SolidCombiner,
    StlExporter,
};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads a JSON configuration, or the defaults when no path is given.
pub fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Grows a coral and unions it, unless `separate` is set.
pub fn build_coral(
    config: BranchGrowthConfig,
    seed: Option<u64>,
    separate: bool,
    settings: &GlobalConfig,
) -> Result<Solid> {
    let generator = BranchGrowthGenerator::new(config).context("Invalid coral configuration")?;

    let rng = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy()?,
    };
    let primitives = generator.generate(rng)?;
    info!(primitives = primitives.len(), seed, "grew coral");

    let union = BspUnion::new(settings.segments);
    let combiner: Option<&dyn SolidCombiner> = if separate { None } else { Some(&union) };
    let solid = combine_or_separate(&primitives, settings.segments, combiner)?;
    Ok(solid)
}

/// Revolves a vessel; `seed` replaces the configured noise seed.
pub fn build_vessel(mut config: RevolutionConfig, seed: Option<u32>) -> Result<Solid> {
    if let Some(seed) = seed {
        config.noise_seed = seed;
    }
    let generator = RevolutionProfileGenerator::new(config).context("Invalid vessel configuration")?;
    let mesh = generator.generate()?;
    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "revolved vessel"
    );
    Ok(Solid::Mesh(mesh))
}

/// Writes `solid` as ASCII STL according to `args` and returns the path
/// written with the facet summary. Facets below `settings.tolerance` are
/// left out.
pub fn write_solid(
    solid: &Solid,
    args: &ExportArgs,
    settings: &GlobalConfig,
    fallback_name: &str,
) -> Result<(PathBuf, ExportSummary)> {
    let transform = CoordinateTransform::new(args.scale, args.axes)?;
    let exporter = StlExporter::new(args.name.as_deref().unwrap_or(fallback_name))
        .with_transform(transform)
        .with_tolerance(settings.tolerance);
    let path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.stl", exporter.name())));

    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let summary = exporter
        .write(solid, BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), facets = summary.facets, "wrote solid");
    Ok((path, summary))
}

/// Runs one parsed command line.
pub fn run(cli: Cli) -> Result<PathBuf> {
    let (solid, export, settings, name) = match cli.command {
        Commands::Coral {
            export,
            seed,
            separate,
            segments,
        } => {
            let settings = GlobalConfig::new(export.tolerance, segments).context("Invalid mesh settings")?;
            let config = load_config(export.config.as_deref())?;
            (build_coral(config, seed, separate, &settings)?, export, settings, "coral")
        }
        Commands::Vessel { export, seed } => {
            // Segments only shape coral primitives
            let settings =
                GlobalConfig::new(export.tolerance, DEFAULT_SEGMENTS).context("Invalid mesh settings")?;
            let config = load_config(export.config.as_deref())?;
            (build_vessel(config, seed)?, export, settings, "vessel")
        }
    };

    let (path, summary) = write_solid(&solid, &export, &settings, name)?;
    info!(
        path = %path.display(),
        facets = summary.facets,
        skipped = summary.skipped,
        "done"
    );
    Ok(path)
}
