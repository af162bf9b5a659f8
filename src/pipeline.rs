//! Parse → classify → project → batch, in one call.

use std::path::Path;

use bevy::log::info;

use crate::config::{BuildingConfig, ConfigError};
use crate::facet::{ParsedMesh, load_facets, parse_facets};
use crate::mesh::RegionBatches;
use crate::projection::project;
use crate::region::{RegionLabel, classify};

/// A validated pipeline configuration.
///
/// Construction checks the configuration once; running it cannot fail.
/// The pipeline holds no state between runs, so the same input always
/// produces identical batches.
///
/// # Example
/// ```
/// use bevy_facade::prelude::*;
///
/// let pipeline = BuildingPipeline::new(BuildingConfig::default()).unwrap();
/// let batches = pipeline.run_str("facet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendfacet\n");
///
/// assert_eq!(batches.get(RegionLabel::Ground).len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BuildingPipeline {
    config: BuildingConfig,
}

impl BuildingPipeline {
    pub fn new(config: BuildingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classify and project an already parsed mesh.
    pub fn process(&self, mesh: &ParsedMesh) -> RegionBatches {
        let classified = classify(&mesh.triangles, &mesh.height_range, &self.config.classifier);
        let batches = RegionBatches::from(project(&classified, &self.config.tiling));

        info!(
            "Classified {} triangles: {} {}, {} {}, {} {}",
            batches.total_triangles(),
            batches.get(RegionLabel::Wall).len(),
            RegionLabel::Wall,
            batches.get(RegionLabel::Roof).len(),
            RegionLabel::Roof,
            batches.get(RegionLabel::Ground).len(),
            RegionLabel::Ground,
        );

        batches
    }

    pub fn run<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> RegionBatches {
        self.process(&parse_facets(lines))
    }

    pub fn run_str(&self, source: &str) -> RegionBatches {
        self.run(source.lines())
    }

    /// Load a facet file and process it.
    ///
    /// A missing or unreadable file yields three empty batches.
    pub fn run_file(&self, path: impl AsRef<Path>) -> RegionBatches {
        self.process(&load_facets(path))
    }
}
