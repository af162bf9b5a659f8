//! # bevy_facade
//!
//! Splits a triangulated building, read from an ASCII facet (STL) file, into
//! walls, roof and ground, and gives each region its own planar texture
//! projection and static mesh.
//!
//! ## Features
//!
//! - Scale-independent classification from normal orientation and height fractions
//! - Optional upper-roof rule for steep pitched roofs
//! - Per-triangle least-stretch projection plane for walls
//! - Top-down projection for roof and ground
//! - One triangle-list [`Mesh`](bevy::mesh::Mesh) per region, with per-region
//!   textures or fallback colors
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_facade::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .insert_resource(
//!             BuildingSource::new("assets/house.stl").with_textures(RegionTexturePaths::new(
//!                 "textures/wall.jpg",
//!                 "textures/roof.jpg",
//!                 "textures/grass.jpg",
//!             )),
//!         )
//!         .insert_resource(BuildingConfig::default().with_roof_fraction(0.85))
//!         .add_plugins(BuildingRegionsPlugin)
//!         .run();
//! }
//! ```
//!
//! The pipeline can also be used without an [`App`](bevy::app::App):
//!
//! ```
//! use bevy_facade::prelude::*;
//!
//! let pipeline = BuildingPipeline::new(BuildingConfig::default()).unwrap();
//! let batches = pipeline.run_file("missing.stl");
//! assert!(batches.is_empty());
//! ```

pub mod config;
pub mod facet;
pub mod mesh;
pub mod palette;
pub mod pipeline;
mod plugin;
pub mod projection;
pub mod region;
pub mod systems;

pub mod prelude {
    pub use crate::config::{BuildingConfig, ConfigError};
    pub use crate::facet::{HeightRange, ParsedMesh, Triangle, load_facets, parse_facets};
    pub use crate::mesh::{RegionBatch, RegionBatches, RegionMeshBuilder};
    pub use crate::palette::{PaletteBuilder, RegionMaterial, RegionPalette, RegionTexturePaths};
    pub use crate::pipeline::BuildingPipeline;
    pub use crate::plugin::BuildingRegionsPlugin;
    pub use crate::projection::{ProjectedTriangle, ProjectedVertex, ProjectionPlane, TilingConfig};
    pub use crate::region::{ClassifierConfig, RegionLabel, classify};
    pub use crate::systems::{BuildingRoot, BuildingSource, BuildingSummary, BuildingSystems};
}
