//! Per-region materials.
//!
//! Each region gets a tiling texture when one is available and a flat
//! fallback color otherwise.

mod builder;
mod material;
mod region_palette;

pub use builder::PaletteBuilder;
pub use material::RegionMaterial;
pub use region_palette::{RegionPalette, RegionTexturePaths, repeat_sampler};
