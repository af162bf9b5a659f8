//! Builder for constructing region palettes.

use bevy::prelude::*;

use super::material::RegionMaterial;
use super::region_palette::RegionPalette;
use crate::region::RegionLabel;

/// Builder for creating [`RegionPalette`] instances.
///
/// Regions that are never mentioned keep their default untextured material.
///
/// # Example
///
/// ```ignore
/// use bevy_facade::prelude::*;
///
/// let palette = PaletteBuilder::new()
///     .with_texture(RegionLabel::Wall, asset_server.load("textures/brick.jpg"))
///     .with_texture(RegionLabel::Roof, asset_server.load("textures/tiles.jpg"))
///     .with_fallback_color(RegionLabel::Ground, Color::srgb(0.3, 0.6, 0.2))
///     .build();
/// ```
#[derive(Default)]
pub struct PaletteBuilder {
    palette: RegionPalette,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a region's material entirely.
    pub fn with_material(mut self, label: RegionLabel, material: RegionMaterial) -> Self {
        self.palette.set(label, material);
        self
    }

    pub fn with_texture(mut self, label: RegionLabel, texture: Handle<Image>) -> Self {
        self.palette.get_mut(label).texture = Some(texture);
        self
    }

    pub fn with_fallback_color(mut self, label: RegionLabel, color: Color) -> Self {
        self.palette.get_mut(label).fallback_color = color;
        self
    }

    pub fn with_roughness(mut self, label: RegionLabel, roughness: f32) -> Self {
        self.palette.get_mut(label).perceptual_roughness = roughness;
        self
    }

    pub fn build(self) -> RegionPalette {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let palette = PaletteBuilder::new()
            .with_texture(RegionLabel::Wall, Handle::default())
            .with_fallback_color(RegionLabel::Ground, Color::BLACK)
            .build();

        assert!(palette.get(RegionLabel::Wall).has_texture());
        assert!(!palette.get(RegionLabel::Roof).has_texture());
        assert_eq!(palette.get(RegionLabel::Ground).fallback_color, Color::BLACK);
    }

    #[test]
    fn test_builder_material_replaces() {
        let palette = PaletteBuilder::new()
            .with_material(RegionLabel::Roof, RegionMaterial::new("slate").with_roughness(0.4))
            .with_roughness(RegionLabel::Wall, 0.7)
            .build();

        assert_eq!(palette.get(RegionLabel::Roof).name, "slate");
        assert_eq!(palette.get(RegionLabel::Roof).perceptual_roughness, 0.4);
        assert_eq!(palette.get(RegionLabel::Wall).perceptual_roughness, 0.7);
    }
}
