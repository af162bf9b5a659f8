//! Per-region material description.

use bevy::prelude::*;

use crate::region::RegionLabel;

/// How one region is shaded.
///
/// When `texture` is set the region is drawn with it, tinted white. Without a
/// texture the region falls back to a flat `fallback_color`, so a building with
/// missing image files is still readable.
#[derive(Clone, Debug)]
pub struct RegionMaterial {
    /// Display name for debugging and tooling.
    pub name: String,

    /// Tiling texture. Should use a repeating sampler, since projected UVs
    /// run well outside 0..1.
    pub texture: Option<Handle<Image>>,

    /// Color used when no texture is set.
    pub fallback_color: Color,

    /// Default: 0.9
    pub perceptual_roughness: f32,

    /// Render both faces. Facet winding is not repaired, so this defaults to `true`.
    pub double_sided: bool,
}

impl Default for RegionMaterial {
    fn default() -> Self {
        Self {
            name: String::new(),
            texture: None,
            fallback_color: Color::srgb(0.7, 0.7, 0.7),
            perceptual_roughness: 0.9,
            double_sided: true,
        }
    }
}

impl RegionMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Default material for a region: untextured, with that region's fallback color.
    pub fn for_region(label: RegionLabel) -> Self {
        let fallback_color = match label {
            RegionLabel::Wall => Color::srgb(0.7, 0.7, 0.7),
            RegionLabel::Roof => Color::srgb(0.8, 0.4, 0.4),
            RegionLabel::Ground => Color::srgb(0.2, 0.8, 0.2),
        };
        Self::new(label.name()).with_fallback_color(fallback_color)
    }

    pub fn with_texture(mut self, texture: Handle<Image>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_fallback_color(mut self, color: Color) -> Self {
        self.fallback_color = color;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.perceptual_roughness = roughness;
        self
    }

    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn to_standard_material(&self) -> StandardMaterial {
        let base_color = if self.texture.is_some() {
            Color::WHITE
        } else {
            self.fallback_color
        };

        StandardMaterial {
            base_color,
            base_color_texture: self.texture.clone(),
            perceptual_roughness: self.perceptual_roughness,
            double_sided: self.double_sided,
            cull_mode: if self.double_sided {
                None
            } else {
                StandardMaterial::default().cull_mode
            },
            ..default()
        }
    }

    /// Drop the texture from an already created material and shade it with
    /// `fallback_color` instead.
    pub fn apply_fallback(&self, material: &mut StandardMaterial) {
        material.base_color = self.fallback_color;
        material.base_color_texture = None;
    }
}
