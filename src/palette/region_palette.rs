//! One material per region.

use bevy::image::{
    ImageAddressMode, ImageFilterMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor,
};
use bevy::prelude::*;

use super::material::RegionMaterial;
use crate::region::RegionLabel;

/// Materials for the wall, roof and ground batches.
#[derive(Resource, Clone, Debug)]
pub struct RegionPalette {
    materials: [RegionMaterial; 3],
}

impl Default for RegionPalette {
    fn default() -> Self {
        Self {
            materials: RegionLabel::ALL.map(RegionMaterial::for_region),
        }
    }
}

impl RegionPalette {
    pub fn get(&self, label: RegionLabel) -> &RegionMaterial {
        &self.materials[label.index()]
    }

    pub fn get_mut(&mut self, label: RegionLabel) -> &mut RegionMaterial {
        &mut self.materials[label.index()]
    }

    pub fn set(&mut self, label: RegionLabel, material: RegionMaterial) {
        self.materials[label.index()] = material;
    }

    /// Number of regions that have a texture assigned.
    pub fn textured_count(&self) -> usize {
        self.materials.iter().filter(|m| m.has_texture()).count()
    }

    /// Load one texture per region from `paths`, with a repeating sampler.
    ///
    /// Regions whose path is `None` keep their fallback color. Loading is
    /// asynchronous: a path that later fails to load is switched back to the
    /// fallback by [`apply_texture_fallbacks`](crate::systems::apply_texture_fallbacks).
    pub fn load_textures(mut self, asset_server: &AssetServer, paths: &RegionTexturePaths) -> Self {
        for label in RegionLabel::ALL {
            if let Some(path) = paths.get(label) {
                let handle = asset_server.load_with_settings(
                    path.to_owned(),
                    |settings: &mut ImageLoaderSettings| settings.sampler = repeat_sampler(),
                );
                self.get_mut(label).texture = Some(handle);
            }
        }
        self
    }
}

/// Asset paths of the per-region textures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionTexturePaths {
    pub wall: Option<String>,
    pub roof: Option<String>,
    pub ground: Option<String>,
}

impl RegionTexturePaths {
    pub fn new(
        wall: impl Into<String>,
        roof: impl Into<String>,
        ground: impl Into<String>,
    ) -> Self {
        Self {
            wall: Some(wall.into()),
            roof: Some(roof.into()),
            ground: Some(ground.into()),
        }
    }

    pub fn get(&self, label: RegionLabel) -> Option<&str> {
        match label {
            RegionLabel::Wall => self.wall.as_deref(),
            RegionLabel::Roof => self.roof.as_deref(),
            RegionLabel::Ground => self.ground.as_deref(),
        }
    }
}

/// Trilinear sampler that repeats in U and V, for world-space tiled UVs.
pub fn repeat_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        mipmap_filter: ImageFilterMode::Linear,
        ..default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = RegionPalette::default();
        assert_eq!(palette.textured_count(), 0);
        assert_eq!(palette.get(RegionLabel::Wall).name, "wall");
        assert_eq!(palette.get(RegionLabel::Ground).name, "ground");
    }

    #[test]
    fn test_set_material() {
        let mut palette = RegionPalette::default();
        palette.set(
            RegionLabel::Roof,
            RegionMaterial::new("tiles").with_texture(Handle::default()),
        );
        assert_eq!(palette.get(RegionLabel::Roof).name, "tiles");
        assert_eq!(palette.textured_count(), 1);
    }

    #[test]
    fn test_texture_paths() {
        let paths = RegionTexturePaths::new("w.jpg", "r.jpg", "g.jpg");
        assert_eq!(paths.get(RegionLabel::Roof), Some("r.jpg"));
        assert_eq!(RegionTexturePaths::default().get(RegionLabel::Wall), None);
    }

    #[test]
    fn test_repeat_sampler() {
        let ImageSampler::Descriptor(descriptor) = repeat_sampler() else {
            panic!("expected a sampler descriptor");
        };
        assert_eq!(descriptor.address_mode_u, ImageAddressMode::Repeat);
        assert_eq!(descriptor.address_mode_v, ImageAddressMode::Repeat);
    }
}
