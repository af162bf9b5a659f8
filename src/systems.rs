//! Systems that turn a facet file into region entities.

use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::config::BuildingConfig;
use crate::palette::{RegionPalette, RegionTexturePaths};
use crate::pipeline::BuildingPipeline;
use crate::region::RegionLabel;

/// System set for building load systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildingSystems;

/// Which facet file to load at startup, and how to place it.
#[derive(Resource, Clone, Debug)]
pub struct BuildingSource {
    pub path: PathBuf,

    /// Transform of the building root.
    ///
    /// Facet files are Z-up; the default rotates them into Bevy's Y-up world
    /// and scales them down by 10.
    pub transform: Transform,

    /// Optional textures, loaded through the [`AssetServer`].
    pub textures: RegionTexturePaths,
}

impl BuildingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            transform: Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2))
                .with_scale(Vec3::splat(0.1)),
            textures: RegionTexturePaths::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_textures(mut self, textures: RegionTexturePaths) -> Self {
        self.textures = textures;
        self
    }
}

/// Root entity of a spawned building. Region entities are its children.
#[derive(Component, Debug, Default)]
pub struct BuildingRoot;

/// Triangle counts of the last loaded building.
///
/// An empty building (missing file, no valid facets) is reported here rather
/// than as an error.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildingSummary {
    pub wall: usize,
    pub roof: usize,
    pub ground: usize,
}

impl BuildingSummary {
    pub fn total(&self) -> usize {
        self.wall + self.roof + self.ground
    }

    pub fn get(&self, label: RegionLabel) -> usize {
        match label {
            RegionLabel::Wall => self.wall,
            RegionLabel::Roof => self.roof,
            RegionLabel::Ground => self.ground,
        }
    }
}

/// Load the textures named by [`BuildingSource`] into the [`RegionPalette`].
pub fn load_region_textures(
    source: Res<BuildingSource>,
    asset_server: Res<AssetServer>,
    mut palette: ResMut<RegionPalette>,
) {
    *palette = palette.clone().load_textures(&asset_server, &source.textures);
    if palette.textured_count() > 0 {
        info!("Loading {} region textures", palette.textured_count());
    }
}

/// Run the pipeline on [`BuildingSource`] and spawn one entity per non-empty region.
pub fn spawn_building(
    mut commands: Commands,
    source: Res<BuildingSource>,
    config: Res<BuildingConfig>,
    palette: Res<RegionPalette>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let pipeline = match BuildingPipeline::new(*config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Invalid building configuration: {}", e);
            return;
        }
    };

    let batches = pipeline.run_file(&source.path);
    let summary = BuildingSummary {
        wall: batches.get(RegionLabel::Wall).len(),
        roof: batches.get(RegionLabel::Roof).len(),
        ground: batches.get(RegionLabel::Ground).len(),
    };
    commands.insert_resource(summary);

    if summary.total() == 0 {
        warn!("Building {} has no triangles", source.path.display());
    }

    let regions: Vec<_> = batches
        .to_meshes()
        .into_iter()
        .map(|(label, mesh)| {
            (
                Name::new(format!("{} batch", label)),
                label,
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(materials.add(palette.get(label).to_standard_material())),
            )
        })
        .collect();

    commands
        .spawn((
            Name::new("Building"),
            BuildingRoot,
            source.transform,
            Visibility::default(),
        ))
        .with_children(|parent| {
            for region in regions {
                parent.spawn(region);
            }
        });
}

/// Switch region materials whose texture failed to load to their fallback color.
pub fn apply_texture_fallbacks(
    regions: Query<(&RegionLabel, &MeshMaterial3d<StandardMaterial>)>,
    asset_server: Res<AssetServer>,
    mut palette: ResMut<RegionPalette>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (label, material) in &regions {
        let Some(texture) = materials
            .get(&material.0)
            .and_then(|m| m.base_color_texture.as_ref())
        else {
            continue;
        };
        let LoadState::Failed(err) = asset_server.load_state(texture.id()) else {
            continue;
        };

        warn!("Failed to load {} texture, using fallback color: {}", label, err);
        let region = palette.get_mut(*label);
        region.texture = None;
        if let Some(standard) = materials.get_mut(&material.0) {
            region.apply_fallback(standard);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_source_defaults_to_y_up() {
        let source = BuildingSource::new("model.stl");
        let up = source.transform.rotation * Vec3::Z;
        assert!((up - Vec3::Y).length() < 1e-5);
        assert_eq!(source.transform.scale, Vec3::splat(0.1));
    }

    #[test]
    fn test_load_region_textures_only_loads_given_paths() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>()
            .init_resource::<RegionPalette>()
            .insert_resource(BuildingSource::new("model.stl").with_textures(
                RegionTexturePaths {
                    roof: Some("textures/roof.jpg".to_owned()),
                    ..default()
                },
            ));

        app.world_mut()
            .run_system_once(load_region_textures)
            .unwrap();

        let palette = app.world().resource::<RegionPalette>();
        assert_eq!(palette.textured_count(), 1);
        assert!(palette.get(RegionLabel::Roof).has_texture());
        assert!(!palette.get(RegionLabel::Wall).has_texture());
        assert!(!palette.get(RegionLabel::Ground).has_texture());
    }

    #[test]
    fn test_summary() {
        let summary = BuildingSummary {
            wall: 4,
            roof: 2,
            ground: 1,
        };
        assert_eq!(summary.total(), 7);
        assert_eq!(summary.get(RegionLabel::Roof), 2);
    }
}
