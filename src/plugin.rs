//! Plugin for loading classified buildings.
use bevy::prelude::*;

use crate::config::BuildingConfig;
use crate::palette::RegionPalette;
use crate::region::RegionLabel;
use crate::systems::{
    BuildingSource, BuildingSystems, apply_texture_fallbacks, load_region_textures, spawn_building,
};

/// Plugin that loads a building at startup and spawns its region batches.
///
/// This plugin registers:
/// - [`BuildingConfig`] and [`RegionPalette`] with defaults, unless already inserted
/// - Startup systems in [`BuildingSystems`] that run when a [`BuildingSource`] exists
/// - An update system that swaps failed region textures for their fallback color
///
/// # Example
/// ```ignore
/// use bevy::prelude::*;
/// use bevy_facade::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .insert_resource(BuildingSource::new("assets/house.stl"))
///     .add_plugins(BuildingRegionsPlugin)
///     .run();
/// ```
pub struct BuildingRegionsPlugin;

impl Plugin for BuildingRegionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BuildingConfig>()
            .init_resource::<RegionPalette>()
            .register_type::<RegionLabel>()
            .add_systems(
                Startup,
                (load_region_textures, spawn_building)
                    .chain()
                    .in_set(BuildingSystems)
                    .run_if(resource_exists::<BuildingSource>),
            )
            .add_systems(Update, apply_texture_fallbacks.in_set(BuildingSystems));
    }
}
