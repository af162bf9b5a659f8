//! Per-triangle planar texture projection.
//!
//! Roof and ground faces use a fixed top-down (XY) projection. Wall faces
//! pick, per triangle, the axis pair that drops the axis the triangle is
//! thinnest along, so textures are not smeared across faces that run along
//! X or Y.

mod plane;
mod projected;

use crate::config::ConfigError;
use crate::facet::Triangle;
use crate::region::{ClassifiedTriangles, RegionLabel};

pub use plane::ProjectionPlane;
pub use projected::{ProjectedTriangle, ProjectedVertex};

/// Default world units per texture tile.
pub const DEFAULT_TILING_SCALE: f32 = 5.0;

/// Texture tiling scales in world units per texture repeat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingConfig {
    /// Default: 5.0
    pub wall_scale: f32,
    /// Shared by roof and ground. Default: 5.0
    pub roof_ground_scale: f32,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            wall_scale: DEFAULT_TILING_SCALE,
            roof_ground_scale: DEFAULT_TILING_SCALE,
        }
    }
}

impl TilingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_scale("wall_tiling_scale", self.wall_scale)?;
        check_scale("roof_ground_tiling_scale", self.roof_ground_scale)
    }

    /// Plane and scale used for a triangle of the given region.
    pub fn plane_for(&self, label: RegionLabel, triangle: &Triangle) -> (ProjectionPlane, f32) {
        match label {
            RegionLabel::Wall => (ProjectionPlane::for_wall(triangle), self.wall_scale),
            RegionLabel::Roof | RegionLabel::Ground => {
                (ProjectionPlane::XY, self.roof_ground_scale)
            }
        }
    }
}

fn check_scale(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidTilingScale { name, value });
    }
    Ok(())
}

/// Compute texture coordinates for one triangle.
pub fn project_triangle(
    label: RegionLabel,
    triangle: &Triangle,
    tiling: &TilingConfig,
) -> ProjectedTriangle {
    let (plane, scale) = tiling.plane_for(label, triangle);
    let uvs = triangle.vertices.map(|v| plane.project(v, scale));
    ProjectedTriangle::new(*triangle, uvs)
}

/// Project every classified triangle, keeping per-region order.
pub fn project(
    classified: &ClassifiedTriangles,
    tiling: &TilingConfig,
) -> [(RegionLabel, Vec<ProjectedTriangle>); 3] {
    RegionLabel::ALL.map(|label| {
        let projected = classified
            .get(label)
            .iter()
            .map(|triangle| project_triangle(label, triangle, tiling))
            .collect();
        (label, projected)
    })
}
