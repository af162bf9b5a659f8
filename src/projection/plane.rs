//! Axis-pair planar projections.

use bevy::math::{Vec2, Vec3};

use crate::facet::Triangle;

/// Which two world axes become the texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectionPlane {
    /// Drops X. Used for faces lying across the X axis.
    YZ,
    /// Drops Y.
    XZ,
    /// Drops Z. The top-down projection.
    XY,
}

impl ProjectionPlane {
    /// Pick the plane that drops the axis along which the triangle is thinnest.
    ///
    /// Ties resolve in the order X, Y, Z.
    pub fn for_spans(spans: Vec3) -> Self {
        if spans.x <= spans.y && spans.x <= spans.z {
            ProjectionPlane::YZ
        } else if spans.y <= spans.z {
            ProjectionPlane::XZ
        } else {
            ProjectionPlane::XY
        }
    }

    /// Least-stretch plane for a wall triangle.
    pub fn for_wall(triangle: &Triangle) -> Self {
        Self::for_spans(triangle.spans())
    }

    /// Project a world position onto this plane, one texture tile per `scale`
    /// world units.
    #[inline]
    pub fn project(self, position: Vec3, scale: f32) -> Vec2 {
        let retained = match self {
            ProjectionPlane::YZ => Vec2::new(position.y, position.z),
            ProjectionPlane::XZ => Vec2::new(position.x, position.z),
            ProjectionPlane::XY => Vec2::new(position.x, position.y),
        };
        retained / scale
    }
}
