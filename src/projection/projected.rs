//! Texture-mapped triangle data.

use bevy::math::Vec2;
use bytemuck::{Pod, Zeroable};

use crate::facet::Triangle;

/// One vertex as handed to the renderer: position, face normal and UV.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ProjectedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// A [`Triangle`] with one texture coordinate per vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedTriangle {
    pub triangle: Triangle,
    pub uvs: [Vec2; 3],
}

impl ProjectedTriangle {
    pub const fn new(triangle: Triangle, uvs: [Vec2; 3]) -> Self {
        Self { triangle, uvs }
    }

    /// The three vertices in winding order, each carrying the face normal.
    pub fn vertices(&self) -> [ProjectedVertex; 3] {
        let normal = self.triangle.normal.to_array();
        std::array::from_fn(|i| ProjectedVertex {
            position: self.triangle.vertices[i].to_array(),
            normal,
            uv: self.uvs[i].to_array(),
        })
    }
}
