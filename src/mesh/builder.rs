//! Mesh builder for region batches.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};

use crate::projection::{ProjectedTriangle, ProjectedVertex};

/// Builder for triangle-list meshes with positions, normals and UVs.
///
/// Vertices are not shared between triangles: each face keeps its own
/// normal and its own projected UVs.
///
/// # Example
/// ```
/// use bevy_facade::mesh::RegionMeshBuilder;
///
/// let mut builder = RegionMeshBuilder::new();
/// builder.push_vertex([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]);
/// builder.push_vertex([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.2, 0.0]);
/// builder.push_vertex([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.2]);
/// builder.push_triangle(0, 1, 2);
///
/// assert!(builder.build().is_some());
/// ```
#[derive(Default)]
pub struct RegionMeshBuilder {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl RegionMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder sized for `triangle_count` unshared triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        let vertex_count = triangle_count * 3;
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(vertex_count),
        }
    }

    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) {
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
    }

    /// Add a single triangle by vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Append a projected triangle as three new vertices.
    pub fn push_projected(&mut self, triangle: &ProjectedTriangle) {
        let base = self.positions.len() as u32;
        for ProjectedVertex {
            position,
            normal,
            uv,
        } in triangle.vertices()
        {
            self.push_vertex(position, normal, uv);
        }
        self.push_triangle(base, base + 1, base + 2);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Build the final mesh.
    ///
    /// Returns `None` if there are no vertices or indices.
    pub fn build(self) -> Option<Mesh> {
        if self.positions.is_empty() || self.indices.is_empty() {
            return None;
        }

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        );

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs);
        mesh.insert_indices(Indices::U32(self.indices));

        Some(mesh)
    }
}

impl<'a> FromIterator<&'a ProjectedTriangle> for RegionMeshBuilder {
    fn from_iter<T: IntoIterator<Item = &'a ProjectedTriangle>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut builder = Self::with_capacity(iter.size_hint().0);
        for triangle in iter {
            builder.push_projected(triangle);
        }
        builder
    }
}
