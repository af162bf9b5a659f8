//! Per-region triangle batches.

use bevy::mesh::Mesh;

use crate::projection::{ProjectedTriangle, ProjectedVertex};
use crate::region::RegionLabel;

use super::builder::RegionMeshBuilder;

/// Projected triangles sharing one [`RegionLabel`], in parse order.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionBatch {
    pub label: RegionLabel,
    pub triangles: Vec<ProjectedTriangle>,
}

impl RegionBatch {
    pub fn new(label: RegionLabel, triangles: Vec<ProjectedTriangle>) -> Self {
        Self { label, triangles }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Flat vertex list, three entries per triangle.
    pub fn vertices(&self) -> Vec<ProjectedVertex> {
        self.triangles.iter().flat_map(|t| t.vertices()).collect()
    }

    /// Vertex data as raw bytes, ready for a vertex buffer upload.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    /// Build a static triangle-list mesh, or `None` for an empty batch.
    pub fn to_mesh(&self) -> Option<Mesh> {
        self.triangles
            .iter()
            .collect::<RegionMeshBuilder>()
            .build()
    }
}

/// The three region batches of one building.
///
/// Always holds exactly one batch per label; batches may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionBatches {
    batches: [RegionBatch; 3],
}

impl Default for RegionBatches {
    fn default() -> Self {
        Self {
            batches: RegionLabel::ALL.map(|label| RegionBatch::new(label, Vec::new())),
        }
    }
}

impl RegionBatches {
    /// Group projected triangles by label.
    ///
    /// Input order is kept within each label.
    pub fn from_labeled(
        labeled: impl IntoIterator<Item = (RegionLabel, ProjectedTriangle)>,
    ) -> Self {
        let mut batches = Self::default();
        for (label, triangle) in labeled {
            batches.batches[label.index()].triangles.push(triangle);
        }
        batches
    }

    pub fn get(&self, label: RegionLabel) -> &RegionBatch {
        &self.batches[label.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionBatch> {
        self.batches.iter()
    }

    /// Triangle count across all batches.
    pub fn total_triangles(&self) -> usize {
        self.batches.iter().map(RegionBatch::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_triangles() == 0
    }

    /// Build one mesh per non-empty batch.
    pub fn to_meshes(&self) -> Vec<(RegionLabel, Mesh)> {
        self.batches
            .iter()
            .filter_map(|batch| Some((batch.label, batch.to_mesh()?)))
            .collect()
    }
}

impl From<[(RegionLabel, Vec<ProjectedTriangle>); 3]> for RegionBatches {
    fn from(grouped: [(RegionLabel, Vec<ProjectedTriangle>); 3]) -> Self {
        Self::from_labeled(
            grouped
                .into_iter()
                .flat_map(|(label, triangles)| triangles.into_iter().map(move |t| (label, t))),
        )
    }
}

impl<'a> IntoIterator for &'a RegionBatches {
    type Item = &'a RegionBatch;
    type IntoIter = std::slice::Iter<'a, RegionBatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}
