//! Batch building and Bevy mesh output.
//!
//! Each region batch becomes one static triangle-list [`Mesh`](bevy::mesh::Mesh)
//! carrying:
//! - `ATTRIBUTE_POSITION`: world position as parsed (Z up)
//! - `ATTRIBUTE_NORMAL`: the facet normal, repeated on all three vertices
//! - `ATTRIBUTE_UV_0`: the planar projection chosen for the facet

mod batch;
mod builder;

pub use batch::{RegionBatch, RegionBatches};
pub use builder::RegionMeshBuilder;
