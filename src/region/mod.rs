//! Region classification.
//!
//! Every triangle is labeled [`RegionLabel::Wall`], [`RegionLabel::Roof`] or
//! [`RegionLabel::Ground`] from two inputs:
//! - how flat it is (absolute Z component of its normal)
//! - its average height, as a fraction of the model's total height

mod classifier;
mod config;
mod label;

pub use classifier::{ClassifiedTriangles, Thresholds, classify};
pub use config::{
    ClassifierConfig, DEFAULT_GROUND_FRACTION, DEFAULT_ROOF_FRACTION, HORIZONTALITY_CUTOFF,
};
pub use label::RegionLabel;
