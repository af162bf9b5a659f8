//! Wall / roof / ground classification.

use crate::facet::{HeightRange, Triangle};

use super::config::{ClassifierConfig, HORIZONTALITY_CUTOFF};
use super::label::RegionLabel;

/// Absolute heights derived from a [`ClassifierConfig`] and a mesh's height range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub ground: f32,
    /// `None` when the upper-roof rule is off or the model has no height.
    pub roof: Option<f32>,
    /// The model has zero height; every flat face is ground.
    pub flat: bool,
}

impl Thresholds {
    pub fn new(range: &HeightRange, config: &ClassifierConfig) -> Self {
        let flat = range.total() <= 0.0;
        // Flat models break the tie rule on purpose: all flat faces are ground.
        Self {
            ground: range.at_fraction(config.ground_fraction),
            roof: config
                .roof_fraction
                .filter(|_| !flat)
                .map(|fraction| range.at_fraction(fraction)),
            flat,
        }
    }

    /// Label a single face.
    ///
    /// Exact threshold hits resolve to [`RegionLabel::Roof`].
    pub fn label(&self, horizontality: f32, average_height: f32) -> RegionLabel {
        if horizontality > HORIZONTALITY_CUTOFF {
            if self.flat || average_height < self.ground {
                RegionLabel::Ground
            } else {
                RegionLabel::Roof
            }
        } else {
            match self.roof {
                Some(roof) if average_height >= roof => RegionLabel::Roof,
                _ => RegionLabel::Wall,
            }
        }
    }

    pub fn label_triangle(&self, triangle: &Triangle) -> RegionLabel {
        self.label(triangle.horizontality(), triangle.average_height())
    }
}

/// Triangles split into one ordered bucket per [`RegionLabel`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedTriangles {
    buckets: [Vec<Triangle>; 3],
}

impl ClassifiedTriangles {
    pub fn get(&self, label: RegionLabel) -> &[Triangle] {
        &self.buckets[label.index()]
    }

    pub fn push(&mut self, label: RegionLabel, triangle: Triangle) {
        self.buckets[label.index()].push(triangle);
    }

    /// Total number of triangles across all regions.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(label, triangles)` in [`RegionLabel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionLabel, &[Triangle])> {
        RegionLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }
}

/// Assign every triangle to exactly one region, preserving input order
/// within each region.
pub fn classify(
    triangles: &[Triangle],
    range: &HeightRange,
    config: &ClassifierConfig,
) -> ClassifiedTriangles {
    let thresholds = Thresholds::new(range, config);
    let mut classified = ClassifiedTriangles::default();
    for triangle in triangles {
        classified.push(thresholds.label_triangle(triangle), *triangle);
    }
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;

    fn range() -> HeightRange {
        HeightRange::new(0.0, 10.0)
    }

    fn flat_at(z: f32) -> Triangle {
        Triangle::new(
            Vec3::Z,
            [
                Vec3::new(0.0, 0.0, z),
                Vec3::new(1.0, 0.0, z),
                Vec3::new(0.0, 1.0, z),
            ],
        )
    }

    fn upright_at(z: f32) -> Triangle {
        Triangle::new(
            Vec3::X,
            [
                Vec3::new(0.0, 0.0, z - 1.0),
                Vec3::new(0.0, 2.0, z - 1.0),
                Vec3::new(0.0, 2.0, z + 2.0),
            ],
        )
    }

    #[test]
    fn test_flat_low_is_ground() {
        let config = ClassifierConfig::new().with_ground_fraction(0.15);
        let classified = classify(&[flat_at(0.0)], &range(), &config);
        assert_eq!(classified.get(RegionLabel::Ground).len(), 1);
    }

    #[test]
    fn test_flat_high_is_roof() {
        let classified = classify(&[flat_at(6.0)], &range(), &ClassifierConfig::default());
        assert_eq!(classified.get(RegionLabel::Roof).len(), 1);
    }

    #[test]
    fn test_upright_is_wall_in_basic_mode() {
        let classified = classify(&[upright_at(9.5)], &range(), &ClassifierConfig::default());
        assert_eq!(classified.get(RegionLabel::Wall).len(), 1);
    }

    #[test]
    fn test_upright_near_apex_is_roof_in_extended_mode() {
        let config = ClassifierConfig::new()
            .with_ground_fraction(0.15)
            .with_roof_fraction(0.85);
        let triangle = upright_at(9.5);
        assert!((triangle.average_height() - 9.5).abs() < 1e-5);

        let classified = classify(&[triangle, upright_at(4.0)], &range(), &config);
        assert_eq!(classified.get(RegionLabel::Roof), &[triangle]);
        assert_eq!(classified.get(RegionLabel::Wall).len(), 1);
    }

    #[test]
    fn test_exact_ground_threshold_is_roof() {
        let thresholds = Thresholds::new(&range(), &ClassifierConfig::new().with_ground_fraction(0.5));
        assert_eq!(thresholds.ground, 5.0);
        assert_eq!(thresholds.label(1.0, 5.0), RegionLabel::Roof);
        assert_eq!(thresholds.label(1.0, 4.999), RegionLabel::Ground);
    }

    #[test]
    fn test_exact_roof_threshold_is_roof() {
        let config = ClassifierConfig::new().with_roof_fraction(0.5);
        let thresholds = Thresholds::new(&range(), &config);
        assert_eq!(thresholds.label(0.0, 5.0), RegionLabel::Roof);
        assert_eq!(thresholds.label(0.0, 4.999), RegionLabel::Wall);
    }

    #[test]
    fn test_horizontality_cutoff_is_exclusive() {
        let thresholds = Thresholds::new(&range(), &ClassifierConfig::default());
        assert_eq!(thresholds.label(0.5, 0.0), RegionLabel::Wall);
        assert_eq!(thresholds.label(0.51, 0.0), RegionLabel::Ground);
    }

    #[test]
    fn test_downward_normal_counts_as_flat() {
        let mut triangle = flat_at(0.0);
        triangle.normal = Vec3::NEG_Z;
        let classified = classify(&[triangle], &range(), &ClassifierConfig::default());
        assert_eq!(classified.get(RegionLabel::Ground).len(), 1);
    }

    #[test]
    fn test_flat_model_is_all_ground() {
        let range = HeightRange::new(0.1, 0.1);
        let config = ClassifierConfig::new().with_roof_fraction(0.85);
        let classified = classify(&[flat_at(0.1), flat_at(0.1), upright_at(0.1)], &range, &config);

        assert_eq!(classified.get(RegionLabel::Ground).len(), 2);
        assert_eq!(classified.get(RegionLabel::Wall).len(), 1);
        assert!(classified.get(RegionLabel::Roof).is_empty());
    }

    #[test]
    fn test_partition_preserves_order() {
        let triangles = [
            flat_at(0.0),
            upright_at(3.0),
            flat_at(8.0),
            flat_at(0.5),
            upright_at(6.0),
            flat_at(9.0),
        ];
        let classified = classify(&triangles, &range(), &ClassifierConfig::default());

        assert_eq!(classified.len(), triangles.len());
        assert_eq!(classified.get(RegionLabel::Ground), &[triangles[0], triangles[3]]);
        assert_eq!(classified.get(RegionLabel::Wall), &[triangles[1], triangles[4]]);
        assert_eq!(classified.get(RegionLabel::Roof), &[triangles[2], triangles[5]]);
    }

    #[test]
    fn test_raising_ground_fraction_never_shrinks_ground() {
        let triangles: Vec<Triangle> = (0..=20).map(|i| flat_at(i as f32 * 0.5)).collect();

        let mut previous = 0;
        for step in 0..=10 {
            let config = ClassifierConfig::new().with_ground_fraction(step as f32 / 10.0);
            let ground = classify(&triangles, &range(), &config)
                .get(RegionLabel::Ground)
                .len();
            assert!(ground >= previous);
            previous = ground;
        }
    }

    #[test]
    fn test_empty_input() {
        let classified = classify(&[], &HeightRange::EMPTY, &ClassifierConfig::default());
        assert!(classified.is_empty());
    }
}
