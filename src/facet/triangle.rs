//! Parsed facet records.

use bevy::math::Vec3;

/// A single triangular facet: its stored face normal and three vertex positions.
///
/// The normal is taken verbatim from the source file and is never recomputed
/// from the vertices, so degenerate or inconsistent facets pass through as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub normal: Vec3,
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub const fn new(normal: Vec3, vertices: [Vec3; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Mean height (Z) of the three vertices.
    #[inline]
    pub fn average_height(&self) -> f32 {
        (self.vertices[0].z + self.vertices[1].z + self.vertices[2].z) / 3.0
    }

    /// Absolute vertical component of the face normal.
    ///
    /// Values near 1.0 are flat (floor/roof-like), values near 0.0 are upright.
    #[inline]
    pub fn horizontality(&self) -> f32 {
        self.normal.z.abs()
    }

    /// Axis-aligned extent of the triangle along X, Y and Z.
    pub fn spans(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        a.max(b).max(c) - a.min(b).min(c)
    }
}

/// Vertical extent observed across every vertex line of a mesh.
///
/// Starts out empty (`min = +inf`, `max = -inf`) and grows with [`include`](Self::include).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightRange {
    pub min: f32,
    pub max: f32,
}

impl Default for HeightRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl HeightRange {
    pub const EMPTY: Self = Self {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Widen the range to contain `height`.
    #[inline]
    pub fn include(&mut self, height: f32) {
        self.min = self.min.min(height);
        self.max = self.max.max(height);
    }

    /// Returns `true` if no height has been observed.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// `max - min`, or 0.0 for an empty range.
    pub fn total(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Height located at `fraction` of the way from `min` to `max`.
    pub fn at_fraction(&self, fraction: f32) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.min + self.total() * fraction
    }
}
