//! Region labels assigned by the classifier.

use bevy::prelude::*;

/// Architectural region a triangle belongs to.
///
/// Also used as a component on the entity rendering that region's batch.
#[derive(Component, Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionLabel {
    Wall,
    Roof,
    Ground,
}

impl RegionLabel {
    /// All labels in batch order.
    pub const ALL: [RegionLabel; 3] = [RegionLabel::Wall, RegionLabel::Roof, RegionLabel::Ground];

    pub const fn name(self) -> &'static str {
        match self {
            RegionLabel::Wall => "wall",
            RegionLabel::Roof => "roof",
            RegionLabel::Ground => "ground",
        }
    }

    /// Position of this label in [`RegionLabel::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RegionLabel::Wall => 0,
            RegionLabel::Roof => 1,
            RegionLabel::Ground => 2,
        }
    }
}

impl std::fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
