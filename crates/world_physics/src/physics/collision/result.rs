//! Narrow-phase collision result

use crate::foundation::math::Vec3;

/// Outcome of a pairwise narrow-phase test
///
/// Always fully populated: a miss is the all-zero `Default` value, so callers
/// can inspect `intersect` uniformly. On a hit `normal_a` is unit length and
/// points from shape A toward shape B, and `normal_b == -normal_a`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    /// Whether the shapes overlap (touching counts)
    pub intersect: bool,
    /// Detector-specific distance (see each detector)
    pub distance: f32,
    /// Approximate contact point
    pub point: Vec3,
    /// Direction from A toward B; push B along it to separate
    pub normal_a: Vec3,
    /// Direction from B toward A; push A along it to separate
    pub normal_b: Vec3,
}

impl CollisionResult {
    /// A miss
    pub fn none() -> Self {
        Self::default()
    }

    /// A hit with `normal` pointing from A toward B
    pub fn hit(distance: f32, point: Vec3, normal: Vec3) -> Self {
        Self {
            intersect: true,
            distance,
            point,
            normal_a: normal,
            normal_b: -normal,
        }
    }
}
