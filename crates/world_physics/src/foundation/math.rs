//! Math utilities and types
//!
//! Provides the fundamental vector and rotation types shared by the spatial
//! index, the narrow-phase detectors and the layer grid.

pub use nalgebra::{UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Threshold below which lengths, areas and determinants count as zero
pub const EPSILON: f32 = 1.0e-6;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3, EPSILON};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Normalize `v`, or `None` when it is too short to carry a direction
    pub fn try_normalize(v: Vec3) -> Option<Vec3> {
        v.try_normalize(EPSILON)
    }

    /// Normalize `v`, falling back to `fallback` for near-zero vectors
    pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
        try_normalize(v).unwrap_or(fallback)
    }

    /// Largest of the three components
    pub fn max_component(v: Vec3) -> f32 {
        v.x.max(v.y).max(v.z)
    }

    /// Unit vector along `axis` (0 = X, 1 = Y, 2 = Z) scaled by `sign`
    pub fn axis_vector(axis: usize, sign: f32) -> Vec3 {
        let mut v = Vec3::zeros();
        v[axis] = sign;
        v
    }
}
