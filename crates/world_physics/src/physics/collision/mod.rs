//! Collision geometry shared by the spatial index and the detectors
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (rays, spheres, triangles)
//! - [`shape`] - Shape descriptors consumed by the narrow-phase detectors
//! - [`result`] - The value every detector returns

pub mod primitives;
pub mod result;
pub mod shape;

// Re-export commonly used types
pub use primitives::{closest_points_between_segments, BoundingSphere, Ray, SegmentClosest, Triangle};
pub use result::CollisionResult;
pub use shape::{Capsule, OrientedBox, Sphere};
