//! Spatial partitioning data structures
//!
//! Provides the static face index queried by the world stepper, along with
//! the bounds, face and Morton-addressing types it is built from.

pub mod bounds;
pub mod face;
pub mod morton;
mod octree;
pub mod spatial_query;

pub use bounds::{Plane, AABB};
pub use face::{Face, FaceId, FaceKind, FaceLabel};
pub use octree::{FaceHit, OctreeError, OctreeIndex, OctreeNode, OctreeStats, MAX_SUPPORTED_DEPTH};
pub use spatial_query::SpatialIndex;
