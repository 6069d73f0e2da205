//! # World Physics
//!
//! Spatial partitioning and collision core for a lightweight 3D world runtime.
//!
//! ## Features
//!
//! - **Static Octree**: Depth-bounded, Morton-addressed index over triangular
//!   surface faces, with tag/name removal and sphere/ray queries
//! - **Narrow Phase**: Box↔box, capsule↔capsule, box↔capsule and sphere↔sphere
//!   detectors returning contact point, direction and distance
//! - **World Stepper**: Per-frame loop handing candidate faces to
//!   externally owned body resolvers
//! - **Visibility Grid**: Position → layer mapping and active-layer diffs
//!
//! ## Quick Start
//!
//! ```rust
//! use world_physics::prelude::*;
//!
//! let mut index = OctreeSettings::centered(32.0, 3).build()?;
//! index.import_aabb("ground", &AABB::new(Vec3::new(-16.0, -1.0, -16.0), Vec3::new(16.0, 0.0, 16.0)));
//!
//! let feet = BoundingSphere::new(Vec3::new(0.0, 0.5, 0.0), 0.6);
//! assert!(!index.query_faces(&feet, 3).is_empty());
//!
//! let hit = sphere_sphere(&Sphere::new(Vec3::zeros(), 1.0), &Sphere::new(Vec3::new(1.9, 0.0, 0.0), 1.0));
//! assert!(hit.intersect);
//! # Ok::<(), OctreeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod settings;
pub mod spatial;
pub mod visibility;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Quat, Vec3},
        physics::{
            box_box, box_capsule, capsule_capsule, sphere_sphere, BodyController, BodyHandle,
            BoundingSphere, Capsule, CollisionLayers, CollisionResult, IndexHandle, OrientedBox,
            Ray, Sphere, StepReport, Triangle, WorldStepper,
        },
        settings::{LayerGridSettings, OctreeSettings, StepperSettings, WorldSettings},
        spatial::{Face, FaceId, FaceLabel, OctreeError, OctreeIndex, SpatialIndex, AABB},
        visibility::{ActiveLayerTracker, LayerDiff, LayerGrid, LayerId},
    };
}
