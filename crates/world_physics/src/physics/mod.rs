//! Physics module for collision detection against static world geometry
//!
//! Provides the narrow-phase shape detectors, collision layer filtering and
//! the per-frame stepper that feeds octree candidates to body resolvers.

pub mod collision;
pub mod collision_layers;
pub mod narrow_phase;
pub mod world_stepper;

pub use collision::{
    BoundingSphere,
    Capsule,
    CollisionResult,
    OrientedBox,
    Ray,
    Sphere,
    Triangle,
};
pub use collision_layers::CollisionLayers;
pub use narrow_phase::{box_box, box_capsule, capsule_capsule, sphere_sphere, ALIGNED_ROTATION_TOLERANCE};
pub use world_stepper::{BodyController, BodyHandle, IndexHandle, StepReport, WorldStepper};
