//! Per-frame stepper feeding static-geometry candidates to body resolvers
//!
//! The stepper owns two registries: static spatial indices (tagged with the
//! collision layers their geometry belongs to) and dynamic bodies. Each tick it
//! builds a padded bounding sphere around every body, asks every index the
//! body's mask accepts for nearby faces, and hands the concatenated candidate
//! list to the body's own resolver. It never moves bodies itself.
//!
//! `I` is whatever per-frame input the host passes through to resolvers
//! (player input, a navigation snapshot, or `()`).

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Vec3;
use crate::physics::collision::BoundingSphere;
use crate::physics::collision_layers::CollisionLayers;
use crate::settings::StepperSettings;
use crate::spatial::{Face, SpatialIndex};

new_key_type! {
    /// Handle to a body registered with a [`WorldStepper`]
    pub struct BodyHandle;

    /// Handle to a static index registered with a [`WorldStepper`]
    pub struct IndexHandle;
}

/// A dynamic body that resolves its own collisions
///
/// Implemented by avatar and prop controllers outside this crate.
pub trait BodyController<I>: Send {
    /// Current center of the body's bounding sphere
    fn center(&self) -> Vec3;

    /// Bounding radius before ground padding
    fn radius(&self) -> f32;

    /// Layers of static geometry this body collides with
    fn collision_mask(&self) -> CollisionLayers {
        CollisionLayers::all()
    }

    /// Resolve against this tick's candidate faces
    ///
    /// `faces` may be empty; the resolver still runs so it can integrate
    /// gravity or other free motion.
    fn resolve(&mut self, faces: &[&Face], dt: f32, input: &I);
}

struct RegisteredIndex {
    index: Box<dyn SpatialIndex>,
    layers: CollisionLayers,
}

/// Summary of one [`WorldStepper::step`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bodies whose resolver ran
    pub bodies_stepped: usize,
    /// Candidate faces handed out across all bodies
    pub candidates_total: usize,
}

/// Drives collision resolution for all registered bodies once per tick
pub struct WorldStepper<I> {
    settings: StepperSettings,
    indices: SlotMap<IndexHandle, RegisteredIndex>,
    bodies: SlotMap<BodyHandle, Box<dyn BodyController<I>>>,
}

impl<I> WorldStepper<I> {
    /// Create an empty stepper
    pub fn new(settings: StepperSettings) -> Self {
        Self {
            settings,
            indices: SlotMap::with_key(),
            bodies: SlotMap::with_key(),
        }
    }

    /// Active settings
    pub fn settings(&self) -> &StepperSettings {
        &self.settings
    }

    /// Register a static index whose geometry belongs to `layers`
    pub fn register_index(
        &mut self,
        index: impl SpatialIndex + 'static,
        layers: CollisionLayers,
    ) -> IndexHandle {
        let handle = self.indices.insert(RegisteredIndex {
            index: Box::new(index),
            layers,
        });
        log::debug!("Registered spatial index {:?} on layers {:?}", handle, layers);
        handle
    }

    /// Remove a static index, returning it if the handle was live
    pub fn unregister_index(&mut self, handle: IndexHandle) -> Option<Box<dyn SpatialIndex>> {
        let removed = self.indices.remove(handle).map(|entry| entry.index);
        if removed.is_some() {
            log::debug!("Unregistered spatial index {:?}", handle);
        }
        removed
    }

    /// Borrow a registered index through the trait
    pub fn index(&self, handle: IndexHandle) -> Option<&dyn SpatialIndex> {
        self.indices.get(handle).map(|entry| entry.index.as_ref())
    }

    /// Mutably borrow a registered index as its concrete type
    ///
    /// Used to edit geometry between ticks (e.g. `remove_by_name` on an
    /// [`OctreeIndex`](crate::spatial::OctreeIndex)).
    pub fn index_mut<T: SpatialIndex + 'static>(&mut self, handle: IndexHandle) -> Option<&mut T> {
        self.indices
            .get_mut(handle)
            .and_then(|entry| entry.index.as_any_mut().downcast_mut::<T>())
    }

    /// Register a body
    pub fn register_body(&mut self, body: Box<dyn BodyController<I>>) -> BodyHandle {
        let handle = self.bodies.insert(body);
        log::debug!("Registered body {:?}", handle);
        handle
    }

    /// Remove a body, returning it if the handle was live
    pub fn unregister_body(&mut self, handle: BodyHandle) -> Option<Box<dyn BodyController<I>>> {
        let removed = self.bodies.remove(handle);
        if removed.is_some() {
            log::debug!("Unregistered body {:?}", handle);
        }
        removed
    }

    /// Borrow a registered body
    pub fn body(&self, handle: BodyHandle) -> Option<&dyn BodyController<I>> {
        self.bodies.get(handle).map(|body| body.as_ref())
    }

    /// Number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of registered indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Query sphere used for `handle` this tick
    pub fn bounding_sphere_for(&self, handle: BodyHandle) -> Option<BoundingSphere> {
        self.bodies
            .get(handle)
            .map(|body| query_sphere(body.as_ref(), self.settings.ground_padding))
    }

    /// Advance one tick
    ///
    /// Every registered body's resolver runs exactly once, in registration
    /// order, with the candidates from every index its mask accepts.
    pub fn step(&mut self, dt: f32, input: &I) -> StepReport {
        let mut report = StepReport::default();

        // Split borrows: indices are read while bodies are mutated
        let Self {
            settings,
            indices,
            bodies,
        } = self;

        for (handle, body) in bodies.iter_mut() {
            let sphere = query_sphere(body.as_ref(), settings.ground_padding);
            let mask = body.collision_mask();

            let mut candidates: Vec<&Face> = Vec::new();
            for entry in indices.values() {
                if !CollisionLayers::accepts(mask, entry.layers) {
                    continue;
                }
                let depth = settings
                    .query_depth
                    .map_or(entry.index.max_depth(), |depth| depth.min(entry.index.max_depth()));
                candidates.extend(entry.index.query_faces(&sphere, depth));
            }

            log::trace!("Body {:?}: {} candidate faces", handle, candidates.len());
            report.candidates_total += candidates.len();

            body.resolve(&candidates, dt, input);
            report.bodies_stepped += 1;
        }

        log::trace!(
            "Stepped {} bodies against {} indices ({} candidates)",
            report.bodies_stepped,
            indices.len(),
            report.candidates_total
        );
        report
    }
}

fn query_sphere<I>(body: &dyn BodyController<I>, padding: f32) -> BoundingSphere {
    BoundingSphere::new(body.center(), body.radius()).padded(padding)
}
