//! Abstract spatial index interface used by the world stepper
//!
//! The stepper only needs to ask "which faces are near this sphere"; keeping
//! that behind a trait lets scenes register other static structures next to
//! the octree without changing the stepper.

use std::any::Any;

use super::face::Face;
use super::octree::OctreeIndex;
use crate::physics::collision::BoundingSphere;

/// Read-only face lookup for broad-phase queries against static geometry
pub trait SpatialIndex: Send + Sync {
    /// Deepest level a query can target
    fn max_depth(&self) -> u32;

    /// Candidate faces near `sphere` at `depth`, unique by identity
    fn query_faces(&self, sphere: &BoundingSphere, depth: u32) -> Vec<&Face>;

    /// Number of faces stored
    fn face_count(&self) -> usize;

    /// Downcast to Any for type-specific access (e.g., OctreeIndex)
    fn as_any(&self) -> &dyn Any;

    /// Downcast to Any for mutable type-specific access
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl SpatialIndex for OctreeIndex {
    fn max_depth(&self) -> u32 {
        OctreeIndex::max_depth(self)
    }

    fn query_faces(&self, sphere: &BoundingSphere, depth: u32) -> Vec<&Face> {
        OctreeIndex::query_faces(self, sphere, depth)
    }

    fn face_count(&self) -> usize {
        OctreeIndex::face_count(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::spatial::AABB;

    #[test]
    fn test_octree_through_trait_object() {
        let bounds = AABB::new(Vec3::new(-8.0, -8.0, -8.0), Vec3::new(8.0, 8.0, 8.0));
        let mut octree = OctreeIndex::new(bounds, 2).unwrap();
        octree.import_aabb("pillar", &AABB::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 4.0, 1.0)));

        let mut index: Box<dyn SpatialIndex> = Box::new(octree);
        assert_eq!(index.max_depth(), 2);
        assert_eq!(index.face_count(), 12);

        let near = index.query_faces(&BoundingSphere::new(Vec3::new(0.0, 2.0, 0.0), 1.5), 2);
        assert!(!near.is_empty());

        let octree = index.as_any_mut().downcast_mut::<OctreeIndex>().unwrap();
        octree.remove_by_name("pillar");
        assert_eq!(index.face_count(), 0);
    }
}
