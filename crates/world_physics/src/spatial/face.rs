//! Collision faces stored by the static index
//!
//! A face is one tagged triangle with a precomputed outward normal. Faces live
//! in a single arena owned by the index; octree nodes only hold `FaceId`s.

use crate::foundation::math::Vec3;
use crate::physics::collision::primitives::Triangle;
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a face inside an index's face arena
    pub struct FaceId;
}

/// Where a face's geometry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceKind {
    /// Imported triangle of a scene mesh
    Mesh,
    /// One of the 12 triangles synthesized from an AABB proxy
    BoxProxy,
}

/// Provenance supplied by the scene loader when importing geometry
///
/// `name` identifies one scene object (used by `remove_by_name` /
/// `translate_by_name`), `tag` groups objects (used by `remove_by_tag`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceLabel {
    /// Object name
    pub name: String,
    /// Group tag
    pub tag: String,
}

impl FaceLabel {
    /// Label with distinct name and tag
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }
}

impl From<&str> for FaceLabel {
    fn from(name: &str) -> Self {
        Self::new(name, name)
    }
}

impl From<String> for FaceLabel {
    fn from(name: String) -> Self {
        Self::new(name.clone(), name)
    }
}

/// A tagged triangle, the atomic unit stored in the spatial index
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Object name this face belongs to
    pub name: String,
    /// Group tag
    pub tag: String,
    /// Geometry source
    pub kind: FaceKind,
    /// Corner points in the index's coordinate frame
    pub vertices: [Vec3; 3],
    /// Unit outward normal (zero for zero-area faces)
    pub normal: Vec3,
}

impl Face {
    /// Build a face from a triangle, computing its normal
    pub fn new(label: &FaceLabel, kind: FaceKind, triangle: Triangle) -> Self {
        Self {
            name: label.name.clone(),
            tag: label.tag.clone(),
            kind,
            vertices: triangle.vertices(),
            normal: triangle.normal(),
        }
    }

    /// Geometry as a triangle
    pub fn triangle(&self) -> Triangle {
        let [v0, v1, v2] = self.vertices;
        Triangle::new(v0, v1, v2)
    }

    /// Move all three corners by `delta` (the normal is unchanged)
    pub fn translate(&mut self, delta: Vec3) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    /// True for zero-area seams
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::zeros()
    }
}
