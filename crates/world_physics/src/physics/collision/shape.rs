//! Shape descriptors for the narrow-phase detectors
//!
//! Plain value types owned by the caller. None of them are stored by the
//! crate; gameplay code builds them ad hoc for one-off overlap tests.

use crate::foundation::math::{utils, Quat, Vec3};
use crate::physics::collision::primitives::Triangle;
use crate::spatial::AABB;

/// Sphere with an optional non-uniform scale
///
/// Detectors use `radius * max(scale)` as the effective radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in world space
    pub center: Vec3,
    /// Unscaled radius
    pub radius: f32,
    /// Owner's scale
    pub scale: Vec3,
}

impl Sphere {
    /// Unscaled sphere
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            scale: Vec3::repeat(1.0),
        }
    }

    /// Copy with the owner's scale applied
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Radius after scaling by the largest scale component
    pub fn effective_radius(&self) -> f32 {
        self.radius * utils::max_component(self.scale)
    }
}

/// Capsule: a segment swept by a sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// First endpoint of the medial segment
    pub start: Vec3,
    /// Second endpoint of the medial segment
    pub end: Vec3,
    /// Sweep radius
    pub radius: f32,
}

impl Capsule {
    /// Create a capsule from its medial segment and radius
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        Self { start, end, radius }
    }

    /// Upright capsule standing on `base` with total `height`
    ///
    /// Heights shorter than the diameter collapse to a sphere.
    pub fn upright(base: Vec3, height: f32, radius: f32) -> Self {
        let segment = (height - 2.0 * radius).max(0.0);
        let start = base + Vec3::new(0.0, radius, 0.0);
        Self::new(start, start + Vec3::new(0.0, segment, 0.0), radius)
    }

    /// Midpoint of the medial segment
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Length of the medial segment
    pub fn segment_length(&self) -> f32 {
        (self.end - self.start).magnitude()
    }

    /// Bounds of the whole capsule
    pub fn aabb(&self) -> AABB {
        AABB::new(self.start.inf(&self.end), self.start.sup(&self.end)).expanded(self.radius)
    }
}

/// Box with an orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    /// Center in world space
    pub center: Vec3,
    /// Orientation
    pub rotation: Quat,
    /// Half-size along each local axis
    pub half_extents: Vec3,
}

impl OrientedBox {
    /// Create an oriented box
    pub fn new(center: Vec3, rotation: Quat, half_extents: Vec3) -> Self {
        Self {
            center,
            rotation,
            half_extents,
        }
    }

    /// Unrotated box
    pub fn axis_aligned(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center, Quat::identity(), half_extents)
    }

    /// Bounds ignoring rotation
    pub fn local_aabb(&self) -> AABB {
        AABB::from_center_extents(self.center, self.half_extents)
    }

    /// World-space local axes (columns of the rotation)
    pub fn axes(&self) -> [Vec3; 3] {
        [
            self.rotation * Vec3::x(),
            self.rotation * Vec3::y(),
            self.rotation * Vec3::z(),
        ]
    }

    /// True when every Euler angle is within `tolerance` radians of zero
    pub fn is_nearly_axis_aligned(&self, tolerance: f32) -> bool {
        let (roll, pitch, yaw) = self.rotation.euler_angles();
        roll.abs() < tolerance && pitch.abs() < tolerance && yaw.abs() < tolerance
    }

    /// Half-length of the box's projection onto `axis` (unit length)
    pub fn projected_radius(&self, axis: &Vec3) -> f32 {
        let [ax, ay, az] = self.axes();
        self.half_extents.x * ax.dot(axis).abs()
            + self.half_extents.y * ay.dot(axis).abs()
            + self.half_extents.z * az.dot(axis).abs()
    }

    /// The 8 corners in world space
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::zeros(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let local = Vec3::new(
                if i & 1 == 0 { -self.half_extents.x } else { self.half_extents.x },
                if i & 2 == 0 { -self.half_extents.y } else { self.half_extents.y },
                if i & 4 == 0 { -self.half_extents.z } else { self.half_extents.z },
            );
            *corner = self.center + self.rotation * local;
        }
        corners
    }

    /// The 12 outward-wound surface triangles in world space
    pub fn surface_triangles(&self) -> [Triangle; 12] {
        let local = AABB::from_center_extents(Vec3::zeros(), self.half_extents);
        local.surface_triangles().map(|tri| {
            Triangle::new(
                self.center + self.rotation * tri.v0,
                self.center + self.rotation * tri.v1,
                self.center + self.rotation * tri.v2,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_effective_radius() {
        let sphere = Sphere::new(Vec3::zeros(), 0.5).with_scale(Vec3::new(1.0, 3.0, 2.0));
        assert_relative_eq!(sphere.effective_radius(), 1.5);
    }

    #[test]
    fn test_upright_capsule() {
        let capsule = Capsule::upright(Vec3::zeros(), 2.0, 0.5);
        assert_relative_eq!(capsule.start, Vec3::new(0.0, 0.5, 0.0));
        assert_relative_eq!(capsule.end, Vec3::new(0.0, 1.5, 0.0));
        let bounds = capsule.aabb();
        assert_relative_eq!(bounds.min, Vec3::new(-0.5, 0.0, -0.5));
        assert_relative_eq!(bounds.max, Vec3::new(0.5, 2.0, 0.5));

        let squat = Capsule::upright(Vec3::zeros(), 0.5, 0.5);
        assert_relative_eq!(squat.segment_length(), 0.0);
    }

    #[test]
    fn test_rotated_box_projection() {
        let rotated = OrientedBox::new(
            Vec3::zeros(),
            Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_4),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert!(!rotated.is_nearly_axis_aligned(0.1));
        assert_relative_eq!(rotated.projected_radius(&Vec3::x()), 2.0_f32.sqrt(), epsilon = 1e-5);

        let aligned = OrientedBox::axis_aligned(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0));
        assert!(aligned.is_nearly_axis_aligned(0.1));
        assert_relative_eq!(aligned.projected_radius(&Vec3::y()), 2.0);
        assert_eq!(aligned.corners()[7], Vec3::new(1.0, 2.0, 3.0));
    }
}
