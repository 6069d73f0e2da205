//! Narrow-phase detectors for explicit shape pairs
//!
//! Four stateless routines used by gameplay code for ad hoc overlap tests
//! that are not backed by the static index. Every detector returns a fully
//! populated [`CollisionResult`]; degenerate shapes (zero size, coincident
//! centers) yield a valid result instead of an error or NaN.
//!
//! The boolean and `distance` are exact. Contact points for box↔box and
//! capsule↔capsule come from a single ray cast and are approximate.

use crate::foundation::math::{utils, Vec3, EPSILON};
use crate::physics::collision::{
    closest_points_between_segments, BoundingSphere, Capsule, CollisionResult, OrientedBox, Ray,
    SegmentClosest, Sphere, Triangle,
};
use crate::spatial::AABB;

/// Rotation (radians, per Euler axis) under which a box is treated as axis-aligned
pub const ALIGNED_ROTATION_TOLERANCE: f32 = 0.1;

/// Cross products shorter than this are skipped as SAT axes
const CROSS_AXIS_EPSILON: f32 = 1.0e-4;

/// Direction reported when the shapes give none (coincident centers)
fn fallback_normal() -> Vec3 {
    Vec3::y()
}

/// Sphere↔sphere
///
/// Radii are scaled by each sphere's largest scale component. Touching
/// spheres intersect. `distance` is the distance between centers and the
/// contact point lies on sphere A's surface toward B.
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> CollisionResult {
    let radius_a = a.effective_radius();
    let radius_b = b.effective_radius();

    let offset = b.center - a.center;
    let distance = offset.magnitude();
    if distance > radius_a + radius_b {
        return CollisionResult::none();
    }

    // Concentric: the larger sphere takes the flipped fallback
    let fallback = if radius_a > radius_b { -fallback_normal() } else { fallback_normal() };
    let normal = utils::normalize_or(offset, fallback);
    CollisionResult::hit(distance, a.center + normal * radius_a, normal)
}

/// Capsule↔capsule
///
/// `distance` is the minimum distance between the two medial segments; the
/// capsules intersect when it is at most the sum of radii.
pub fn capsule_capsule(a: &Capsule, b: &Capsule) -> CollisionResult {
    let closest = closest_points_between_segments(a.start, a.end, b.start, b.end);
    let distance = closest.distance_squared.sqrt();
    if distance > a.radius + b.radius {
        return CollisionResult::none();
    }

    // Axes touching: axis cross product, then the line between capsule centers
    let normal = utils::try_normalize(closest.point_b - closest.point_a)
        .or_else(|| utils::try_normalize((a.end - a.start).cross(&(b.end - b.start))))
        .unwrap_or_else(|| utils::normalize_or(b.center() - a.center(), fallback_normal()));

    let point = capsule_contact_point(a, b, &closest, normal);
    CollisionResult::hit(distance, point, normal)
}

/// Cast from capsule A's center toward B's closest sphere; first surface hit
fn capsule_contact_point(a: &Capsule, b: &Capsule, closest: &SegmentClosest, normal: Vec3) -> Vec3 {
    let target = BoundingSphere::new(closest.point_b, b.radius);
    Ray::towards(a.center(), closest.point_b)
        .and_then(|ray| target.intersect_ray(&ray))
        .map_or_else(|| closest.point_a + normal * a.radius, |(_, point, _)| point)
}

/// Box↔capsule, with the box taken as its unrotated AABB
///
/// After an AABB overlap test the contact is resolved on a single cardinal
/// axis: the one with the largest center offset relative to the combined
/// half-sizes. The contact point is the capsule center projected onto that
/// box face and `distance` is the capsule center's distance to the face.
pub fn box_capsule(box_shape: &OrientedBox, capsule: &Capsule) -> CollisionResult {
    let box_bounds = box_shape.local_aabb();
    let capsule_bounds = capsule.aabb();
    if !box_bounds.intersects(&capsule_bounds) {
        return CollisionResult::none();
    }

    let box_center = box_bounds.center();
    let capsule_center = capsule.center();
    let offset = capsule_center - box_center;
    let reach = box_bounds.extents() + capsule_bounds.extents();

    // Y wins when the centers coincide
    let mut axis = 1;
    let mut dominant = 0.0;
    for i in 0..3 {
        let normalized = if reach[i] > EPSILON { (offset[i] / reach[i]).abs() } else { 0.0 };
        if normalized > dominant {
            dominant = normalized;
            axis = i;
        }
    }

    let sign = if offset[axis] < 0.0 { -1.0 } else { 1.0 };
    let face = box_center[axis] + sign * box_shape.half_extents[axis];

    let mut point = capsule_center;
    point[axis] = face;
    let distance = (capsule_center[axis] - face).abs();

    CollisionResult::hit(distance, point, utils::axis_vector(axis, sign))
}

/// Box↔box
///
/// When both boxes are within [`ALIGNED_ROTATION_TOLERANCE`] of axis-aligned
/// a plain AABB test decides; otherwise a 15-axis SAT (3 face normals each
/// plus 9 edge cross products). `distance` is the penetration depth along the
/// axis of least overlap, which is also the reported normal. The contact point
/// is the first hit of a ray from box B's center toward box A against A's
/// surface.
pub fn box_box(a: &OrientedBox, b: &OrientedBox) -> CollisionResult {
    let aligned = a.is_nearly_axis_aligned(ALIGNED_ROTATION_TOLERANCE)
        && b.is_nearly_axis_aligned(ALIGNED_ROTATION_TOLERANCE);

    let overlap = if aligned {
        aabb_overlap(&a.local_aabb(), &b.local_aabb())
    } else {
        sat_overlap(a, b)
    };

    let Some((depth, normal)) = overlap else {
        return CollisionResult::none();
    };

    let point = Ray::towards(b.center, a.center)
        .and_then(|ray| first_surface_hit(&a.surface_triangles(), &ray))
        .unwrap_or(a.center);

    CollisionResult::hit(depth, point, normal)
}

/// Least-overlap axis between two AABBs, `None` when separated
fn aabb_overlap(a: &AABB, b: &AABB) -> Option<(f32, Vec3)> {
    if !a.intersects(b) {
        return None;
    }

    let offset = b.center() - a.center();
    let reach = a.extents() + b.extents();

    let mut best: Option<(f32, Vec3)> = None;
    for axis in 0..3 {
        let overlap = reach[axis] - offset[axis].abs();
        if best.map_or(true, |(depth, _)| overlap < depth) {
            let sign = if offset[axis] < 0.0 { -1.0 } else { 1.0 };
            best = Some((overlap, utils::axis_vector(axis, sign)));
        }
    }
    best
}

/// 15-axis SAT between oriented boxes, `None` when a separating axis exists
fn sat_overlap(a: &OrientedBox, b: &OrientedBox) -> Option<(f32, Vec3)> {
    let offset = b.center - a.center;
    let axes_a = a.axes();
    let axes_b = b.axes();
    let mut best = None;

    for axis in axes_a.iter().chain(axes_b.iter()) {
        if !test_axis(a, b, &offset, *axis, &mut best) {
            return None;
        }
    }

    for edge_a in &axes_a {
        for edge_b in &axes_b {
            let axis = edge_a.cross(edge_b);
            if axis.magnitude_squared() < CROSS_AXIS_EPSILON {
                continue;
            }
            if !test_axis(a, b, &offset, axis.normalize(), &mut best) {
                return None;
            }
        }
    }

    best
}

/// Project both boxes onto `axis`; false if it separates them, otherwise
/// keep the least overlap seen so far
fn test_axis(
    a: &OrientedBox,
    b: &OrientedBox,
    offset: &Vec3,
    axis: Vec3,
    best: &mut Option<(f32, Vec3)>,
) -> bool {
    let distance = offset.dot(&axis);
    let overlap = a.projected_radius(&axis) + b.projected_radius(&axis) - distance.abs();
    if overlap < 0.0 {
        return false;
    }

    if best.map_or(true, |(depth, _)| overlap < depth) {
        let normal = if distance < 0.0 { -axis } else { axis };
        *best = Some((overlap, normal));
    }
    true
}

/// Nearest triangle hit along `ray`
fn first_surface_hit(triangles: &[Triangle], ray: &Ray) -> Option<Vec3> {
    triangles
        .iter()
        .filter_map(|tri| tri.intersect_ray(ray))
        .map(|(t, _, _)| t)
        .min_by(f32::total_cmp)
        .map(|t| ray.point_at(t))
}
