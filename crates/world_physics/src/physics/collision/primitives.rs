//! Primitive collision shapes and intersection algorithms
//!
//! Provides basic geometric primitives (rays, spheres, triangles) with
//! efficient intersection testing algorithms.

use crate::foundation::math::{utils, Vec3, EPSILON};
use crate::spatial::bounds::{Plane, AABB};

/// A ray for ray casting and picking
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (should be normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// A zero direction produces a ray that never hits anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: utils::normalize_or(direction, Vec3::zeros()),
        }
    }

    /// Creates a ray, or `None` when `direction` has no usable length
    pub fn try_new(origin: Vec3, direction: Vec3) -> Option<Self> {
        utils::try_normalize(direction).map(|direction| Self { origin, direction })
    }

    /// Ray from `from` pointing at `to`, `None` if the points coincide
    pub fn towards(from: Vec3, to: Vec3) -> Option<Self> {
        Self::try_new(from, to - from)
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Copy of this sphere with `padding` added to the radius
    pub fn padded(&self, padding: f32) -> Self {
        Self::new(self.center, self.radius + padding)
    }

    /// Sphere-vs-box overlap: clamp the center into the box per axis and
    /// compare the squared distance to radius²
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        let closest = aabb.closest_point(self.center);
        (closest - self.center).magnitude_squared() <= self.radius * self.radius
    }

    /// Test ray intersection with this sphere
    /// Returns (distance, hit_point, normal) if hit, None otherwise
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, Vec3, Vec3)> {
        let oc = ray.origin - self.center;

        // Solve: |origin + t*direction - center|^2 = radius^2
        let a = ray.direction.dot(&ray.direction);
        if a < EPSILON {
            return None;
        }
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);

        // Use the closest positive intersection
        let t = if t1 > 0.0 {
            t1
        } else if t2 > 0.0 {
            t2
        } else {
            return None;
        };

        let hit_point = ray.point_at(t);
        let normal = utils::normalize_or(hit_point - self.center, -ray.direction);

        Some((t, hit_point, normal))
    }
}

/// A triangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Triangle vertices in world space
    pub v0: Vec3,
    /// Second vertex
    pub v1: Vec3,
    /// Third vertex
    pub v2: Vec3,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Vertices as an array
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Calculates the normal of the triangle (right-hand rule)
    ///
    /// Zero-area triangles report a zero normal.
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        utils::normalize_or(edge1.cross(&edge2), Vec3::zeros())
    }

    /// Surface area
    pub fn area(&self) -> f32 {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0)).magnitude() * 0.5
    }

    /// True for zero-area seams (collinear or coincident corners)
    pub fn is_degenerate(&self) -> bool {
        self.area() <= EPSILON
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Copy of the triangle moved by `delta`
    pub fn translated(&self, delta: Vec3) -> Self {
        Self::new(self.v0 + delta, self.v1 + delta, self.v2 + delta)
    }

    /// Möller-Trumbore core: intersection of `origin + t * direction` with the
    /// triangle for any `t`, returned as (t, u, v)
    fn intersect_line(&self, origin: Vec3, direction: Vec3) -> Option<(f32, f32, f32)> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = direction.cross(&edge2);
        let a = edge1.dot(&h);

        // Parallel to the triangle, or degenerate triangle
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = origin - self.v0;
        let u = f * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = f * direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        Some((f * edge2.dot(&q), u, v))
    }

    /// Möller-Trumbore ray-triangle intersection algorithm
    /// Returns (t, u, v) barycentric coordinates if hit, None otherwise
    ///
    /// See: "Fast, Minimum Storage Ray/Triangle Intersection" by Möller & Trumbore
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        self.intersect_line(ray.origin, ray.direction)
            .filter(|(t, _, _)| *t >= 0.0)
    }

    /// Segment-triangle intersection
    ///
    /// Returns the segment parameter in `[0, 1]` and the hit point.
    pub fn intersect_segment(&self, start: Vec3, end: Vec3) -> Option<(f32, Vec3)> {
        let direction = end - start;
        self.intersect_line(start, direction)
            .filter(|(t, _, _)| (0.0..=1.0).contains(t))
            .map(|(t, _, _)| (t, start + direction * t))
    }

    /// Get the closest point on the triangle to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        let v0_to_point = point - self.v0;

        let d1 = edge1.dot(&v0_to_point);
        let d2 = edge2.dot(&v0_to_point);

        // Vertex region outside v0
        if d1 <= 0.0 && d2 <= 0.0 {
            return self.v0;
        }

        // Vertex region outside v1
        let v1_to_point = point - self.v1;
        let d3 = edge1.dot(&v1_to_point);
        let d4 = edge2.dot(&v1_to_point);
        if d3 >= 0.0 && d4 <= d3 {
            return self.v1;
        }

        // Vertex region outside v2
        let v2_to_point = point - self.v2;
        let d5 = edge1.dot(&v2_to_point);
        let d6 = edge2.dot(&v2_to_point);
        if d6 >= 0.0 && d5 <= d6 {
            return self.v2;
        }

        // Edge regions
        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v_val = d1 / (d1 - d3);
            return self.v0 + edge1 * v_val;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return self.v0 + edge2 * w;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.v1 + (self.v2 - self.v1) * w;
        }

        let sum = va + vb + vc;
        if sum.abs() < EPSILON {
            return self.v0;
        }

        // Point projects inside the triangle
        let denom = 1.0 / sum;
        let v_val = vb * denom;
        let w = vc * denom;
        self.v0 + edge1 * v_val + edge2 * w
    }

    /// Triangle-vs-AABB overlap using the separating axis theorem
    ///
    /// Tests 13 axes (Akenine-Möller):
    /// - 9 cross products of the box axes with the triangle edges
    /// - 3 box face normals
    /// - 1 triangle normal (as a plane-box test)
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        let center = aabb.center();
        let e = aabb.extents();

        // Work in the box's frame
        let v = [self.v0 - center, self.v1 - center, self.v2 - center];
        let edges = [v[1] - v[0], v[2] - v[1], v[0] - v[2]];

        for box_axis in [Vec3::x(), Vec3::y(), Vec3::z()] {
            for edge in &edges {
                let axis = box_axis.cross(edge);
                if axis.magnitude_squared() < EPSILON * EPSILON {
                    continue;
                }

                let p0 = v[0].dot(&axis);
                let p1 = v[1].dot(&axis);
                let p2 = v[2].dot(&axis);
                let r = e.x * axis.x.abs() + e.y * axis.y.abs() + e.z * axis.z.abs();

                if p0.min(p1).min(p2) > r || p0.max(p1).max(p2) < -r {
                    return false;
                }
            }
        }

        for i in 0..3 {
            let min = v[0][i].min(v[1][i]).min(v[2][i]);
            let max = v[0][i].max(v[1][i]).max(v[2][i]);
            if min > e[i] || max < -e[i] {
                return false;
            }
        }

        let normal = edges[0].cross(&edges[1]);
        if normal.magnitude_squared() < EPSILON * EPSILON {
            // Zero-area seam: the remaining axes already decided it
            return true;
        }

        let local_box = AABB::from_center_extents(Vec3::zeros(), e);
        Plane::from_point_normal(v[0], normal).intersects_aabb(&local_box)
    }
}

/// Closest points between two segments
#[derive(Debug, Clone, Copy)]
pub struct SegmentClosest {
    /// Parameter along the first segment, in `[0, 1]`
    pub s: f32,
    /// Parameter along the second segment, in `[0, 1]`
    pub t: f32,
    /// Closest point on the first segment
    pub point_a: Vec3,
    /// Closest point on the second segment
    pub point_b: Vec3,
    /// Squared distance between the two points
    pub distance_squared: f32,
}

/// Closest points between segments `p1..q1` and `p2..q2`
///
/// Clamped parametrisation (Ericson, Real-Time Collision Detection 5.1.9) with
/// explicit branches for zero-length and parallel segments.
pub fn closest_points_between_segments(p1: Vec3, q1: Vec3, p2: Vec3, q2: Vec3) -> SegmentClosest {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.dot(&d1);
    let e = d2.dot(&d2);
    let f = d2.dot(&r);

    let (s, t) = if a <= EPSILON && e <= EPSILON {
        // Both segments degenerate into points
        (0.0, 0.0)
    } else if a <= EPSILON {
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(&r);
        if e <= EPSILON {
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;

            // Parallel segments: any s works, pick the start
            let s = if denom > EPSILON * a * e {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let t = (b * s + f) / e;
            if t < 0.0 {
                ((-c / a).clamp(0.0, 1.0), 0.0)
            } else if t > 1.0 {
                (((b - c) / a).clamp(0.0, 1.0), 1.0)
            } else {
                (s, t)
            }
        }
    };

    let point_a = p1 + d1 * s;
    let point_b = p2 + d2 * t;
    SegmentClosest {
        s,
        t,
        point_a,
        point_b,
        distance_squared: (point_b - point_a).magnitude_squared(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn floor_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
        )
    }

    #[test]
    fn test_ray_triangle_hit_and_miss() {
        let tri = floor_triangle();
        let down = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let (t, _, _) = tri.intersect_ray(&down).unwrap();
        assert_relative_eq!(t, 5.0);

        let up = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::y());
        assert!(tri.intersect_ray(&up).is_none());
    }

    #[test]
    fn test_segment_triangle() {
        let tri = floor_triangle();
        let (t, point) = tri
            .intersect_segment(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0))
            .unwrap();
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(point, Vec3::zeros());

        // Segment stops short of the plane
        assert!(tri
            .intersect_segment(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
            .is_none());
    }

    #[test]
    fn test_triangle_aabb_sat() {
        let aabb = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Crosses the box through the middle
        assert!(floor_triangle().intersects_aabb(&aabb));

        // Lies entirely above the box
        let above = floor_triangle().translated(Vec3::new(0.0, 2.0, 0.0));
        assert!(!above.intersects_aabb(&aabb));

        // Large triangle whose vertices are all outside the box but whose plane cuts it
        let big = Triangle::new(
            Vec3::new(-10.0, 0.5, -10.0),
            Vec3::new(0.0, 0.5, 10.0),
            Vec3::new(10.0, 0.5, -10.0),
        );
        assert!(big.intersects_aabb(&aabb));

        // Slanted triangle past a box edge: every box axis overlaps, its plane does not
        let corner = Triangle::new(
            Vec3::new(2.0, 0.8, -5.0),
            Vec3::new(2.0, 0.8, 5.0),
            Vec3::new(0.8, 2.0, 0.0),
        );
        assert!(!corner.intersects_aabb(&aabb));
    }

    #[test]
    fn test_degenerate_triangle_is_tolerated() {
        let seam = Triangle::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        assert!(seam.is_degenerate());
        assert_eq!(seam.normal(), Vec3::zeros());
        let aabb = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(seam.intersects_aabb(&aabb));
        assert!(seam.intersect_ray(&Ray::new(Vec3::new(0.5, 1.0, 0.0), -Vec3::y())).is_none());
    }

    #[test]
    fn test_closest_point_regions() {
        let tri = floor_triangle();
        assert_relative_eq!(tri.closest_point(Vec3::new(0.0, 3.0, 0.0)), Vec3::zeros());
        assert_relative_eq!(tri.closest_point(Vec3::new(-5.0, 0.0, -5.0)), tri.v0);
    }

    #[test]
    fn test_sphere_aabb_overlap() {
        let aabb = AABB::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        assert!(BoundingSphere::new(Vec3::new(1.5, 0.5, 0.5), 0.5).intersects_aabb(&aabb));
        assert!(!BoundingSphere::new(Vec3::new(1.5, 1.5, 1.5), 0.5).intersects_aabb(&aabb));
        assert!(BoundingSphere::new(Vec3::new(0.5, 0.5, 0.5), 0.01).intersects_aabb(&aabb));
    }

    #[test]
    fn test_segment_closest_points() {
        // Crossing segments one unit apart
        let closest = closest_points_between_segments(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(0.0, 1.0, 1.0),
        );
        assert_relative_eq!(closest.distance_squared, 1.0);
        assert_relative_eq!(closest.s, 0.5);
        assert_relative_eq!(closest.t, 0.5);

        // Parallel segments
        let parallel = closest_points_between_segments(
            Vec3::zeros(),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(2.0, 3.0, 0.0),
        );
        assert_relative_eq!(parallel.distance_squared, 9.0);

        // Both degenerate
        let points = closest_points_between_segments(
            Vec3::zeros(),
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, 2.0),
        );
        assert_relative_eq!(points.distance_squared, 4.0);
    }
}
