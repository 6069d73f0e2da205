//! Integration tests for the narrow-phase detectors: fixed scenarios,
//! argument-order symmetry and determinism

use approx::assert_relative_eq;
use world_physics::prelude::*;

fn assert_mirrored(ab: &CollisionResult, ba: &CollisionResult) {
    assert_eq!(ab.intersect, ba.intersect);
    assert_relative_eq!(ab.distance, ba.distance, epsilon = 1e-6);
    if ab.intersect {
        assert_relative_eq!(ab.normal_a, ba.normal_b, epsilon = 1e-5);
        assert_relative_eq!(ab.normal_b, ba.normal_a, epsilon = 1e-5);
    }
}

#[test]
fn test_unit_boxes_one_unit_apart() {
    let a = OrientedBox::axis_aligned(Vec3::zeros(), Vec3::repeat(0.5));
    let b = OrientedBox::axis_aligned(Vec3::new(2.0, 0.0, 0.0), Vec3::repeat(0.5));
    let result = box_box(&a, &b);
    assert!(!result.intersect);
    assert_eq!(result, CollisionResult::default());
}

#[test]
fn test_unit_spheres_overlapping() {
    let result = sphere_sphere(&Sphere::new(Vec3::zeros(), 1.0), &Sphere::new(Vec3::new(1.9, 0.0, 0.0), 1.0));
    assert!(result.intersect);
    assert_relative_eq!(result.distance, 1.9);
    assert!(result.distance < 2.0);
}

#[test]
fn test_touching_spheres_intersect() {
    for offset in [Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 0.0, 3.0)] {
        let radius_b = offset.magnitude() - 1.0;
        let result = sphere_sphere(&Sphere::new(Vec3::zeros(), 1.0), &Sphere::new(offset, radius_b));
        assert!(result.intersect, "offset {offset:?}");
    }
}

#[test]
fn test_sphere_symmetry() {
    let pairs = [
        (Sphere::new(Vec3::new(0.3, -1.0, 2.0), 0.7), Sphere::new(Vec3::new(1.0, -0.5, 2.4), 0.4)),
        (Sphere::new(Vec3::zeros(), 1.0), Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0)),
        (
            Sphere::new(Vec3::new(-2.0, 0.0, 0.0), 1.0).with_scale(Vec3::new(2.0, 1.0, 1.0)),
            Sphere::new(Vec3::new(0.5, 0.5, 0.0), 0.6),
        ),
        (Sphere::new(Vec3::zeros(), 1.0), Sphere::new(Vec3::zeros(), 0.5)),
    ];
    for (a, b) in &pairs {
        assert_mirrored(&sphere_sphere(a, b), &sphere_sphere(b, a));
    }
}

#[test]
fn test_capsule_symmetry() {
    let pairs = [
        (
            Capsule::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.3),
            Capsule::new(Vec3::new(0.0, 0.5, -1.0), Vec3::new(0.0, 0.5, 1.0), 0.3),
        ),
        (
            Capsule::upright(Vec3::zeros(), 1.8, 0.35),
            Capsule::upright(Vec3::new(0.6, 0.2, 0.1), 1.8, 0.35),
        ),
        (
            Capsule::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 0.0), 0.2),
            Capsule::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 2.0), 0.2),
        ),
        (
            Capsule::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.3),
            Capsule::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.3),
        ),
    ];
    for (a, b) in &pairs {
        assert_mirrored(&capsule_capsule(a, b), &capsule_capsule(b, a));
    }
}

#[test]
fn test_hit_normals_are_unit_and_opposed() {
    let tilted = OrientedBox::new(
        Vec3::new(1.2, 0.4, -0.3),
        Quat::from_euler_angles(0.3, 0.7, -0.2),
        Vec3::new(0.8, 0.5, 0.6),
    );
    let results = [
        box_box(&OrientedBox::axis_aligned(Vec3::zeros(), Vec3::repeat(1.0)), &tilted),
        box_capsule(
            &OrientedBox::axis_aligned(Vec3::zeros(), Vec3::new(4.0, 0.5, 4.0)),
            &Capsule::upright(Vec3::new(1.0, 0.3, 1.0), 1.8, 0.3),
        ),
        capsule_capsule(
            &Capsule::upright(Vec3::zeros(), 2.0, 0.5),
            &Capsule::new(Vec3::new(-1.0, 1.0, 0.4), Vec3::new(1.0, 1.0, 0.4), 0.2),
        ),
        sphere_sphere(&Sphere::new(Vec3::zeros(), 1.0), &Sphere::new(Vec3::new(0.2, 0.9, -0.3), 0.5)),
    ];

    for result in &results {
        assert!(result.intersect);
        assert_relative_eq!(result.normal_a.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(result.normal_a, -result.normal_b);
        assert!(result.distance.is_finite());
        assert!(result.point.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_detectors_are_deterministic() {
    let box_a = OrientedBox::new(Vec3::new(0.1, 0.2, 0.3), Quat::from_euler_angles(0.5, 0.1, 0.9), Vec3::new(1.0, 0.6, 0.4));
    let box_b = OrientedBox::new(Vec3::new(0.9, 0.4, 0.1), Quat::from_euler_angles(-0.4, 0.3, 0.2), Vec3::new(0.5, 0.9, 0.7));
    let cap_a = Capsule::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 0.5), 0.4);
    let cap_b = Capsule::new(Vec3::new(1.0, 0.0, 1.0), Vec3::new(-1.0, 1.0, 0.0), 0.3);
    let sphere_a = Sphere::new(Vec3::new(0.4, 0.4, 0.4), 0.8);
    let sphere_b = Sphere::new(Vec3::new(1.0, 0.9, 0.2), 0.5);

    let run = || {
        [
            box_box(&box_a, &box_b),
            box_capsule(&box_a, &cap_a),
            capsule_capsule(&cap_a, &cap_b),
            sphere_sphere(&sphere_a, &sphere_b),
        ]
    };

    let first = run();
    let second = run();
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.intersect, b.intersect);
        assert_eq!(a.distance.to_bits(), b.distance.to_bits());
        for i in 0..3 {
            assert_eq!(a.point[i].to_bits(), b.point[i].to_bits());
            assert_eq!(a.normal_a[i].to_bits(), b.normal_a[i].to_bits());
        }
    }
}
