//! Headless World Demo
//!
//! Exercises the world_physics crate end to end without a renderer:
//! - Loads `WorldSettings` from an optional `.toml` / `.ron` path argument
//! - Builds a static index from a ground slab and a seeded scatter of crates
//! - Steps a walking body across the scene, printing layer visibility changes
//! - Edits the index between ticks (move, reindex, remove by tag)
//! - Runs each narrow-phase detector once

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use world_physics::foundation::{logging, math::utils};
use world_physics::prelude::*;

// Scene generation
const SEED: u64 = 0x5EED_CAFE;
const NUM_CRATES: usize = 40;
const CRATE_MIN_SIZE: f32 = 1.0;
const CRATE_MAX_SIZE: f32 = 4.0;
/// Crates keep out of |z - WALK_LANE_Z| < LANE_HALF_WIDTH
const WALK_LANE_Z: f32 = 10.0;
const LANE_HALF_WIDTH: f32 = 8.0;

// Simulation
const TICKS: usize = 240;
const DT: f32 = 1.0 / 30.0;
const WALK_SPEED: f32 = 12.0;
const WALKER_RADIUS: f32 = 0.5;
const WALKABLE_SLOPE: f32 = 0.7;

#[derive(Error, Debug)]
enum DemoError {
    #[error("failed to load settings: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build index: {0}")]
    Octree(#[from] OctreeError),
}

/// Per-frame input handed to every resolver
struct DemoInput {
    gravity: f32,
}

/// Walks along +X, falls under gravity, stands on walkable faces and slides off walls
struct Walker {
    center: Vec3,
    velocity: Vec3,
    radius: f32,
}

impl Walker {
    fn new(center: Vec3) -> Self {
        Self {
            center,
            velocity: Vec3::new(WALK_SPEED, 0.0, 0.0),
            radius: WALKER_RADIUS,
        }
    }

    /// Height of `face` directly under the walker, if it is walkable
    fn support_height(&self, face: &Face) -> Option<f32> {
        if face.normal.y <= WALKABLE_SLOPE {
            return None;
        }
        let closest = face.triangle().closest_point(self.center);
        ((closest - self.center).xz().magnitude() < 1e-3).then_some(closest.y)
    }
}

impl BodyController<DemoInput> for Walker {
    fn center(&self) -> Vec3 {
        self.center
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn collision_mask(&self) -> CollisionLayers {
        CollisionLayers::ENVIRONMENT
    }

    fn resolve(&mut self, faces: &[&Face], dt: f32, input: &DemoInput) {
        self.velocity.y -= input.gravity * dt;
        self.center += self.velocity * dt;

        // Walls: push out along the contact direction
        for face in faces.iter().filter(|face| face.normal.y.abs() < WALKABLE_SLOPE) {
            let closest = face.triangle().closest_point(self.center);
            let offset = self.center - closest;
            let distance = offset.magnitude();
            if distance < self.radius {
                let push = if distance > 1e-6 { offset / distance } else { face.normal };
                self.center += push * (self.radius - distance);
            }
        }

        // Floor: highest walkable face under the body
        let floor = faces
            .iter()
            .filter_map(|face| self.support_height(face))
            .fold(None, |best: Option<f32>, h| Some(best.map_or(h, |b| b.max(h))));

        if let Some(height) = floor {
            if self.center.y - self.radius <= height {
                self.center.y = height + self.radius;
                self.velocity.y = 0.0;
            }
        }
    }
}

fn load_settings() -> Result<WorldSettings, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading settings from {}", path);
            Ok(WorldSettings::load_from_file(path)?)
        }
        None => Ok(WorldSettings::default()),
    }
}

fn build_scene(settings: &OctreeSettings, rng: &mut StdRng) -> Result<OctreeIndex, DemoError> {
    let mut index = settings.build()?;
    let bounds = settings.bounds();

    let ground = AABB::new(
        Vec3::new(bounds.min.x, -1.0, bounds.min.z),
        Vec3::new(bounds.max.x, 0.0, bounds.max.z),
    );
    index.import_aabb(FaceLabel::new("ground", "terrain"), &ground);

    let reach = bounds.extents().x.min(bounds.extents().z) - CRATE_MAX_SIZE;
    for i in 0..NUM_CRATES {
        let size = Vec3::new(
            rng.gen_range(CRATE_MIN_SIZE..CRATE_MAX_SIZE),
            rng.gen_range(CRATE_MIN_SIZE..CRATE_MAX_SIZE),
            rng.gen_range(CRATE_MIN_SIZE..CRATE_MAX_SIZE),
        );
        let (lo, hi) = if rng.gen_bool(0.5) {
            (WALK_LANE_Z + LANE_HALF_WIDTH + size.z, reach)
        } else {
            (-reach, WALK_LANE_Z - LANE_HALF_WIDTH - size.z)
        };
        if reach <= 0.0 || lo >= hi {
            continue;
        }
        let x = rng.gen_range(-reach..reach);
        let z = rng.gen_range(lo..hi);

        let min = Vec3::new(x, 0.0, z) - Vec3::new(size.x * 0.5, 0.0, size.z * 0.5);
        let crate_box = AABB::new(min, min + size);
        index.import_aabb(FaceLabel::new(format!("crate_{i}"), "crates"), &crate_box);
    }

    let stats = index.stats();
    log::info!(
        "Scene: {} faces, {} node entries, {}/{} nodes occupied",
        stats.faces,
        stats.node_entries,
        stats.occupied_nodes,
        stats.total_nodes
    );
    Ok(index)
}

fn edit_scene(stepper: &mut WorldStepper<DemoInput>, handle: IndexHandle) {
    let Some(index) = stepper.index_mut::<OctreeIndex>(handle) else {
        return;
    };

    let moved = index.translate_by_name("crate_0", Vec3::new(0.0, 0.0, 2.0));
    let reindexed = index.reindex_by_name("crate_0");
    println!("Moved crate_0: {} faces translated, {} reindexed", moved, reindexed);

    let down = Ray::new(Vec3::new(0.25, 50.0, WALK_LANE_Z), -Vec3::y());
    if let Some(hit) = index.raycast(&down, 100.0) {
        let name = index.face(hit.face).map_or("?", |face| face.name.as_str());
        println!("Raycast down hit '{}' at {:?} (distance {:.2})", name, hit.point, hit.distance);
    }

    let removed = index.remove_by_tag("crates");
    println!("Removed {} crate faces; {} faces remain", removed, index.face_count());
}

fn run_detectors() {
    println!();
    println!("Narrow-phase checks:");

    let spheres = sphere_sphere(
        &Sphere::new(Vec3::zeros(), 1.0),
        &Sphere::new(Vec3::new(1.9, 0.0, 0.0), 1.0),
    );
    println!("  sphere/sphere:   {:?}", spheres);

    let capsules = capsule_capsule(
        &Capsule::upright(Vec3::zeros(), 1.8, 0.35),
        &Capsule::upright(Vec3::new(0.5, 0.0, 0.2), 1.8, 0.35),
    );
    println!("  capsule/capsule: {:?}", capsules);

    let step = OrientedBox::axis_aligned(Vec3::new(0.0, 0.25, 0.0), Vec3::new(1.0, 0.25, 1.0));
    let box_capsule_hit = box_capsule(&step, &Capsule::upright(Vec3::new(0.3, 0.2, 0.0), 1.8, 0.35));
    println!("  box/capsule:     {:?}", box_capsule_hit);

    let tilted = OrientedBox::new(
        Vec3::new(1.6, 0.3, 0.0),
        Quat::from_euler_angles(0.0, 0.0, utils::deg_to_rad(35.0)),
        Vec3::repeat(0.5),
    );
    println!("  box/box:         {:?}", box_box(&step, &tilted));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    println!("=== World Physics Demo ===");

    let settings = load_settings()?;
    let mut rng = StdRng::seed_from_u64(SEED);
    let index = build_scene(&settings.octree, &mut rng)?;

    let grid = settings.layers.grid();
    let mut stepper = WorldStepper::new(settings.stepper.clone());
    let scene = stepper.register_index(index, CollisionLayers::ENVIRONMENT);

    let start = Vec3::new(-60.0, 4.0, WALK_LANE_Z);
    let walker = stepper.register_body(Box::new(Walker::new(start)));

    let input = DemoInput { gravity: 9.8 };
    let mut tracker = ActiveLayerTracker::new();
    let mut candidates = 0;

    for tick in 0..TICKS {
        candidates += stepper.step(DT, &input).candidates_total;

        let Some(sphere) = stepper.bounding_sphere_for(walker) else {
            break;
        };
        let diff = tracker.update(sphere.center, &grid);
        if diff.layer_changed {
            println!(
                "tick {:>3}: walker at ({:>6.1}, {:>4.1}, {:>5.1}) now in {:?}; show {:?}, hide {:?}",
                tick,
                sphere.center.x,
                sphere.center.y,
                sphere.center.z,
                tracker.last_layer(),
                diff.shown.iter().map(|l| l.get()).collect::<Vec<_>>(),
                diff.hidden.iter().map(|l| l.get()).collect::<Vec<_>>(),
            );
        }
    }

    println!(
        "Stepped {} ticks, {} candidate faces handed to resolvers",
        TICKS, candidates
    );

    edit_scene(&mut stepper, scene);
    run_detectors();

    Ok(())
}
