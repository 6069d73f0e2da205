//! # World Settings
//!
//! Tunables for the static index, the stepper and the visibility grid,
//! loadable from `.toml` or `.ron` through [`Config`]. Every field has a
//! default, so a settings file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::Vec3;
use crate::spatial::{OctreeError, OctreeIndex, AABB};
use crate::visibility::LayerGrid;

/// # Octree Settings
///
/// Bounds and depth of a scene's static index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeSettings {
    /// Minimum corner of the indexed region
    pub min: Vec3,
    /// Maximum corner of the indexed region
    pub max: Vec3,
    /// Deepest subdivision level
    pub max_depth: u32,
}

impl OctreeSettings {
    /// Cube of side `2 * half_size` centred on the origin
    pub fn centered(half_size: f32, max_depth: u32) -> Self {
        Self {
            min: Vec3::repeat(-half_size),
            max: Vec3::repeat(half_size),
            max_depth,
        }
    }

    /// Indexed region
    pub fn bounds(&self) -> AABB {
        AABB::new(self.min, self.max)
    }

    /// Allocate an empty index with these settings
    pub fn build(&self) -> Result<OctreeIndex, OctreeError> {
        OctreeIndex::new(self.bounds(), self.max_depth)
    }
}

impl Default for OctreeSettings {
    fn default() -> Self {
        Self::centered(128.0, 4)
    }
}

/// # Stepper Settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperSettings {
    /// Added to each body's radius so resting bodies still see the floor
    pub ground_padding: f32,
    /// Query depth for every index; `None` uses each index's own `max_depth`
    pub query_depth: Option<u32>,
}

impl StepperSettings {
    /// Set the ground padding
    pub fn with_ground_padding(mut self, padding: f32) -> Self {
        self.ground_padding = padding;
        self
    }

    /// Query every index at a fixed depth
    pub fn with_query_depth(mut self, depth: u32) -> Self {
        self.query_depth = Some(depth);
        self
    }
}

impl Default for StepperSettings {
    fn default() -> Self {
        Self {
            ground_padding: 0.1,
            query_depth: None,
        }
    }
}

/// # Layer Grid Settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerGridSettings {
    /// Side length of the square world
    pub world_size: f32,
    /// Cells per side
    pub grid_n: u32,
    /// Rings of neighbours kept visible
    pub ring_radius: u32,
}

impl LayerGridSettings {
    /// Grid described by these settings
    pub fn grid(&self) -> LayerGrid {
        LayerGrid::new(self.world_size, self.grid_n, self.ring_radius)
    }
}

impl Default for LayerGridSettings {
    fn default() -> Self {
        Self {
            world_size: 512.0,
            grid_n: 16,
            ring_radius: 1,
        }
    }
}

/// # Complete World Settings
///
/// Top-level settings a host loads once per scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Static index
    pub octree: OctreeSettings,
    /// Per-frame stepper
    pub stepper: StepperSettings,
    /// Visibility grid
    pub layers: LayerGridSettings,
}

impl Config for WorldSettings {}
