//! Position ↔ layer mapping for visibility culling
//!
//! The world's XZ plane is split into `grid_n × grid_n` square cells centred
//! on the origin. Cells are numbered `1..=grid_n²` row-major; columns count
//! from +X toward -X and rows from +Z toward -Z. Layer 0 is reserved for
//! content that is never culled.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// One cell of the visibility grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u32);

impl LayerId {
    /// Reserved id for content that is always visible
    pub const ALWAYS_VISIBLE: LayerId = LayerId(0);

    /// Raw id
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {}", self.0)
    }
}

/// Cells in a `grid_n × grid_n` grid, `None` when ids would not fit in a `u32`
fn cell_count(grid_n: u32) -> Option<u32> {
    grid_n.checked_mul(grid_n)
}

fn is_valid_grid(world_size: f32, grid_n: u32) -> bool {
    grid_n > 0 && cell_count(grid_n).is_some() && world_size.is_finite() && world_size > 0.0
}

/// 1-based grid coordinate along one axis
fn axis_cell(coord: f32, world_size: f32, grid_n: u32) -> u32 {
    let cell_size = world_size / grid_n as f32;
    let cell = ((world_size - (coord + world_size * 0.5)) / cell_size).ceil();
    (cell as u32).clamp(1, grid_n)
}

/// Layer containing `position`, `None` outside the open square `|x|, |z| < world_size / 2`
pub fn get_layer(position: Vec3, world_size: f32, grid_n: u32) -> Option<LayerId> {
    if !is_valid_grid(world_size, grid_n) {
        return None;
    }

    let half = world_size * 0.5;
    // NaN fails both comparisons and lands here too
    if !(position.x.abs() < half && position.z.abs() < half) {
        return None;
    }

    let col = axis_cell(position.x, world_size, grid_n);
    let row = axis_cell(position.z, world_size, grid_n);
    Some(LayerId((row - 1) * grid_n + col))
}

/// `layer` plus the cross and diagonal rings around it out to `ring_radius`
///
/// Ring cells are taken in row/column space, so a layer on the grid's edge
/// never picks up cells that wrap around from the opposite edge. The result
/// is ascending and unique; an out-of-range `layer` yields nothing.
pub fn get_active_layers(layer: LayerId, grid_n: u32, ring_radius: u32) -> Vec<LayerId> {
    let Some(cells) = cell_count(grid_n) else {
        return Vec::new();
    };
    if layer.0 == 0 || layer.0 > cells {
        return Vec::new();
    }

    let n = grid_n as i64;
    let row = (layer.0 as i64 - 1) / n;
    let col = (layer.0 as i64 - 1) % n;

    let mut active = BTreeSet::new();
    active.insert(layer);

    for i in 1..=ring_radius as i64 {
        let offsets = [(i, 0), (-i, 0), (0, i), (0, -i), (i, i), (i, -i), (-i, i), (-i, -i)];
        for (dr, dc) in offsets {
            let (r, c) = (row + dr, col + dc);
            if (0..n).contains(&r) && (0..n).contains(&c) {
                active.insert(LayerId((r * n + c + 1) as u32));
            }
        }
    }

    active.into_iter().collect()
}

/// Center of `layer`'s cell on the ground plane (y = 0)
pub fn get_center_of_layer(layer: LayerId, world_size: f32, grid_n: u32) -> Option<Vec3> {
    if !is_valid_grid(world_size, grid_n) {
        return None;
    }
    let cells = cell_count(grid_n)?;
    if layer.0 == 0 || layer.0 > cells {
        return None;
    }

    let cell_size = world_size / grid_n as f32;
    let row = (layer.0 - 1) / grid_n + 1;
    let col = (layer.0 - 1) % grid_n + 1;

    let half = world_size * 0.5;
    Some(Vec3::new(
        half - (col as f32 - 0.5) * cell_size,
        0.0,
        half - (row as f32 - 0.5) * cell_size,
    ))
}

/// A configured visibility grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerGrid {
    /// Side length of the square world
    pub world_size: f32,
    /// Cells per side
    pub grid_n: u32,
    /// Ring radius used for active sets
    pub ring_radius: u32,
}

impl LayerGrid {
    /// Create a grid
    pub fn new(world_size: f32, grid_n: u32, ring_radius: u32) -> Self {
        Self {
            world_size,
            grid_n,
            ring_radius,
        }
    }

    /// Side length of one cell
    pub fn cell_size(&self) -> f32 {
        self.world_size / self.grid_n.max(1) as f32
    }

    /// Number of cells, `None` when `grid_n²` overflows a `u32`
    pub fn layer_count(&self) -> Option<u32> {
        cell_count(self.grid_n)
    }

    /// See [`get_layer`]
    pub fn layer_at(&self, position: Vec3) -> Option<LayerId> {
        get_layer(position, self.world_size, self.grid_n)
    }

    /// See [`get_active_layers`]
    pub fn active_layers(&self, layer: LayerId) -> Vec<LayerId> {
        get_active_layers(layer, self.grid_n, self.ring_radius)
    }

    /// Active set around `position`, empty outside the grid
    pub fn active_layers_at(&self, position: Vec3) -> Vec<LayerId> {
        self.layer_at(position)
            .map(|layer| self.active_layers(layer))
            .unwrap_or_default()
    }

    /// See [`get_center_of_layer`]
    pub fn center_of(&self, layer: LayerId) -> Option<Vec3> {
        get_center_of_layer(layer, self.world_size, self.grid_n)
    }
}

/// Change in the active set between two frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerDiff {
    /// Layers that became active (ascending)
    pub shown: Vec<LayerId>,
    /// Layers that stopped being active (ascending)
    pub hidden: Vec<LayerId>,
    /// Whether the tracked entity's own layer changed
    pub layer_changed: bool,
}

impl LayerDiff {
    /// True when nothing needs toggling
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.hidden.is_empty()
    }
}

/// Per-entity active-set state, diffed frame to frame
#[derive(Debug, Clone, Default)]
pub struct ActiveLayerTracker {
    current: BTreeSet<LayerId>,
    previous: BTreeSet<LayerId>,
    last_layer: Option<LayerId>,
}

impl ActiveLayerTracker {
    /// Tracker with nothing active
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the active set for `position` and report what changed
    pub fn update(&mut self, position: Vec3, grid: &LayerGrid) -> LayerDiff {
        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();

        let layer = grid.layer_at(position);
        self.current.extend(layer.map(|l| grid.active_layers(l)).unwrap_or_default());

        let layer_changed = layer != self.last_layer;
        if layer_changed {
            log::trace!("Tracked layer changed {:?} -> {:?}", self.last_layer, layer);
        }
        self.last_layer = layer;

        LayerDiff {
            shown: self.current.difference(&self.previous).copied().collect(),
            hidden: self.previous.difference(&self.current).copied().collect(),
            layer_changed,
        }
    }

    /// Currently active layers
    pub fn active(&self) -> &BTreeSet<LayerId> {
        &self.current
    }

    /// Whether `layer` should be rendered
    pub fn is_visible(&self, layer: LayerId) -> bool {
        layer == LayerId::ALWAYS_VISIBLE || self.current.contains(&layer)
    }

    /// Layer seen on the last update (`None` outside the grid or before the first update)
    pub fn last_layer(&self) -> Option<LayerId> {
        self.last_layer
    }

    /// Forget all state
    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.last_layer = None;
    }
}
