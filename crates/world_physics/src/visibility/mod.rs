//! Visibility layer grid
//!
//! Maps world positions to grid cells ("layers") and computes the set of
//! layers a renderer should keep visible around each tracked entity.

pub mod layer_grid;

pub use layer_grid::{
    get_active_layers, get_center_of_layer, get_layer, ActiveLayerTracker, LayerDiff, LayerGrid,
    LayerId,
};
