//! Collision layers for filtering which static indices a body queries
//!
//! Each registered index carries the layers its geometry belongs to and each
//! body carries a mask of layers it collides with. The stepper skips an index
//! whenever the two share no bit.

use bitflags::bitflags;

bitflags! {
    /// Layer membership / mask bits
    ///
    /// Bits 0-7 are the standard world categories; the remaining bits are free
    /// for scene-specific use via [`CollisionLayers::custom`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player avatars
        const PLAYER = 1 << 0;
        /// Non-player characters
        const NPC = 1 << 1;
        /// Projectiles (thrown items, bullets)
        const PROJECTILE = 1 << 2;
        /// Static environment geometry
        const ENVIRONMENT = 1 << 3;
        /// Trigger volumes (no physical response)
        const TRIGGER = 1 << 4;
        /// Debris and small loose objects
        const DEBRIS = 1 << 5;
        /// Vehicles
        const VEHICLE = 1 << 6;
        /// Pickups and collectibles
        const PICKUP = 1 << 7;

        // Scene-defined bits
        const _ = !0;
    }
}

impl CollisionLayers {
    /// First bit available to scene-defined layers
    pub const FIRST_CUSTOM_BIT: u32 = 8;

    /// Scene-defined layer `n` (bits 8-31), `None` when out of range
    pub fn custom(n: u32) -> Option<Self> {
        (Self::FIRST_CUSTOM_BIT..32)
            .contains(&n)
            .then(|| Self::from_bits_retain(1 << n))
    }

    /// One-sided test used for static geometry, which has no mask of its own
    ///
    /// # Example
    /// ```
    /// use world_physics::physics::CollisionLayers;
    ///
    /// let walker_mask = CollisionLayers::ENVIRONMENT | CollisionLayers::VEHICLE;
    /// assert!(CollisionLayers::accepts(walker_mask, CollisionLayers::ENVIRONMENT));
    /// assert!(!CollisionLayers::accepts(walker_mask, CollisionLayers::TRIGGER));
    /// ```
    pub fn accepts(mask: Self, layers: Self) -> bool {
        mask.intersects(layers)
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::ENVIRONMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_geometry_filtering() {
        let walker = CollisionLayers::ENVIRONMENT | CollisionLayers::VEHICLE;
        assert!(CollisionLayers::accepts(walker, CollisionLayers::ENVIRONMENT));
        assert!(!CollisionLayers::accepts(walker, CollisionLayers::TRIGGER));
        assert!(CollisionLayers::accepts(CollisionLayers::all(), CollisionLayers::TRIGGER));
        assert!(!CollisionLayers::accepts(CollisionLayers::empty(), CollisionLayers::all()));
    }

    #[test]
    fn test_custom_layers() {
        let water = CollisionLayers::custom(8).unwrap();
        assert_eq!(water.bits(), 1 << 8);
        assert!(CollisionLayers::all().contains(water));
        assert!(CollisionLayers::custom(31).is_some());
        assert!(CollisionLayers::custom(7).is_none());
        assert!(CollisionLayers::custom(32).is_none());
    }
}
