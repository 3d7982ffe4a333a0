//! Dimensional limits shared by the validator and the export serializer.
//!
//! All values are in centimetres unless noted.

use serde::Serialize;

use crate::numeric;

/// An inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Range {
    /// Create a range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether a finite value lies within the range.
    ///
    /// Non-finite values are never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Coerce then clamp a raw value into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        numeric::clamp(numeric::coerce(value), self.min, self.max)
    }
}

/// Limits on the outer cabinet box.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CabinetLimits {
    /// Outer width.
    pub width: Range,
    /// Outer height.
    pub height: Range,
    /// Outer depth.
    pub depth: Range,
    /// Panel thickness.
    pub thickness: Range,
}

/// Limits on individual towers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TowerLimits {
    /// Tower width.
    pub width: Range,
    /// Tower depth override.
    pub depth: Range,
    /// Tower height override.
    pub height: Range,
    /// Maximum number of towers in one closet.
    pub max_per_closet: usize,
}

/// Limits on accessory counts and sizes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AccessoryLimits {
    /// Shelves per shelf set.
    pub shelves: Range,
    /// Rods per rod accessory.
    pub rods: Range,
    /// Drawers per drawer stack.
    pub drawers: Range,
    /// Height of a single drawer.
    pub drawer_height: Range,
    /// Slots per shoe shelf accessory.
    pub shoe_shelf: Range,
}

/// Limits on the surrounding room.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoomLimits {
    /// Length of a single wall.
    pub wall_length: Range,
    /// Ceiling height.
    pub height: Range,
}

/// Cabinet box limits.
pub const CABINET: CabinetLimits = CabinetLimits {
    width: Range::new(30.0, 600.0),
    height: Range::new(100.0, 300.0),
    depth: Range::new(30.0, 100.0),
    thickness: Range::new(1.0, 6.0),
};

/// Tower limits.
pub const TOWER: TowerLimits = TowerLimits {
    width: Range::new(20.0, 200.0),
    depth: Range::new(20.0, 100.0),
    height: Range::new(50.0, 300.0),
    max_per_closet: 12,
};

/// Accessory limits.
pub const ACCESSORY: AccessoryLimits = AccessoryLimits {
    shelves: Range::new(0.0, 10.0),
    rods: Range::new(0.0, 2.0),
    drawers: Range::new(0.0, 6.0),
    drawer_height: Range::new(8.0, 30.0),
    shoe_shelf: Range::new(0.0, 8.0),
};

/// Room limits.
pub const ROOM: RoomLimits = RoomLimits {
    wall_length: Range::new(30.0, 1200.0),
    height: Range::new(200.0, 400.0),
};

/// Towers may overshoot the inner width by this much before it is an error.
pub const TOWER_WIDTH_TOLERANCE: f64 = 0.5;

/// A gap larger than this between towers and inner width is reported.
pub const TOWER_GAP_WARNING: f64 = 1.0;
