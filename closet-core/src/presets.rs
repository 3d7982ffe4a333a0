//! Closet types and auto-create tower presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::IdSource;
use crate::room::Room;
use crate::tower::{Accessory, RodCount, RodPosition, Tower};
use crate::{CabinetSpec, ClosetError};

/// Default tower height used by the closet types.
const DEFAULT_TOWER_HEIGHT: f64 = 213.0;

/// Default cabinet depth used by the closet types.
const DEFAULT_DEPTH: f64 = 61.0;

/// Target tower width the auto-create presets divide the cabinet by.
const AUTO_TOWER_WIDTH: f64 = 60.0;

/// The kind of closet a configuration starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosetType {
    /// Accessed from the front, 2-8 feet wide.
    ReachIn,
    /// Room-sized, towers on multiple walls.
    WalkIn,
    /// Blank room, everything from scratch.
    Custom,
}

impl ClosetType {
    /// All closet types, in menu order.
    pub const ALL: [Self; 3] = [Self::ReachIn, Self::WalkIn, Self::Custom];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReachIn => "reach_in",
            Self::WalkIn => "walk_in",
            Self::Custom => "custom",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ReachIn => "Reach-In Closet",
            Self::WalkIn => "Walk-In Closet",
            Self::Custom => "Custom Layout",
        }
    }

    /// Menu description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ReachIn => {
                "A standard closet accessed from the front, typically 2-8 feet wide. \
                 Great for bedrooms, hallways, and entryways."
            }
            Self::WalkIn => {
                "A spacious room-sized closet you can walk into. Configure towers on \
                 multiple walls with full customization."
            }
            Self::Custom => {
                "Start with a blank room and design everything from scratch. Full control \
                 over room shape, walls, and closet placement."
            }
        }
    }

    /// Default room width, depth and height.
    #[must_use]
    pub const fn room_dims(self) -> (f64, f64, f64) {
        match self {
            Self::ReachIn => (183.0, 61.0, 244.0),
            Self::WalkIn | Self::Custom => (244.0, 244.0, 244.0),
        }
    }

    /// Default room for this type.
    pub fn room(self, ids: &mut dyn IdSource) -> Room {
        let (width, depth, height) = self.room_dims();
        Room::rectangular(ids, width, depth, height)
    }

    /// Default cabinet box for this type.
    #[must_use]
    pub const fn cabinet(self) -> CabinetSpec {
        let width = match self {
            Self::ReachIn => 183.0,
            Self::WalkIn => 244.0,
            Self::Custom => 120.0,
        };
        CabinetSpec::new(width, DEFAULT_TOWER_HEIGHT, DEFAULT_DEPTH, 2.0)
    }

    /// Default towers for this type.
    pub fn towers(self, ids: &mut dyn IdSource) -> Vec<Tower> {
        let (count, width) = match self {
            Self::ReachIn => (2, 91.5),
            Self::WalkIn => (4, 61.0),
            Self::Custom => (1, 120.0),
        };
        (1..=count)
            .map(|index| {
                Tower::with_defaults(ids, width, DEFAULT_DEPTH, DEFAULT_TOWER_HEIGHT, index)
            })
            .collect()
    }
}

impl fmt::Display for ClosetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClosetType {
    type Err = ClosetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ClosetError::UnknownClosetType(s.to_string()))
    }
}

/// One-click tower layouts offered by the "Auto Create" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoCreatePreset {
    /// Shelving towers across the full width.
    BasicShelves,
    /// Alternating double-rod and shelf towers.
    HangingAndShelves,
    /// Two rods in every tower.
    DoubleHang,
    /// Alternating drawer and shelf towers.
    DrawersAndShelves,
    /// Shoe shelves below a high rod.
    ShoeCloset,
}

impl AutoCreatePreset {
    /// All presets, in menu order.
    pub const ALL: [Self; 5] = [
        Self::BasicShelves,
        Self::HangingAndShelves,
        Self::DoubleHang,
        Self::DrawersAndShelves,
        Self::ShoeCloset,
    ];

    /// Wire id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BasicShelves => "basic-shelves",
            Self::HangingAndShelves => "hanging-and-shelves",
            Self::DoubleHang => "double-hang",
            Self::DrawersAndShelves => "drawers-and-shelves",
            Self::ShoeCloset => "shoe-closet",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BasicShelves => "Basic Shelves",
            Self::HangingAndShelves => "Hanging + Shelves",
            Self::DoubleHang => "Double Hang",
            Self::DrawersAndShelves => "Drawers + Shelves",
            Self::ShoeCloset => "Shoe Closet",
        }
    }

    /// Fewest towers the preset will create.
    const fn min_towers(self) -> usize {
        match self {
            Self::BasicShelves | Self::DoubleHang => 1,
            Self::HangingAndShelves | Self::DrawersAndShelves | Self::ShoeCloset => 2,
        }
    }

    /// Number of towers for a given width: one per ~60 cm.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tower_count(self, width: f64) -> usize {
        let rounded = (width / AUTO_TOWER_WIDTH).round();
        let count = if rounded.is_finite() && rounded > 0.0 {
            rounded as usize
        } else {
            0
        };
        count.max(self.min_towers())
    }

    /// Accessories for the 0-based tower `index`.
    fn accessories(self, index: usize) -> Vec<Accessory> {
        let double_hang = || {
            vec![
                Accessory::rod(RodPosition::High, RodCount::Single),
                Accessory::rod(RodPosition::Low, RodCount::Single),
            ]
        };
        let even = index % 2 == 0;
        match self {
            Self::BasicShelves => vec![
                Accessory::rod(RodPosition::High, RodCount::Single),
                Accessory::shelves(3),
            ],
            Self::HangingAndShelves if even => double_hang(),
            Self::HangingAndShelves => vec![Accessory::shelves(5)],
            Self::DoubleHang => double_hang(),
            Self::DrawersAndShelves if even => {
                vec![Accessory::drawers(3, 15.0), Accessory::shelves(2)]
            }
            Self::DrawersAndShelves => vec![Accessory::shelves(5)],
            Self::ShoeCloset => vec![
                Accessory::rod(RodPosition::High, RodCount::Single),
                Accessory::shoe_shelves(4),
            ],
        }
    }

    /// Create equal-width towers filling `width`.
    #[allow(clippy::cast_precision_loss)]
    pub fn create_towers(
        self,
        ids: &mut dyn IdSource,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Vec<Tower> {
        let count = self.tower_count(width);
        let tower_width = width / count as f64;
        (0..count)
            .map(|i| {
                Tower::with_defaults(ids, tower_width, depth, height, i + 1)
                    .with_accessories(self.accessories(i))
            })
            .collect()
    }
}

impl fmt::Display for AutoCreatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AutoCreatePreset {
    type Err = ClosetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ClosetError::UnknownPreset(s.to_string()))
    }
}
