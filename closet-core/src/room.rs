//! The room around the closet: walls, placed items and colours.
//!
//! Only a summary of the room reaches the pricing payload; the full geometry
//! is kept for the floor-plan editor.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::ids::{IdKind, IdSource};
use crate::numeric::lenient_f64;

/// A 2D floor-plan point.
pub type Vec2 = [f64; 2];

/// A single wall segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    /// Wall identifier.
    pub id: String,
    /// Length of the wall.
    #[serde(deserialize_with = "lenient_f64")]
    pub length: f64,
    /// Start point in floor-plan coordinates.
    pub position: Vec2,
    /// Direction in radians (0 = +X).
    pub angle: f64,
    /// Whether a closet stands against this wall.
    pub has_closet: bool,
}

/// Kind of an item placed on a wall or the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacedItemType {
    /// Doorless opening.
    WallOpening,
    /// Double door.
    DoubleDoor,
    /// Single door.
    SingleDoor,
    /// Sliding door.
    SlidingDoor,
    /// Bifold door.
    BifoldDoor,
    /// Rectangular column.
    RectColumn,
    /// Round column.
    RoundColumn,
    /// Interior partition wall.
    InteriorWall,
    /// Window.
    Window,
    /// Air vent.
    Vent,
    /// Power outlet.
    Outlet,
    /// Light switch.
    LightSwitch,
    /// Photo hung on a wall.
    WallPhoto,
    /// Photo standing on the floor.
    FloorPhoto,
}

/// Broad grouping of placed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacedItemCategory {
    /// Doors and openings.
    Door,
    /// Columns and partitions.
    Architecture,
    /// Windows, vents, switches and photos.
    WallDecorator,
}

impl PlacedItemType {
    /// Category this item type belongs to.
    #[must_use]
    pub const fn category(self) -> PlacedItemCategory {
        match self {
            Self::WallOpening
            | Self::DoubleDoor
            | Self::SingleDoor
            | Self::SlidingDoor
            | Self::BifoldDoor => PlacedItemCategory::Door,
            Self::RectColumn | Self::RoundColumn | Self::InteriorWall => {
                PlacedItemCategory::Architecture
            }
            Self::Window
            | Self::Vent
            | Self::Outlet
            | Self::LightSwitch
            | Self::WallPhoto
            | Self::FloorPhoto => PlacedItemCategory::WallDecorator,
        }
    }
}

/// An item placed on a wall, or freestanding on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    /// Item identifier.
    pub id: String,
    /// Item kind.
    #[serde(rename = "type")]
    pub item_type: PlacedItemType,
    /// Item category.
    pub category: PlacedItemCategory,
    /// Owning wall; `None` for freestanding items such as columns.
    pub wall_id: Option<String>,
    /// Position along the wall.
    pub position_along_wall: f64,
    /// Item width.
    pub width: f64,
    /// Item height.
    pub height: f64,
}

impl PlacedItem {
    /// Create an item with a fresh id; the category follows from the type.
    pub fn new(
        ids: &mut dyn IdSource,
        item_type: PlacedItemType,
        wall_id: Option<String>,
        position_along_wall: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: ids.next_id(IdKind::Item),
            item_type,
            category: item_type.category(),
            wall_id,
            position_along_wall,
            width,
            height,
        }
    }
}

/// Cosmetic room colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomColors {
    /// Floor finish material id.
    pub floor_finish_id: String,
    /// Floor colour (hex).
    pub floor_color: String,
    /// Wall colour (hex).
    pub wall_color: String,
    /// Trim colour (hex).
    pub trim_color: String,
}

impl Default for RoomColors {
    fn default() -> Self {
        Self {
            floor_finish_id: "floor-default".to_string(),
            floor_color: "#d4c9b8".to_string(),
            wall_color: "#e8e4de".to_string(),
            trim_color: "#ffffff".to_string(),
        }
    }
}

/// Outline of the room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomShape {
    /// Four walls at right angles.
    #[default]
    Rectangular,
    /// L-shaped room.
    LShape,
    /// Free-form outline.
    Custom,
}

/// The room aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Outline.
    pub shape: RoomShape,
    /// Wall segments.
    pub walls: Vec<Wall>,
    /// Ceiling height.
    #[serde(deserialize_with = "lenient_f64")]
    pub height: f64,
    /// Doors, windows, columns and other placed items.
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    /// Colours.
    #[serde(default)]
    pub colors: RoomColors,
}

impl Room {
    /// Build a rectangular four-wall room centred on the origin.
    ///
    /// Walls run counter-clockwise starting with the front wall; the back
    /// wall (third) holds the closet.
    pub fn rectangular(ids: &mut dyn IdSource, width: f64, depth: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hd = depth / 2.0;
        let mut wall = |length: f64, position: Vec2, angle: f64, has_closet: bool| Wall {
            id: ids.next_id(IdKind::Wall),
            length,
            position,
            angle,
            has_closet,
        };

        let walls = vec![
            wall(width, [-hw, -hd], 0.0, false),
            wall(depth, [hw, -hd], PI / 2.0, false),
            wall(width, [hw, hd], PI, true),
            wall(depth, [-hw, hd], 3.0 * PI / 2.0, false),
        ];

        Self {
            shape: RoomShape::Rectangular,
            walls,
            height,
            items: Vec::new(),
            colors: RoomColors::default(),
        }
    }

    /// The wall the closet stands against, if any.
    #[must_use]
    pub fn closet_wall(&self) -> Option<&Wall> {
        self.walls.iter().find(|w| w.has_closet)
    }
}
