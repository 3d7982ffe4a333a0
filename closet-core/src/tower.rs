//! Towers and the accessories placed inside them.

use serde::{Deserialize, Serialize};

use crate::ids::{IdKind, IdSource};
use crate::numeric::{lenient_f64, lenient_i32};
use crate::ClosetError;

/// Vertical placement of a hanging rod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RodPosition {
    /// 80% of the inner height.
    High,
    /// Half of the inner height.
    Medium,
    /// A quarter of the inner height.
    Low,
}

impl RodPosition {
    /// Fraction of the inner height the rod hangs at, measured from the
    /// cabinet's bottom edge.
    #[must_use]
    pub const fn height_fraction(self) -> f64 {
        match self {
            Self::High => 0.8,
            Self::Medium => 0.5,
            Self::Low => 0.25,
        }
    }

    /// Lowercase name, as used in part IDs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Number of rods in a rod accessory. Serialized as the integer `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RodCount {
    /// A single rod.
    Single,
    /// Two rods stacked vertically.
    Double,
}

impl RodCount {
    /// Number of rods as an integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

impl TryFrom<u8> for RodCount {
    type Error = ClosetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            other => Err(ClosetError::InvalidRodCount(other)),
        }
    }
}

impl From<RodCount> for u8 {
    fn from(count: RodCount) -> Self {
        count.get()
    }
}

/// A fitting placed inside a tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    /// Hanging rod(s).
    Rod {
        /// Vertical placement.
        position: RodPosition,
        /// One or two rods.
        count: RodCount,
    },
    /// Evenly spaced flat shelves.
    ShelfSet {
        /// Number of shelves.
        #[serde(deserialize_with = "lenient_i32")]
        count: i32,
    },
    /// Angled shoe display shelves.
    ShoeShelf {
        /// Number of shoe slots.
        #[serde(deserialize_with = "lenient_i32")]
        count: i32,
    },
    /// A stack of drawers from the bottom of the tower.
    Drawer {
        /// Number of drawers.
        #[serde(deserialize_with = "lenient_i32")]
        count: i32,
        /// Height of each drawer.
        #[serde(rename = "drawerHeight", deserialize_with = "lenient_f64")]
        drawer_height: f64,
    },
    /// Decorative prop (clothes, shoes); rendered but never a solid part.
    Prop {
        /// Prop catalog identifier.
        #[serde(rename = "propId")]
        prop_id: String,
    },
}

impl Accessory {
    /// Shorthand for a rod accessory.
    #[must_use]
    pub const fn rod(position: RodPosition, count: RodCount) -> Self {
        Self::Rod { position, count }
    }

    /// Shorthand for a shelf set.
    #[must_use]
    pub const fn shelves(count: i32) -> Self {
        Self::ShelfSet { count }
    }

    /// Shorthand for a shoe shelf accessory.
    #[must_use]
    pub const fn shoe_shelves(count: i32) -> Self {
        Self::ShoeShelf { count }
    }

    /// Shorthand for a drawer stack.
    #[must_use]
    pub const fn drawers(count: i32, drawer_height: f64) -> Self {
        Self::Drawer {
            count,
            drawer_height,
        }
    }
}

/// Coarse accessory amount picked with the slider UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryLevel {
    /// No accessories.
    None,
    /// One.
    Low,
    /// Three.
    Medium,
    /// Five.
    High,
}

impl AccessoryLevel {
    /// Concrete count for this level.
    #[must_use]
    pub const fn count(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 3,
            Self::High => 5,
        }
    }
}

/// A standard size option offered in the tower editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeOption {
    /// Label in inches.
    pub label: &'static str,
    /// Value in centimetres.
    pub value_cm: f64,
}

/// Standard tower depths (14", 16", 20", 24").
pub const TOWER_DEPTH_OPTIONS: [SizeOption; 4] = [
    SizeOption {
        label: "14\"",
        value_cm: 35.5,
    },
    SizeOption {
        label: "16\"",
        value_cm: 40.6,
    },
    SizeOption {
        label: "20\"",
        value_cm: 50.8,
    },
    SizeOption {
        label: "24\"",
        value_cm: 61.0,
    },
];

/// Standard tower heights (84", 96").
pub const TOWER_HEIGHT_OPTIONS: [SizeOption; 2] = [
    SizeOption {
        label: "84\"",
        value_cm: 213.4,
    },
    SizeOption {
        label: "96\"",
        value_cm: 243.8,
    },
];

/// A vertical section of the cabinet interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    /// Stable identity, used in part IDs.
    pub id: String,
    /// Display label, e.g. "Tower 1".
    pub label: String,
    /// Width (X).
    #[serde(deserialize_with = "lenient_f64")]
    pub width: f64,
    /// Depth override.
    #[serde(deserialize_with = "lenient_f64")]
    pub depth: f64,
    /// Height override.
    #[serde(deserialize_with = "lenient_f64")]
    pub height: f64,
    /// Accessories, bottom-up in the order they were added.
    #[serde(default)]
    pub accessories: Vec<Accessory>,
}

impl Tower {
    /// Create an empty tower.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width,
            depth,
            height,
            accessories: Vec::new(),
        }
    }

    /// Create the default tower: one high rod above a three-shelf set.
    ///
    /// `index` is 1-based and only feeds the label.
    pub fn with_defaults(
        ids: &mut dyn IdSource,
        width: f64,
        depth: f64,
        height: f64,
        index: usize,
    ) -> Self {
        let mut tower = Self::new(
            ids.next_id(IdKind::Tower),
            format!("Tower {index}"),
            width,
            depth,
            height,
        );
        tower.accessories = vec![
            Accessory::rod(RodPosition::High, RodCount::Single),
            Accessory::shelves(3),
        ];
        tower
    }

    /// Replace the accessories.
    #[must_use]
    pub fn with_accessories(mut self, accessories: Vec<Accessory>) -> Self {
        self.accessories = accessories;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequentialIds;

    #[test]
    fn test_accessory_wire_format() {
        let json = serde_json::to_value(Accessory::drawers(3, 15.0)).expect("serialize");
        assert_eq!(json["type"], "drawer");
        assert_eq!(json["count"], 3);
        assert_eq!(json["drawerHeight"], 15.0);

        let rod: Accessory =
            serde_json::from_str(r#"{"type":"rod","position":"high","count":2}"#).expect("rod");
        assert_eq!(rod, Accessory::rod(RodPosition::High, RodCount::Double));

        let prop: Accessory =
            serde_json::from_str(r#"{"type":"prop","propId":"shirts"}"#).expect("prop");
        assert_eq!(
            prop,
            Accessory::Prop {
                prop_id: "shirts".to_string()
            }
        );
    }

    #[test]
    fn test_rod_count_rejects_three() {
        let result: Result<Accessory, _> =
            serde_json::from_str(r#"{"type":"rod","position":"low","count":3}"#);
        assert!(result.is_err());
        assert!(matches!(
            RodCount::try_from(0),
            Err(ClosetError::InvalidRodCount(0))
        ));
    }

    #[test]
    fn test_unknown_accessory_type_is_rejected() {
        let result: Result<Accessory, _> = serde_json::from_str(r#"{"type":"mirror"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_tower() {
        let mut ids = SequentialIds::new();
        let tower = Tower::with_defaults(&mut ids, 61.0, 61.0, 213.0, 2);
        assert_eq!(tower.id, "tower_1");
        assert_eq!(tower.label, "Tower 2");
        assert_eq!(tower.accessories.len(), 2);
    }

    #[test]
    fn test_accessory_levels() {
        let counts: Vec<i32> = [
            AccessoryLevel::None,
            AccessoryLevel::Low,
            AccessoryLevel::Medium,
            AccessoryLevel::High,
        ]
        .iter()
        .map(|level| level.count())
        .collect();
        assert_eq!(counts, vec![0, 1, 3, 5]);
    }
}
