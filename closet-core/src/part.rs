//! Closet parts - the positioned solids handed to the renderer and BOM.

use serde::{Deserialize, Serialize};

/// A 3D vector `[x, y, z]`.
pub type Vec3 = [f64; 3];

/// The closed set of part kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    /// Left carcass wall.
    PanelLeft,
    /// Right carcass wall.
    PanelRight,
    /// Top carcass panel.
    PanelTop,
    /// Bottom carcass panel.
    PanelBottom,
    /// Back panel.
    PanelBack,
    /// Flat shelf.
    Shelf,
    /// Vertical panel between two towers.
    Divider,
    /// Hanging rod (a cylinder laid along X).
    Rod,
    /// Drawer box.
    DrawerBox,
    /// Angled shoe shelf.
    ShoeShelf,
}

impl PartType {
    /// Wire name; carcass panels also use it as their part id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PanelLeft => "panel_left",
            Self::PanelRight => "panel_right",
            Self::PanelTop => "panel_top",
            Self::PanelBottom => "panel_bottom",
            Self::PanelBack => "panel_back",
            Self::Shelf => "shelf",
            Self::Divider => "divider",
            Self::Rod => "rod",
            Self::DrawerBox => "drawer_box",
            Self::ShoeShelf => "shoe_shelf",
        }
    }

    /// Whether this is one of the five carcass panels.
    #[must_use]
    pub const fn is_carcass(self) -> bool {
        matches!(
            self,
            Self::PanelLeft
                | Self::PanelRight
                | Self::PanelTop
                | Self::PanelBottom
                | Self::PanelBack
        )
    }
}

/// Size of a part's bounding box along each axis, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartDims {
    /// Extent along X.
    pub x: f64,
    /// Extent along Y.
    pub y: f64,
    /// Extent along Z.
    pub z: f64,
}

impl PartDims {
    /// Create dims.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Whether any extent is zero or negative.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.x <= 0.0 || self.y <= 0.0 || self.z <= 0.0
    }
}

/// Placement of a part's centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartTransform {
    /// Centre position, cabinet-centred.
    pub pos: Vec3,
    /// Euler rotation in radians.
    pub rot: Vec3,
}

impl PartTransform {
    /// An unrotated placement at `pos`.
    #[must_use]
    pub const fn at(pos: Vec3) -> Self {
        Self {
            pos,
            rot: [0.0; 3],
        }
    }

    /// Set the rotation.
    #[must_use]
    pub const fn rotated(mut self, rot: Vec3) -> Self {
        self.rot = rot;
        self
    }
}

/// A positioned solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetPart {
    /// Deterministic id derived from tower id, kind and index.
    pub id: String,
    /// Part kind.
    #[serde(rename = "type")]
    pub part_type: PartType,
    /// Bounding box size.
    pub dims: PartDims,
    /// Placement.
    pub transform: PartTransform,
    /// Material id, resolved by the external catalog.
    pub material_id: String,
    /// Owning tower; `None` for carcass panels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tower_id: Option<String>,
    /// Free-form extra data (index, rod position).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl ClosetPart {
    /// Create a part without tower or meta.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        part_type: PartType,
        dims: PartDims,
        transform: PartTransform,
        material_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            part_type,
            dims,
            transform,
            material_id: material_id.into(),
            tower_id: None,
            meta: None,
        }
    }

    /// Attach the owning tower.
    #[must_use]
    pub fn with_tower(mut self, tower_id: impl Into<String>) -> Self {
        self.tower_id = Some(tower_id.into());
        self
    }

    /// Attach meta data.
    #[must_use]
    pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Centre position.
    #[must_use]
    pub const fn pos(&self) -> Vec3 {
        self.transform.pos
    }
}
