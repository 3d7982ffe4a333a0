//! Material selections.
//!
//! Only identifiers live here; colours, textures and prices belong to the
//! external catalog that resolves them.

use serde::{Deserialize, Serialize};

/// Finish every hanging rod is drawn in, whatever handle style is selected.
pub const HARDWARE_MATERIAL_ID: &str = "polished-chrome";

/// What the user picked for the cabinet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetMaterials {
    /// Carcass, divider, shelf and drawer finish.
    pub finish_id: String,
    /// Back panel material.
    pub backing_id: String,
    /// Handle style.
    pub handle_style_id: String,
}

impl Default for ClosetMaterials {
    fn default() -> Self {
        Self {
            finish_id: "miami-linen".to_string(),
            backing_id: "backing-white".to_string(),
            handle_style_id: "handle-none".to_string(),
        }
    }
}

/// Architectural door selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorOptions {
    /// Handle finish id.
    pub handle_finish: String,
    /// Door finish material id.
    pub door_finish_id: String,
    /// Door colour (hex).
    pub door_color: String,
    /// Plain panels instead of raised ones.
    pub plain_panels: bool,
}

impl Default for DoorOptions {
    fn default() -> Self {
        Self {
            handle_finish: HARDWARE_MATERIAL_ID.to_string(),
            door_finish_id: "door-bronze".to_string(),
            door_color: "#8b7355".to_string(),
            plain_panels: false,
        }
    }
}
