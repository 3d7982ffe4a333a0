//! Versioned closet state documents.
//!
//! Version 2 is the live format. Version 1 documents (one cabinet, a flat
//! shelf count) are migrated on load.

use serde::{Deserialize, Serialize};

use crate::ids::{IdSource, SequentialIds};
use crate::materials::{ClosetMaterials, DoorOptions};
use crate::numeric::lenient_i32;
use crate::presets::ClosetType;
use crate::room::Room;
use crate::tower::{Accessory, Tower};
use crate::units::Units;
use crate::{CabinetSpec, ClosetError, ClosetResult};

/// Current schema version.
pub const CLOSET_SCHEMA_VERSION: u64 = 2;

/// A complete closet configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetState {
    /// Always [`CLOSET_SCHEMA_VERSION`].
    pub schema_version: u64,
    /// Display units.
    #[serde(default)]
    pub units: Units,
    /// Closet type the configuration started from.
    pub closet_type: ClosetType,
    /// Surrounding room.
    pub room: Room,
    /// Outer cabinet box.
    pub cabinet: CabinetSpec,
    /// Towers, left to right.
    #[serde(default)]
    pub towers: Vec<Tower>,
    /// Material selections.
    #[serde(default)]
    pub materials: ClosetMaterials,
    /// Architectural door selections.
    #[serde(default)]
    pub door_options: DoorOptions,
}

impl ClosetState {
    /// The default walk-in closet: four 61 cm towers in a 244 cm cabinet.
    pub fn new_default(ids: &mut dyn IdSource) -> Self {
        Self::for_type(ClosetType::WalkIn, ids)
    }

    /// A fresh state for `closet_type`: its room, cabinet and towers with
    /// default materials.
    pub fn for_type(closet_type: ClosetType, ids: &mut dyn IdSource) -> Self {
        Self {
            schema_version: CLOSET_SCHEMA_VERSION,
            units: Units::Cm,
            closet_type,
            room: closet_type.room(ids),
            cabinet: closet_type.cabinet(),
            towers: closet_type.towers(ids),
            materials: ClosetMaterials::default(),
            door_options: DoorOptions::default(),
        }
    }

    /// Switch to a closet type, replacing cabinet and towers with its
    /// defaults. The room is left as is.
    pub fn apply_closet_type(&mut self, closet_type: ClosetType, ids: &mut dyn IdSource) {
        self.closet_type = closet_type;
        self.cabinet = closet_type.cabinet();
        self.towers = closet_type.towers(ids);
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> ClosetResult<String> {
        serde_json::to_string(self).map_err(ClosetError::Serialization)
    }

    /// Deserialize from a JSON document of any supported schema version.
    ///
    /// # Errors
    ///
    /// See [`load_state`].
    pub fn from_json(json: &str) -> ClosetResult<Self> {
        load_state(json)
    }
}

impl Default for ClosetState {
    fn default() -> Self {
        Self::new_default(&mut SequentialIds::new())
    }
}

/// Version 1 material ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetMaterialsV1 {
    /// Carcass material.
    pub carcass_material_id: String,
    /// Back panel material.
    pub back_material_id: String,
    /// Edge banding (dropped in version 2).
    pub edge_banding_id: String,
}

/// A version 1 closet document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosetStateV1 {
    /// Always 1.
    pub schema_version: u64,
    /// Always centimetres in version 1.
    #[serde(default)]
    pub units: Units,
    /// Outer cabinet box.
    pub cabinet: CabinetSpec,
    /// Number of evenly spaced shelves.
    #[serde(deserialize_with = "lenient_i32")]
    pub shelves: i32,
    /// Material selections.
    pub materials: ClosetMaterialsV1,
}

/// Identifier given to the single tower of a migrated version 1 document.
pub const MIGRATED_TOWER_ID: &str = "tower_migrated_1";

/// Upgrade a version 1 document.
///
/// The cabinet is kept, the flat shelf count becomes one full-width tower
/// with a shelf set, and the old placeholder material ids map onto the
/// current catalog defaults.
pub fn migrate_v1_to_v2(v1: &ClosetStateV1, ids: &mut dyn IdSource) -> ClosetState {
    let mut state = ClosetState::new_default(ids);
    state.cabinet = v1.cabinet;
    state.towers = vec![Tower::new(
        MIGRATED_TOWER_ID,
        "Tower 1",
        v1.cabinet.width,
        v1.cabinet.depth,
        v1.cabinet.height,
    )
    .with_accessories(vec![Accessory::shelves(v1.shelves)])];

    let defaults = ClosetMaterials::default();
    state.materials = ClosetMaterials {
        finish_id: if v1.materials.carcass_material_id == "carcass-default" {
            defaults.finish_id
        } else {
            v1.materials.carcass_material_id.clone()
        },
        backing_id: if v1.materials.back_material_id == "back-default" {
            defaults.backing_id
        } else {
            v1.materials.back_material_id.clone()
        },
        handle_style_id: defaults.handle_style_id,
    };

    tracing::debug!(shelves = v1.shelves, "Migrated closet state v1 -> v2");
    state
}

/// Load a closet document, migrating older versions.
///
/// # Errors
///
/// Returns [`ClosetError::Serialization`] for malformed JSON,
/// [`ClosetError::MissingSchemaVersion`] when the version field is absent and
/// [`ClosetError::UnsupportedSchemaVersion`] for unknown versions.
pub fn load_state(json: &str) -> ClosetResult<ClosetState> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let version = value
        .get("schemaVersion")
        .and_then(serde_json::Value::as_u64)
        .ok_or(ClosetError::MissingSchemaVersion)?;

    match version {
        1 => {
            let v1: ClosetStateV1 = serde_json::from_value(value)?;
            Ok(migrate_v1_to_v2(&v1, &mut SequentialIds::new()))
        }
        CLOSET_SCHEMA_VERSION => Ok(serde_json::from_value(value)?),
        other => Err(ClosetError::UnsupportedSchemaVersion(other)),
    }
}
