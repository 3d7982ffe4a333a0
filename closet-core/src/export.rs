//! Backend-safe export payload for pricing.
//!
//! Every cabinet and tower dimension is clamped into its valid range here,
//! independently of the validator, so nothing out of range ever reaches the
//! pricing backend. Accessories pass through untouched.

use serde::{Deserialize, Serialize};

use crate::constraints::{CABINET, TOWER};
use crate::materials::{ClosetMaterials, DoorOptions};
use crate::numeric::coerce;
use crate::presets::ClosetType;
use crate::room::{RoomColors, RoomShape};
use crate::schema::{ClosetState, CLOSET_SCHEMA_VERSION};
use crate::tower::Accessory;
use crate::units::Units;
use crate::{CabinetSpec, ClosetResult};

/// A tower as priced by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTower {
    /// Tower id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Clamped width.
    pub width: f64,
    /// Clamped depth.
    pub depth: f64,
    /// Clamped height.
    pub height: f64,
    /// Accessories, unclamped.
    pub accessories: Vec<Accessory>,
}

/// The room reduced to what pricing needs. Wall geometry is left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    /// Room outline shape.
    pub shape: RoomShape,
    /// Ceiling height.
    pub height: f64,
    /// Number of walls.
    pub wall_count: usize,
    /// Colour selections.
    pub colors: RoomColors,
}

/// The literal body posted to the pricing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Always [`CLOSET_SCHEMA_VERSION`].
    pub schema_version: u64,
    /// Display units.
    pub units: Units,
    /// Closet type.
    pub closet_type: ClosetType,
    /// Clamped cabinet box.
    pub cabinet: CabinetSpec,
    /// Clamped towers.
    pub towers: Vec<ExportTower>,
    /// Material selections.
    pub materials: ClosetMaterials,
    /// Door selections.
    pub door_options: DoorOptions,
    /// Room summary.
    pub room: RoomSummary,
}

impl ExportPayload {
    /// Clamp the payload's own numbers again.
    ///
    /// Exporting is idempotent, so this returns an equal payload.
    #[must_use]
    pub fn reclamped(&self) -> Self {
        Self {
            cabinet: clamp_cabinet(&self.cabinet),
            towers: self
                .towers
                .iter()
                .map(|t| ExportTower {
                    width: TOWER.width.clamp(t.width),
                    depth: TOWER.depth.clamp(t.depth),
                    height: TOWER.height.clamp(t.height),
                    ..t.clone()
                })
                .collect(),
            room: RoomSummary {
                height: coerce(self.room.height),
                ..self.room.clone()
            },
            ..self.clone()
        }
    }

    /// Serialize as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> ClosetResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build the pricing payload for a closet state.
#[must_use]
pub fn export_for_backend(state: &ClosetState) -> ExportPayload {
    let towers = state
        .towers
        .iter()
        .map(|t| ExportTower {
            id: t.id.clone(),
            label: t.label.clone(),
            width: TOWER.width.clamp(t.width),
            depth: TOWER.depth.clamp(t.depth),
            height: TOWER.height.clamp(t.height),
            accessories: t.accessories.clone(),
        })
        .collect();

    let payload = ExportPayload {
        schema_version: CLOSET_SCHEMA_VERSION,
        units: state.units,
        closet_type: state.closet_type,
        cabinet: clamp_cabinet(&state.cabinet),
        towers,
        materials: state.materials.clone(),
        door_options: state.door_options.clone(),
        room: RoomSummary {
            shape: state.room.shape,
            // JSON has no NaN.
            height: coerce(state.room.height),
            wall_count: state.room.walls.len(),
            colors: state.room.colors.clone(),
        },
    };

    tracing::debug!(
        closet_type = %payload.closet_type,
        towers = payload.towers.len(),
        "Exported closet for backend"
    );
    payload
}

fn clamp_cabinet(cabinet: &CabinetSpec) -> CabinetSpec {
    CabinetSpec::new(
        CABINET.width.clamp(cabinet.width),
        CABINET.height.clamp(cabinet.height),
        CABINET.depth.clamp(cabinet.depth),
        CABINET.thickness.clamp(cabinet.thickness),
    )
}
