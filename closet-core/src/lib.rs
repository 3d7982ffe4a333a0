//! # Closet Core
//!
//! Geometry and validation engine for a parametric closet configurator.
//! Turns a declarative closet description (outer box, towers, accessories)
//! into positioned solid parts, checks it against dimensional constraints,
//! and produces the clamped payload sent for pricing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                ClosetState                  │
//! │   cabinet · towers · materials · room       │
//! ├──────────────┬───────────────┬──────────────┤
//! │ build_parts  │ validate      │ export       │
//! │ - carcass    │ - ranges      │ - clamping   │
//! │ - dividers   │ - tower fit   │ - room       │
//! │ - layouts    │ - counts      │   summary    │
//! ├──────────────┴───────────────┴──────────────┤
//! │ Vec<ClosetPart> │ Vec<Violation> │ Payload  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All three entry points are pure functions of a state snapshot. Callers
//! should build and validate the same snapshot so geometry and violations
//! agree.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod cabinet;
pub mod constraints;
pub mod dims;
pub mod error;
pub mod export;
pub mod ids;
pub mod layout;
pub mod materials;
pub mod numeric;
pub mod part;
pub mod presets;
pub mod room;
pub mod schema;
pub mod tower;
pub mod units;
pub mod validate;

pub use builder::{build_parts, expected_part_count, CARCASS_PART_COUNT};
pub use cabinet::CabinetSpec;
pub use constraints::Range;
pub use dims::{derive_dims, DerivedDims};
pub use error::{ClosetError, ClosetResult};
pub use export::{export_for_backend, ExportPayload, ExportTower, RoomSummary};
pub use ids::{IdKind, IdSource, SequentialIds, UuidIds};
pub use materials::{ClosetMaterials, DoorOptions};
pub use part::{ClosetPart, PartDims, PartTransform, PartType, Vec3};
pub use presets::{AutoCreatePreset, ClosetType};
pub use room::{PlacedItem, PlacedItemCategory, PlacedItemType, Room, RoomColors, RoomShape, Wall};
pub use schema::{
    load_state, migrate_v1_to_v2, ClosetState, ClosetStateV1, CLOSET_SCHEMA_VERSION,
};
pub use tower::{Accessory, AccessoryLevel, RodCount, RodPosition, Tower};
pub use units::Units;
pub use validate::{has_errors, validate_closet, Severity, Violation};

/// Closet core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
