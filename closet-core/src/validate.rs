//! Constraint validation.
//!
//! Problems are returned as data: an `error` blocks ordering, a `warning` is
//! advisory. Nothing here mutates or rejects the configuration, and the
//! parts builder runs regardless of what is reported.

use serde::{Deserialize, Serialize};

use crate::constraints::{
    Range, ACCESSORY, CABINET, TOWER, TOWER_GAP_WARNING, TOWER_WIDTH_TOLERANCE,
};
use crate::numeric::coerce;
use crate::schema::ClosetState;
use crate::tower::{Accessory, Tower};

/// Stable violation codes.
///
/// These are a wire contract with the UI; renaming one needs a migration.
pub mod codes {
    /// Cabinet width missing or outside its range.
    pub const CABINET_WIDTH_OUT_OF_RANGE: &str = "CABINET_WIDTH_OUT_OF_RANGE";
    /// Cabinet height missing or outside its range.
    pub const CABINET_HEIGHT_OUT_OF_RANGE: &str = "CABINET_HEIGHT_OUT_OF_RANGE";
    /// Cabinet depth missing or outside its range.
    pub const CABINET_DEPTH_OUT_OF_RANGE: &str = "CABINET_DEPTH_OUT_OF_RANGE";
    /// Panel thickness missing or outside its range.
    pub const CABINET_THICKNESS_OUT_OF_RANGE: &str = "CABINET_THICKNESS_OUT_OF_RANGE";
    /// Thickness leaves no interior width.
    pub const INNER_WIDTH_NON_POSITIVE: &str = "INNER_WIDTH_NON_POSITIVE";
    /// Thickness leaves no interior height.
    pub const INNER_HEIGHT_NON_POSITIVE: &str = "INNER_HEIGHT_NON_POSITIVE";
    /// Thickness leaves no interior depth.
    pub const INNER_DEPTH_NON_POSITIVE: &str = "INNER_DEPTH_NON_POSITIVE";
    /// The closet has no towers.
    pub const NO_TOWERS: &str = "NO_TOWERS";
    /// More towers than allowed.
    pub const TOO_MANY_TOWERS: &str = "TOO_MANY_TOWERS";
    /// Towers are wider than the interior.
    pub const TOWERS_EXCEED_WIDTH: &str = "TOWERS_EXCEED_WIDTH";
    /// Towers leave a gap in the interior.
    pub const TOWERS_WIDTH_MISMATCH: &str = "TOWERS_WIDTH_MISMATCH";
    /// A tower's width is missing or outside its range.
    pub const TOWER_WIDTH_OUT_OF_RANGE: &str = "TOWER_WIDTH_OUT_OF_RANGE";
    /// A shelf set has too many (or negative) shelves.
    pub const SHELF_COUNT_OUT_OF_RANGE: &str = "SHELF_COUNT_OUT_OF_RANGE";
    /// A drawer stack has too many (or negative) drawers.
    pub const DRAWER_COUNT_OUT_OF_RANGE: &str = "DRAWER_COUNT_OUT_OF_RANGE";
    /// A shoe shelf accessory has too many (or negative) slots.
    pub const SHOE_SHELF_COUNT_OUT_OF_RANGE: &str = "SHOE_SHELF_COUNT_OUT_OF_RANGE";
}

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the configuration from being ordered.
    Error,
    /// Advisory only.
    Warning,
}

/// A reported constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Error or warning.
    pub severity: Severity,
    /// Stable machine-readable code, see [`codes`].
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
    /// Offending field, e.g. `towers[2].width`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Violation {
    /// Create an error.
    #[must_use]
    pub fn error(code: &str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, path, message)
    }

    /// Create a warning.
    #[must_use]
    pub fn warning(code: &str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, path, message)
    }

    fn new(
        severity: Severity,
        code: &str,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.to_string(),
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Whether this violation blocks the configuration.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Whether any violation is an error.
#[must_use]
pub fn has_errors(violations: &[Violation]) -> bool {
    violations.iter().any(Violation::is_error)
}

/// Check a closet state against every constraint.
///
/// Checks are independent and reported in a fixed order: cabinet ranges,
/// interior sanity, tower count, total tower width, per-tower width, then
/// accessory counts.
#[must_use]
pub fn validate_closet(state: &ClosetState) -> Vec<Violation> {
    let mut v = Vec::new();

    check_cabinet_ranges(state, &mut v);
    check_inner_dims(state, &mut v);
    check_tower_count(state, &mut v);
    check_total_tower_width(state, &mut v);

    for (index, tower) in state.towers.iter().enumerate() {
        check_tower(index, tower, &mut v);
    }

    let errors = v.iter().filter(|violation| violation.is_error()).count();
    tracing::debug!(
        errors,
        warnings = v.len() - errors,
        "Validated closet"
    );
    v
}

fn check_cabinet_ranges(state: &ClosetState, v: &mut Vec<Violation>) {
    let cabinet = &state.cabinet;
    let fields: [(f64, Range, &str, &str, &str); 4] = [
        (cabinet.width, CABINET.width, codes::CABINET_WIDTH_OUT_OF_RANGE, "width", "Width"),
        (cabinet.height, CABINET.height, codes::CABINET_HEIGHT_OUT_OF_RANGE, "height", "Height"),
        (cabinet.depth, CABINET.depth, codes::CABINET_DEPTH_OUT_OF_RANGE, "depth", "Depth"),
        (
            cabinet.thickness,
            CABINET.thickness,
            codes::CABINET_THICKNESS_OUT_OF_RANGE,
            "thickness",
            "Thickness",
        ),
    ];

    for (value, range, code, field, label) in fields {
        if !range.contains(value) {
            v.push(Violation::error(
                code,
                format!("cabinet.{field}"),
                format!("{label} must be between {} and {} cm.", range.min, range.max),
            ));
        }
    }
}

fn check_inner_dims(state: &ClosetState, v: &mut Vec<Violation>) {
    let cabinet = &state.cabinet;
    let t = cabinet.thickness;
    if !t.is_finite() {
        return;
    }

    let interiors = [
        (cabinet.width, cabinet.width - t * 2.0, codes::INNER_WIDTH_NON_POSITIVE, "width"),
        (cabinet.height, cabinet.height - t * 2.0, codes::INNER_HEIGHT_NON_POSITIVE, "height"),
        (cabinet.depth, cabinet.depth - t, codes::INNER_DEPTH_NON_POSITIVE, "depth"),
    ];

    for (outer, inner, code, field) in interiors {
        if outer.is_finite() && inner <= 0.0 {
            v.push(Violation::warning(
                code,
                format!("cabinet.{field}"),
                format!(
                    "Thickness is too large relative to {field}; the interior {field} becomes non-positive."
                ),
            ));
        }
    }
}

fn check_tower_count(state: &ClosetState, v: &mut Vec<Violation>) {
    if state.towers.is_empty() {
        v.push(Violation::warning(
            codes::NO_TOWERS,
            "towers",
            "No towers defined. Add at least one tower to your closet.",
        ));
    }

    if state.towers.len() > TOWER.max_per_closet {
        v.push(Violation::error(
            codes::TOO_MANY_TOWERS,
            "towers",
            format!("Maximum {} towers allowed.", TOWER.max_per_closet),
        ));
    }
}

fn check_total_tower_width(state: &ClosetState, v: &mut Vec<Violation>) {
    let cabinet = &state.cabinet;
    if !(cabinet.width.is_finite() && cabinet.thickness.is_finite()) {
        return;
    }

    let inner_width = cabinet.width - cabinet.thickness * 2.0;
    let total: f64 = state.towers.iter().map(|t| coerce(t.width)).sum();
    let diff = (total - inner_width).abs();

    if total > inner_width + TOWER_WIDTH_TOLERANCE {
        v.push(Violation::error(
            codes::TOWERS_EXCEED_WIDTH,
            "towers",
            format!(
                "Total tower width ({total:.1} cm) exceeds available interior width ({inner_width:.1} cm)."
            ),
        ));
    } else if diff > TOWER_GAP_WARNING {
        v.push(Violation::warning(
            codes::TOWERS_WIDTH_MISMATCH,
            "towers",
            format!(
                "Total tower width ({total:.1} cm) doesn't fill the interior width ({inner_width:.1} cm). Gap: {diff:.1} cm."
            ),
        ));
    }
}

fn check_tower(index: usize, tower: &Tower, v: &mut Vec<Violation>) {
    let prefix = format!("towers[{index}]");
    let label = &tower.label;

    if !TOWER.width.contains(tower.width) {
        v.push(Violation::error(
            codes::TOWER_WIDTH_OUT_OF_RANGE,
            format!("{prefix}.width"),
            format!(
                "{label}: width must be between {} and {} cm.",
                TOWER.width.min, TOWER.width.max
            ),
        ));
    }

    let accessories_path = format!("{prefix}.accessories");
    for accessory in &tower.accessories {
        let (count, range, code, noun) = match accessory {
            Accessory::ShelfSet { count } => {
                (*count, ACCESSORY.shelves, codes::SHELF_COUNT_OUT_OF_RANGE, "shelf")
            }
            Accessory::Drawer { count, .. } => {
                (*count, ACCESSORY.drawers, codes::DRAWER_COUNT_OUT_OF_RANGE, "drawer")
            }
            Accessory::ShoeShelf { count } => (
                *count,
                ACCESSORY.shoe_shelf,
                codes::SHOE_SHELF_COUNT_OUT_OF_RANGE,
                "shoe shelf",
            ),
            // Rod counts are 1 or 2 by construction; props have no count.
            Accessory::Rod { .. } | Accessory::Prop { .. } => continue,
        };

        if !range.contains(f64::from(count)) {
            v.push(Violation::error(
                code,
                accessories_path.clone(),
                format!(
                    "{label}: {noun} count must be between {} and {}.",
                    range.min, range.max
                ),
            ));
        }
    }
}
