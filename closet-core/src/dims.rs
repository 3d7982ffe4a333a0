//! Interior dimensions derived from the outer cabinet box.

use serde::Serialize;

use crate::numeric::coerce;
use crate::CabinetSpec;

/// Coerced outer dimensions plus the usable interior.
///
/// The inner depth loses one thickness (back panel only); inner width and
/// height lose two (both side walls, top and bottom panels). Inner values
/// are floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedDims {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Outer depth.
    pub depth: f64,
    /// Panel thickness.
    pub thickness: f64,
    /// Usable interior width.
    pub inner_width: f64,
    /// Usable interior height.
    pub inner_height: f64,
    /// Usable interior depth.
    pub inner_depth: f64,
}

/// Derive interior dimensions. Non-finite inputs count as zero.
#[must_use]
pub fn derive_dims(cabinet: &CabinetSpec) -> DerivedDims {
    let width = coerce(cabinet.width);
    let height = coerce(cabinet.height);
    let depth = coerce(cabinet.depth);
    let thickness = coerce(cabinet.thickness);

    DerivedDims {
        width,
        height,
        depth,
        thickness,
        inner_width: (width - thickness * 2.0).max(0.0),
        inner_height: (height - thickness * 2.0).max(0.0),
        inner_depth: (depth - thickness).max(0.0),
    }
}
