//! The outer cabinet box.

use serde::{Deserialize, Serialize};

use crate::numeric::lenient_f64;

/// Outer dimensions and panel thickness of the cabinet, in centimetres.
///
/// Fields hold the raw input; see [`derive_dims`](crate::derive_dims) for the
/// coerced values used in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetSpec {
    /// Outer width (X).
    #[serde(deserialize_with = "lenient_f64")]
    pub width: f64,
    /// Outer height (Y).
    #[serde(deserialize_with = "lenient_f64")]
    pub height: f64,
    /// Outer depth (Z).
    #[serde(deserialize_with = "lenient_f64")]
    pub depth: f64,
    /// Panel thickness.
    #[serde(deserialize_with = "lenient_f64")]
    pub thickness: f64,
}

impl CabinetSpec {
    /// Create a cabinet spec.
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64, thickness: f64) -> Self {
        Self {
            width,
            height,
            depth,
            thickness,
        }
    }
}

impl Default for CabinetSpec {
    fn default() -> Self {
        Self::new(244.0, 213.0, 61.0, 2.0)
    }
}
