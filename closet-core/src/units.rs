//! Display units.
//!
//! Every length is stored in centimetres; inches exist only at the display
//! boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ClosetError;

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Unit a configuration is displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Centimetres.
    #[default]
    Cm,
    /// Inches.
    In,
}

impl Units {
    /// Short label for the unit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::In => "in",
        }
    }

    /// Convert a value entered in this unit to centimetres.
    #[must_use]
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            Self::Cm => value,
            Self::In => value * CM_PER_INCH,
        }
    }

    /// Convert centimetres to this unit.
    #[must_use]
    pub fn from_cm(self, cm: f64) -> f64 {
        match self {
            Self::Cm => cm,
            Self::In => cm / CM_PER_INCH,
        }
    }

    /// Format a centimetre value for display.
    ///
    /// Defaults to 0 decimals for centimetres and 1 for inches.
    #[must_use]
    pub fn format(self, cm: f64, decimals: Option<usize>) -> String {
        match self {
            Self::Cm => format!("{:.*} cm", decimals.unwrap_or(0), cm),
            Self::In => format!("{:.*}″", decimals.unwrap_or(1), self.from_cm(cm)),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Units {
    type Err = ClosetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Self::Cm),
            "in" => Ok(Self::In),
            other => Err(ClosetError::UnknownUnits(other.to_string())),
        }
    }
}
