//! Lenient numeric input.
//!
//! Dimension fields come straight from form inputs, so they may arrive as
//! JSON numbers, numeric strings or `null`. Anything that does not parse is
//! kept as `NaN`: the validator reports it and the builder coerces it to zero.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Coerce a raw value for arithmetic: non-finite values become `0.0`.
#[must_use]
pub fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Constrain `value` to `[min, max]`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Deserialize an `f64` from a number, a numeric string or `null`.
///
/// Used with `#[serde(deserialize_with = "lenient_f64")]`.
///
/// # Errors
///
/// Returns an error only for JSON shapes that can never be a number
/// (objects, arrays, booleans).
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientF64)
}

struct LenientF64;

impl<'de> Visitor<'de> for LenientF64 {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        let trimmed = v.trim();
        // An empty form field reads as zero, like a cleared input.
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        Ok(trimmed.parse().unwrap_or(f64::NAN))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Deserialize an `i32` count from a number, a numeric string or `null`.
///
/// Fractions truncate toward zero and out-of-range values saturate. Empty,
/// unparseable and `null` input reads as `0`, which lays out nothing.
///
/// # Errors
///
/// Returns an error only for JSON shapes that can never be a number
/// (objects, arrays, booleans).
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI32)
}

/// Truncate toward zero, saturating at the `i32` bounds. `NaN` becomes `0`.
#[allow(clippy::cast_possible_truncation)]
fn truncate_count(value: f64) -> i32 {
    value.trunc() as i32
}

struct LenientI32;

impl<'de> Visitor<'de> for LenientI32 {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a count, a numeric string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        Ok(truncate_count(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        Ok(i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX }))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        Ok(i32::try_from(v).unwrap_or(i32::MAX))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        Ok(v.trim().parse::<f64>().map_or(0, truncate_count))
    }

    fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<i32, D::Error> {
        deserializer.deserialize_any(self)
    }
}
