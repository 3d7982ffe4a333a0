//! Error types for closet operations.
//!
//! Domain-rule violations are never errors; they are reported as
//! [`Violation`](crate::Violation) data. These errors only arise at the
//! serialization boundary.

use thiserror::Error;

/// Result type for closet operations.
pub type ClosetResult<T> = Result<T, ClosetError>;

/// Errors that can occur while loading or naming closet configurations.
#[derive(Debug, Error)]
pub enum ClosetError {
    /// State serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document carries a schema version this crate cannot read.
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u64),

    /// The document has no `schemaVersion` field.
    #[error("Missing schemaVersion field")]
    MissingSchemaVersion,

    /// Unknown closet type name.
    #[error("Unknown closet type: {0}")]
    UnknownClosetType(String),

    /// Unknown auto-create preset id.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Unknown display unit.
    #[error("Unknown units: {0} (expected cm or in)")]
    UnknownUnits(String),

    /// Rods come singly or in pairs.
    #[error("Invalid rod count: {0} (expected 1 or 2)")]
    InvalidRodCount(u8),
}
