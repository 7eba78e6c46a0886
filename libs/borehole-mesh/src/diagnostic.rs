use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
}

/// Cone parameter that can be normalized during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampedField {
    Sides,
    Rings,
}

impl ClampedField {
    pub fn name(self) -> &'static str {
        match self {
            ClampedField::Sides => "sides",
            ClampedField::Rings => "rings",
        }
    }
}

/// A non-fatal notice that a requested value was raised to its minimum.
///
/// Returned next to the constructed cone so callers decide how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationNotice {
    pub severity: Severity,
    pub field: ClampedField,
    pub requested: i64,
    pub applied: u32,
}

impl NormalizationNotice {
    pub fn clamped(field: ClampedField, requested: i64, applied: u32) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            requested,
            applied,
        }
    }
}

impl fmt::Display for NormalizationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is below the minimum; using {}",
            self.field.name(),
            self.requested,
            self.applied
        )
    }
}
