use super::ConeDescriptor;
use crate::diagnostic::NormalizationNotice;
use crate::error::MeshError;
use crate::point::Point;
use serde::Deserialize;

/// Raw, untyped cone parameters as read from a parameter file.
///
/// Counts arrive as plain numbers, so [`ConeParams::build`] checks that
/// `sides` and `rings` are integral before handing them to
/// [`ConeDescriptor::new`].
///
/// # Example
///
/// ```rust
/// use borehole_mesh::ConeParams;
///
/// let params: ConeParams = serde_json::from_str(
///     r#"{ "x": 0, "y": 0, "z": 0, "length": 100, "sides": 4, "rings": 2, "dip": 60 }"#,
/// ).unwrap();
/// let (cone, notices) = params.build().unwrap();
/// assert_eq!(cone.vertex_count(), 10);
/// assert!(notices.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConeParams {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    pub length: f64,
    pub sides: f64,
    pub rings: f64,
    pub dip: f64,
}

impl ConeParams {
    /// Validates the raw values and constructs the descriptor.
    pub fn build(&self) -> Result<(ConeDescriptor, Vec<NormalizationNotice>), MeshError> {
        let point = Point::new(self.x, self.y, self.z)?;
        let sides = integral("sides", self.sides)?;
        let rings = integral("rings", self.rings)?;
        ConeDescriptor::new(point, self.length, sides, rings, self.dip)
    }
}

fn integral(field: &'static str, value: f64) -> Result<i64, MeshError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(MeshError::validation(field, "must be an integer", value));
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(MeshError::validation(field, "is out of range", value));
    }
    Ok(value as i64)
}
