//! # Anchor Point
//!
//! The surface location where drilling begins.

use crate::error::MeshError;
use glam::DVec3;
use serde::Serialize;

/// An immutable, finite 3-D coordinate.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::Point;
///
/// let p = Point::new(10.0, -5.0, 250.0).unwrap();
/// assert_eq!(p.z(), 250.0);
/// assert!(Point::new(f64::NAN, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// Creates a point, rejecting NaN and infinite coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, MeshError> {
        for (field, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(MeshError::validation(field, "must be a finite number", value));
            }
        }
        Ok(Self { x, y, z })
    }

    /// The point at the coordinate origin.
    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns the point as a glam vector.
    #[inline]
    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}
