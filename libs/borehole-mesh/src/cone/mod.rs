//! # Cone Descriptor
//!
//! Validated parameters of a borehole cone: anchor point, borehole length,
//! polygon side count, ring count and dip.
//!
//! Construction goes through a smart constructor that validates the raw
//! inputs, clamps `sides`/`rings` up to their minimums and converts the dip to
//! radians exactly once. Clamping is reported as [`NormalizationNotice`]s
//! returned next to the descriptor.

mod params;

pub use params::ConeParams;

use crate::diagnostic::{ClampedField, NormalizationNotice};
use crate::error::MeshError;
use crate::point::Point;
use config::constants::{MAX_DIP_DEGREES, MAX_VERTICES, MIN_DIP_DEGREES, MIN_RINGS, MIN_SIDES};
use serde::Serialize;
use tracing::warn;

/// Immutable description of a borehole cone.
///
/// The dip is stored in radians.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::{ConeDescriptor, Point};
///
/// let (cone, notices) = ConeDescriptor::new(Point::origin(), 100.0, 2, 4, 60.0).unwrap();
/// assert_eq!(cone.sides(), 3);
/// assert_eq!(notices.len(), 1);
/// assert!((cone.dip() - 60f64.to_radians()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConeDescriptor {
    point: Point,
    length: f64,
    sides: u32,
    rings: u32,
    dip: f64,
}

impl ConeDescriptor {
    /// Validates and normalizes raw cone parameters.
    ///
    /// # Arguments
    ///
    /// * `point` - Surface location where drilling begins
    /// * `length` - Borehole length, also the hemisphere radius
    /// * `sides` - Vertices per ring; values below 3 are clamped to 3
    /// * `rings` - Latitude bands; values below 1 are clamped to 1
    /// * `dip_degrees` - Dip from horizontal, strictly between 0 and 90
    ///
    /// # Errors
    ///
    /// [`MeshError::Validation`] when `length` or `dip_degrees` is out of
    /// range, [`MeshError::TooManyVertices`] when the lattice would exceed
    /// [`MAX_VERTICES`].
    pub fn new(
        point: Point,
        length: f64,
        sides: i64,
        rings: i64,
        dip_degrees: f64,
    ) -> Result<(Self, Vec<NormalizationNotice>), MeshError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(MeshError::validation(
                "length",
                "must be a finite number greater than 0",
                length,
            ));
        }

        if !dip_degrees.is_finite()
            || dip_degrees <= MIN_DIP_DEGREES
            || dip_degrees >= MAX_DIP_DEGREES
        {
            return Err(MeshError::validation(
                "dip",
                "must lie strictly between 0 and 90 degrees",
                dip_degrees,
            ));
        }

        let mut notices = Vec::new();
        let sides = clamp_to_minimum(ClampedField::Sides, sides, MIN_SIDES, &mut notices);
        let rings = clamp_to_minimum(ClampedField::Rings, rings, MIN_RINGS, &mut notices);

        let count = u128::from(sides) * u128::from(rings) + 2;
        if count > MAX_VERTICES as u128 {
            return Err(MeshError::TooManyVertices {
                count: usize::try_from(count).unwrap_or(usize::MAX),
                max: MAX_VERTICES,
            });
        }

        for notice in &notices {
            warn!(
                field = notice.field.name(),
                requested = notice.requested,
                applied = notice.applied,
                "cone parameter clamped to its minimum"
            );
        }

        // Both fit in u32: their product is bounded by MAX_VERTICES.
        let cone = Self {
            point,
            length,
            sides: sides as u32,
            rings: rings as u32,
            dip: dip_degrees.to_radians(),
        };

        Ok((cone, notices))
    }

    /// Anchor point at the surface.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Borehole length (hemisphere radius).
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    #[inline]
    pub fn rings(&self) -> u32 {
        self.rings
    }

    /// Dip in radians.
    #[inline]
    pub fn dip(&self) -> f64 {
        self.dip
    }

    /// Dip converted back to degrees.
    pub fn dip_degrees(&self) -> f64 {
        self.dip.to_degrees()
    }

    /// Number of vertices of the generated mesh: the tip, `sides` per ring
    /// and the apex.
    pub fn vertex_count(&self) -> usize {
        self.rings as usize * self.sides as usize + 2
    }

    /// Number of triangles of the generated mesh.
    pub fn face_count(&self) -> usize {
        2 * self.sides as usize * self.rings as usize
    }
}

/// Raises `requested` to `minimum`, recording a notice when it had to.
///
/// Returns a `u64` so that values above `u32::MAX` survive until the vertex
/// limit check.
fn clamp_to_minimum(
    field: ClampedField,
    requested: i64,
    minimum: u32,
    notices: &mut Vec<NormalizationNotice>,
) -> u64 {
    if requested < i64::from(minimum) {
        notices.push(NormalizationNotice::clamped(field, requested, minimum));
        u64::from(minimum)
    } else {
        requested as u64
    }
}
