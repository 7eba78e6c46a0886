//! # Configuration Constants
//!
//! Centralized constants for the borehole cone pipeline. Tessellation bounds,
//! dip limits, export precision and tolerance values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Minimum and default side/ring counts
//! - **Dip**: Open interval of accepted dip angles
//! - **Export**: OBJ decimal places and file extension
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Also used as the relative tolerance for the hemisphere radicand
/// `length² - radius²`: values down to `-EPSILON * length²` are treated as
/// floating-point drift and clamped to zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum doubled triangle area below which a face counts as degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
/// assert!(VERTEX_MERGE_EPSILON > EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of sides of the polygonal cross-section.
///
/// Requests below this value are clamped up, not rejected.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SIDES;
///
/// let requested: i64 = 2;
/// let applied = requested.max(MIN_SIDES as i64);
/// assert_eq!(applied, 3);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Minimum number of latitude rings approximating the hemisphere.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RINGS;
/// assert_eq!(MIN_RINGS, 1);
/// ```
pub const MIN_RINGS: u32 = 1;

/// Default number of sides used by the CLI when none is given.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SIDES, MIN_SIDES};
/// assert!(DEFAULT_SIDES >= MIN_SIDES);
/// ```
pub const DEFAULT_SIDES: u32 = 16;

/// Default number of rings used by the CLI when none is given.
pub const DEFAULT_RINGS: u32 = 8;

// =============================================================================
// DIP CONSTANTS
// =============================================================================

/// Lower bound of the accepted dip interval in degrees (exclusive).
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_DIP_DEGREES, MIN_DIP_DEGREES};
///
/// let dip = 45.0;
/// assert!(dip > MIN_DIP_DEGREES && dip < MAX_DIP_DEGREES);
/// ```
pub const MIN_DIP_DEGREES: f64 = 0.0;

/// Upper bound of the accepted dip interval in degrees (exclusive).
pub const MAX_DIP_DEGREES: f64 = 90.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Number of decimal places written for OBJ vertex coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::OBJ_DECIMAL_PLACES;
///
/// let line = format!("{:.*}", OBJ_DECIMAL_PLACES as usize, 1.23456_f64);
/// assert_eq!(line, "1.235");
/// ```
pub const OBJ_DECIMAL_PLACES: u32 = 3;

/// Largest decimal precision accepted by [`GlobalConfig`].
///
/// Beyond 15 digits an `f64` carries no further information.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// File extension appended to OBJ targets given without one.
pub const OBJ_EXTENSION: &str = "obj";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single cone mesh.
///
/// Safety limit to prevent memory exhaustion from absurd side/ring counts.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let (sides, rings) = (64_usize, 32_usize);
/// assert!(sides * rings + 2 < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of settings shared between the mesh library and the
/// CLI.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.decimal_places, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Relative tolerance applied to the hemisphere radicand.
    pub tolerance: f64,
    /// Decimal places written for OBJ vertex coordinates.
    pub decimal_places: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and decimal places.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-9, 4).expect("valid config");
    /// assert_eq!(cfg.decimal_places, 4);
    /// ```
    pub fn new(tolerance: f64, decimal_places: u32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::InvalidDecimalPlaces(decimal_places));
        }
        Ok(Self {
            tolerance,
            decimal_places,
        })
    }

    /// Returns a copy with a different export precision.
    pub fn with_decimal_places(self, decimal_places: u32) -> Result<Self, ConfigError> {
        Self::new(self.tolerance, decimal_places)
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            decimal_places: OBJ_DECIMAL_PLACES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the requested precision exceeds [`MAX_DECIMAL_PLACES`].
    InvalidDecimalPlaces(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidDecimalPlaces(value) => {
                write!(f, "decimal_places must be <= {MAX_DECIMAL_PLACES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
