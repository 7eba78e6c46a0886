//! # Config Crate
//!
//! Centralized configuration constants for the borehole cone mesh pipeline.
//! Tessellation bounds, dip limits, export precision and numeric tolerances
//! are defined here so that the mesh library and the CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_SIDES, OBJ_DECIMAL_PLACES};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // A cross-section needs at least a triangle
//! let requested_sides = 2;
//! assert_eq!(requested_sides.max(MIN_SIDES), 3);
//!
//! assert_eq!(OBJ_DECIMAL_PLACES, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and small helpers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
