//! # Borehole Mesh
//!
//! Polygonal approximation of a borehole cone: a conical shaft from the
//! surface anchor down to a rim, capped by a spherical bottom.
//!
//! ## Architecture
//!
//! ```text
//! Point → ConeDescriptor (validate, clamp, dip → radians)
//!       → generator (polar → Cartesian → indices → ring table → faces)
//!       → Mesh → export (OBJ text)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use borehole_mesh::{export, generate, ConeDescriptor, Point};
//! use config::constants::GlobalConfig;
//!
//! let anchor = Point::new(0.0, 0.0, 0.0)?;
//! let (cone, notices) = ConeDescriptor::new(anchor, 100.0, 4, 2, 60.0)?;
//! assert!(notices.is_empty());
//!
//! let mesh = generate(&cone)?;
//! assert_eq!(mesh.vertex_count(), 10);
//! assert_eq!(mesh.face_count(), 16);
//!
//! let obj = export::to_obj_string(&mesh, &GlobalConfig::default());
//! assert_eq!(obj.lines().count(), 26);
//! # Ok::<(), borehole_mesh::MeshError>(())
//! ```

pub mod cone;
pub mod diagnostic;
pub mod error;
pub mod export;
pub mod generator;
pub mod mesh;
pub mod point;

pub use cone::{ConeDescriptor, ConeParams};
pub use diagnostic::{ClampedField, NormalizationNotice, Severity};
pub use error::{MeshError, MeshResult};
pub use generator::{generate, generate_with};
pub use mesh::{Face, Mesh, Vertex, APEX_RING};
pub use point::Point;
