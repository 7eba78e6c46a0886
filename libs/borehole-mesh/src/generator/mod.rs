//! # Mesh Generator
//!
//! Pure derivation of the cone surface from a [`ConeDescriptor`]:
//!
//! ```text
//! points_polar → points_cartesian → indices → RingTable → stitch → Mesh
//! ```
//!
//! ## Lattice
//!
//! Ring `i` in `0..=rings` sits on the sphere of radius `length` around the
//! anchor, at horizontal radius `i * length * cos(dip) / rings` and height
//! `-sqrt(length² - radius²)`. Ring 0 is the bottom tip and holds a single
//! point. The last vertex is the apex on the ground surface (ring `-1`),
//! coincident with the anchor.
//!
//! ## Winding
//!
//! Angles grow counter-clockwise seen from above. Every triangle is wound so
//! its normal points out of the solid, which makes the surface a closed,
//! consistently oriented 2-manifold.

use crate::cone::ConeDescriptor;
use crate::error::MeshError;
use crate::mesh::{Face, Mesh, Vertex, APEX_RING};
use config::constants::{GlobalConfig, EPSILON};
use glam::DVec3;
use std::collections::BTreeMap;
use std::f64::consts::TAU;
use tracing::debug;

/// A lattice point in polar form relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub ring: i32,
    pub radius: f64,
    pub angle: f64,
    pub height: f64,
}

/// A lattice point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    pub ring: i32,
    pub position: DVec3,
}

/// Derives the polar lattice of a cone.
///
/// Yields `rings * sides + 2` points: the tip, `sides` points for each of
/// rings `1..=rings`, then the apex.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::{generator, ConeDescriptor, Point};
///
/// let (cone, _) = ConeDescriptor::new(Point::origin(), 100.0, 4, 2, 60.0).unwrap();
/// let points = generator::points_polar(&cone).unwrap();
/// assert_eq!(points.len(), 10);
/// assert_eq!(points[0].height, -100.0);
/// assert_eq!(points.last().unwrap().ring, -1);
/// ```
pub fn points_polar(cone: &ConeDescriptor) -> Result<Vec<PolarPoint>, MeshError> {
    points_polar_with_tolerance(cone, EPSILON)
}

/// [`points_polar`] with an explicit relative tolerance for the hemisphere
/// radicand.
pub fn points_polar_with_tolerance(
    cone: &ConeDescriptor,
    tolerance: f64,
) -> Result<Vec<PolarPoint>, MeshError> {
    let rings = cone.rings();
    let sides = cone.sides();
    let length = cone.length();
    let rim_radius = length * cone.dip().cos();

    let mut points = Vec::with_capacity(cone.vertex_count());

    for i in 0..=rings {
        let ring = i as i32;
        let radius = f64::from(i) * rim_radius / f64::from(rings);
        let height = -hemisphere_depth(length, radius, ring, tolerance)?;

        // The tip collapses to one point instead of `sides` coincident ones.
        let count = if i == 0 { 1 } else { sides };
        points.extend((0..count).map(|j| PolarPoint {
            ring,
            radius,
            angle: f64::from(j) * TAU / f64::from(sides),
            height,
        }));
    }

    points.push(PolarPoint {
        ring: APEX_RING,
        radius: 0.0,
        angle: 0.0,
        height: 0.0,
    });

    Ok(points)
}

/// `sqrt(length² - radius²)`, clamping floating-point drift below zero.
fn hemisphere_depth(
    length: f64,
    radius: f64,
    ring: i32,
    tolerance: f64,
) -> Result<f64, MeshError> {
    let radicand = length * length - radius * radius;
    if radicand >= 0.0 {
        return Ok(radicand.sqrt());
    }
    if radicand >= -tolerance * length * length {
        return Ok(0.0);
    }
    Err(MeshError::NumericDomain { ring, radicand })
}

/// Maps the polar lattice into world coordinates around the anchor point.
pub fn points_cartesian(cone: &ConeDescriptor) -> Result<Vec<CartesianPoint>, MeshError> {
    Ok(to_cartesian(cone, &points_polar(cone)?))
}

fn to_cartesian(cone: &ConeDescriptor, polar: &[PolarPoint]) -> Vec<CartesianPoint> {
    let origin = cone.point().to_dvec3();
    polar
        .iter()
        .map(|p| {
            let (sin, cos) = p.angle.sin_cos();
            CartesianPoint {
                ring: p.ring,
                position: origin + DVec3::new(p.radius * cos, p.radius * sin, p.height),
            }
        })
        .collect()
}

/// Assigns 1-based sequence indices in generation order; the apex is last.
pub fn indices(cone: &ConeDescriptor) -> Result<Vec<Vertex>, MeshError> {
    Ok(index_points(&points_cartesian(cone)?))
}

fn index_points(points: &[CartesianPoint]) -> Vec<Vertex> {
    points
        .iter()
        .zip(1u32..)
        .map(|(p, index)| Vertex {
            index,
            ring: p.ring,
            position: p.position,
        })
        .collect()
}

/// Vertex indices grouped by ring tag, each group in generation order.
///
/// Built once so the stitching step never rescans the vertex list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingTable {
    rings: BTreeMap<i32, Vec<u32>>,
}

impl RingTable {
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut rings: BTreeMap<i32, Vec<u32>> = BTreeMap::new();
        for v in vertices {
            rings.entry(v.ring).or_default().push(v.index);
        }
        Self { rings }
    }

    /// Indices of one ring; empty when the ring is absent.
    pub fn ring(&self, ring: i32) -> &[u32] {
        self.rings.get(&ring).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct ring tags, the apex included.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    fn single(&self, ring: i32, what: &str) -> Result<u32, MeshError> {
        match self.ring(ring) {
            [index] => Ok(*index),
            other => Err(MeshError::invalid_topology(format!(
                "{what} ring {ring} must hold exactly one vertex, found {}",
                other.len()
            ))),
        }
    }
}

/// Stitches consecutive rings into triangles.
///
/// Emits, per ring transition `i → i+1`:
/// - `i == 0`: the tip fan, `sides` triangles around the tip
/// - `i >= 1`: two triangles per quad between the rings
/// - `i == rings - 1`: additionally the apex fan from the rim to the apex
///
/// giving `2 * sides * rings` faces.
pub fn stitch(table: &RingTable, rings: u32) -> Result<Vec<Face>, MeshError> {
    let tip = table.single(0, "tip")?;
    let apex = table.single(APEX_RING, "apex")?;
    let sides = table.ring(1).len();

    let mut faces = Vec::with_capacity(2 * sides * rings as usize);

    for i in 0..rings as i32 {
        let outer = table.ring(i + 1);
        if outer.len() != sides || sides < 3 {
            return Err(MeshError::invalid_topology(format!(
                "ring {} holds {} vertices, expected {} (at least 3)",
                i + 1,
                outer.len(),
                sides
            )));
        }

        if i == 0 {
            for k in 0..sides {
                let next = (k + 1) % sides;
                faces.push(Face::new(tip, outer[next], outer[k]));
            }
        } else {
            let inner = table.ring(i);
            for k in 0..sides {
                let next = (k + 1) % sides;
                faces.push(Face::new(inner[k], inner[next], outer[k]));
                faces.push(Face::new(inner[next], outer[next], outer[k]));
            }
        }

        if i == rings as i32 - 1 {
            for k in 0..sides {
                let next = (k + 1) % sides;
                faces.push(Face::new(apex, outer[k], outer[next]));
            }
        }
    }

    Ok(faces)
}

/// Derives the face list of a cone.
pub fn faces(cone: &ConeDescriptor) -> Result<Vec<Face>, MeshError> {
    let vertices = indices(cone)?;
    stitch(&RingTable::from_vertices(&vertices), cone.rings())
}

/// Generates the full mesh of a cone with default settings.
pub fn generate(cone: &ConeDescriptor) -> Result<Mesh, MeshError> {
    generate_with(cone, &GlobalConfig::default())
}

/// Generates the full mesh of a cone, deriving the lattice only once.
pub fn generate_with(cone: &ConeDescriptor, config: &GlobalConfig) -> Result<Mesh, MeshError> {
    let polar = points_polar_with_tolerance(cone, config.tolerance)?;
    let vertices = index_points(&to_cartesian(cone, &polar));
    let table = RingTable::from_vertices(&vertices);
    let faces = stitch(&table, cone.rings())?;

    debug!(
        sides = cone.sides(),
        rings = cone.rings(),
        vertices = vertices.len(),
        faces = faces.len(),
        "generated cone mesh"
    );

    Ok(Mesh::from_parts(vertices, faces))
}

#[cfg(test)]
mod tests;
