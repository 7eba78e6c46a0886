//! # Mesh Data Structure
//!
//! Indexed vertices and triangular faces of a generated cone. Face indices
//! are 1-based, matching the vertex `index` field and the OBJ format.

use crate::error::MeshError;
use config::constants::{MAX_DECIMAL_PLACES, VERTEX_MERGE_EPSILON};
use glam::DVec3;
use serde::Serialize;
use std::collections::HashSet;

/// Ring tag of the synthetic apex on the ground surface.
pub const APEX_RING: i32 = -1;

/// A Cartesian vertex with its 1-based sequence index and ring tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex {
    pub index: u32,
    pub ring: i32,
    pub position: DVec3,
}

/// A triangle as three 1-based vertex indices, wound outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Face(pub [u32; 3]);

impl Face {
    #[inline]
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        self.0
    }

    /// The three directed edges in winding order.
    fn edges(&self) -> [(u32, u32); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }
}

/// A triangle mesh with 1-based indexed vertices.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::{ConeDescriptor, Point};
///
/// let (cone, _) = ConeDescriptor::new(Point::origin(), 100.0, 4, 2, 60.0).unwrap();
/// let mesh = borehole_mesh::generate(&cone).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.face_count(), 16);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates a mesh from vertices ordered by index and faces referencing
    /// them.
    pub fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex with the given 1-based index.
    pub fn vertex(&self, index: u32) -> Option<&Vertex> {
        index
            .checked_sub(1)
            .and_then(|i| self.vertices.get(i as usize))
    }

    /// Returns the apex vertex, always the last one.
    pub fn apex(&self) -> Option<&Vertex> {
        self.vertices.last().filter(|v| v.ring == APEX_RING)
    }

    fn position(&self, index: u32) -> DVec3 {
        self.vertices[(index - 1) as usize].position
    }

    /// Un-normalized normal of a face (twice its area in length).
    ///
    /// Panics if the face references a vertex outside the mesh; run
    /// [`Mesh::validate`] first on untrusted faces.
    pub fn face_normal(&self, face: &Face) -> DVec3 {
        let [a, b, c] = face.indices();
        let v0 = self.position(a);
        (self.position(b) - v0).cross(self.position(c) - v0)
    }

    /// Unit normals of all faces, in face order.
    pub fn face_normals(&self) -> Vec<DVec3> {
        self.faces
            .iter()
            .map(|face| self.face_normal(face).normalize_or_zero())
            .collect()
    }

    /// Signed volume enclosed by the faces.
    ///
    /// Positive when the surface is closed and wound outward. Computed
    /// relative to the first vertex to limit cancellation far from the
    /// origin.
    ///
    /// Panics if a face references a vertex outside the mesh; run
    /// [`Mesh::validate`] first on untrusted faces.
    pub fn signed_volume(&self) -> f64 {
        let Some(reference) = self.vertices.first().map(|v| v.position) else {
            return 0.0;
        };

        self.faces
            .iter()
            .map(|face| {
                let [a, b, c] = face.indices();
                let v0 = self.position(a) - reference;
                let v1 = self.position(b) - reference;
                let v2 = self.position(c) - reference;
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((first.position, first.position), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            })
    }

    /// Vertex positions rounded to `decimal_places`, negative zero folded
    /// to zero.
    ///
    /// Precision is capped at [`MAX_DECIMAL_PLACES`]; coordinates too large
    /// to scale are returned unrounded.
    pub fn rounded_positions(&self, decimal_places: u32) -> Vec<DVec3> {
        let scale = 10f64.powi(decimal_places.min(MAX_DECIMAL_PLACES) as i32);
        let round = |value: f64| {
            let scaled = value * scale;
            if !scaled.is_finite() {
                return value;
            }
            let rounded = scaled.round() / scale;
            if rounded == 0.0 {
                0.0
            } else {
                rounded
            }
        };

        self.vertices
            .iter()
            .map(|v| DVec3::new(round(v.position.x), round(v.position.y), round(v.position.z)))
            .collect()
    }

    /// True when twice the face area is negligible next to the square of its
    /// longest edge, independent of the mesh's units.
    fn is_sliver(&self, face: &Face) -> bool {
        let [a, b, c] = face.indices();
        let (pa, pb, pc) = (self.position(a), self.position(b), self.position(c));
        let longest = pa
            .distance_squared(pb)
            .max(pb.distance_squared(pc))
            .max(pc.distance_squared(pa));
        self.face_normal(face).length() <= VERTEX_MERGE_EPSILON * longest
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Vertex indices run 1..=n in order and positions are finite
    /// - All face indices are valid 1-based references
    /// - No degenerate faces (repeated index, or an area that vanishes
    ///   relative to the face's longest edge)
    /// - Every directed edge appears once and its reverse appears once
    ///   (closed, consistently oriented surface)
    pub fn validate(&self) -> Result<(), MeshError> {
        for (i, v) in self.vertices.iter().enumerate() {
            if v.index as usize != i + 1 {
                return Err(MeshError::invalid_topology(format!(
                    "vertex at position {} carries index {}",
                    i + 1,
                    v.index
                )));
            }
            if !v.position.is_finite() {
                return Err(MeshError::invalid_topology(format!(
                    "vertex {} has a non-finite position",
                    v.index
                )));
            }
        }

        let vertex_count = self.vertices.len() as u32;
        let mut edges = HashSet::with_capacity(self.faces.len() * 3);

        for (n, face) in self.faces.iter().enumerate() {
            let [a, b, c] = face.indices();

            if [a, b, c].iter().any(|&i| i == 0 || i > vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {} references a vertex outside 1..={}",
                    n + 1,
                    vertex_count
                )));
            }

            if a == b || b == c || a == c {
                return Err(MeshError::invalid_topology(format!(
                    "face {} repeats a vertex: {:?}",
                    n + 1,
                    face.indices()
                )));
            }

            if self.is_sliver(face) {
                return Err(MeshError::invalid_topology(format!(
                    "face {} has zero area",
                    n + 1
                )));
            }

            for edge in face.edges() {
                if !edges.insert(edge) {
                    return Err(MeshError::invalid_topology(format!(
                        "directed edge {:?} is used twice",
                        edge
                    )));
                }
            }
        }

        if let Some((a, b)) = edges.iter().find(|(a, b)| !edges.contains(&(*b, *a))) {
            return Err(MeshError::invalid_topology(format!(
                "edge ({a}, {b}) has no opposite edge; the surface is open"
            )));
        }

        Ok(())
    }
}
