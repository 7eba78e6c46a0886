//! # OBJ Export
//!
//! Writes a [`Mesh`] as Wavefront OBJ text: one `v x y z` line per vertex,
//! then one `f i j k` line per face with 1-based indices.
//!
//! ```text
//! v 0.000 0.000 -100.000
//! v 25.000 0.000 -96.825
//! ...
//! f 1 3 2
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{GlobalConfig, MAX_DECIMAL_PLACES, OBJ_EXTENSION};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders the mesh as OBJ text with coordinates rounded to
/// `config.decimal_places`.
///
/// # Example
///
/// ```rust
/// use borehole_mesh::{export, generate, ConeDescriptor, Point};
/// use config::constants::GlobalConfig;
///
/// let (cone, _) = ConeDescriptor::new(Point::origin(), 100.0, 4, 2, 60.0).unwrap();
/// let text = export::to_obj_string(&generate(&cone).unwrap(), &GlobalConfig::default());
/// assert!(text.starts_with("v 0.000 0.000 -100.000\n"));
/// assert!(text.ends_with("f 10 9 6\n"));
/// ```
pub fn to_obj_string(mesh: &Mesh, config: &GlobalConfig) -> String {
    let mut out = Vec::with_capacity((mesh.vertex_count() + mesh.face_count()) * 32);
    // Writing into a Vec cannot fail, and the output is ASCII.
    let _ = write_obj_to(&mut out, mesh, config);
    String::from_utf8_lossy(&out).into_owned()
}

/// Streams the OBJ lines of `mesh` into `out`.
///
/// Precision above [`MAX_DECIMAL_PLACES`] is capped.
pub fn write_obj_to<W: Write>(
    out: &mut W,
    mesh: &Mesh,
    config: &GlobalConfig,
) -> io::Result<()> {
    let decimal_places = config.decimal_places.min(MAX_DECIMAL_PLACES);
    let precision = decimal_places as usize;
    for p in mesh.rounded_positions(decimal_places) {
        writeln!(
            out,
            "v {:.*} {:.*} {:.*}",
            precision, p.x, precision, p.y, precision, p.z
        )?;
    }
    for face in mesh.faces() {
        let [a, b, c] = face.indices();
        writeln!(out, "f {a} {b} {c}")?;
    }
    Ok(())
}

/// Resolves the target file path, appending the OBJ extension when `name`
/// has none.
pub fn target_path(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(OBJ_EXTENSION)
    }
}

/// Writes the mesh to `dir/name` as OBJ and returns the written path.
///
/// # Errors
///
/// [`MeshError::PathNotFound`] when `dir` does not exist or is not a
/// directory, [`MeshError::Io`] when the file cannot be created or written.
pub fn write_obj(
    mesh: &Mesh,
    dir: impl AsRef<Path>,
    name: &str,
    config: &GlobalConfig,
) -> Result<PathBuf, MeshError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(MeshError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let path = target_path(dir, name);

    let file = File::create(&path).map_err(|e| MeshError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    write_obj_to(&mut writer, mesh, config)
        .and_then(|_| writer.flush())
        .map_err(|e| MeshError::io(&path, e))?;

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "wrote OBJ mesh"
    );

    Ok(path)
}
