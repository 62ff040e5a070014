//! # Mesh Writer
//!
//! Serializes a mesh to the text format: optional `# comment` header
//! lines, one `v x y z` line per vertex with coordinates to six decimal
//! places, one `f a b c` line per face with 1-based indices.

use crate::error::ObjError;
use config::constants::COORD_PRECISION;
use primgen_mesh::{compact, Mesh};
use std::fmt::Write as _;
use std::path::Path;

/// Options controlling serialization.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Compact the mesh (drop unreferenced vertices, reindex faces)
    /// before writing. Enabled by default; disabling it writes the mesh
    /// exactly as given, without index validation.
    pub compact: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { compact: true }
    }
}

/// Formats a mesh as the text format, returning the file contents.
pub fn format_obj(mesh: &Mesh, header: &[String]) -> String {
    // One short line per vertex/face; 32 bytes is a comfortable estimate.
    let mut out = String::with_capacity(32 * (mesh.vertex_count() + mesh.face_count()) + 64);

    for line in header {
        let _ = writeln!(out, "# {line}");
    }

    for v in mesh.vertices() {
        let _ = writeln!(
            out,
            "v {:.p$} {:.p$} {:.p$}",
            v.x,
            v.y,
            v.z,
            p = COORD_PRECISION
        );
    }

    for [a, b, c] in mesh.faces() {
        let _ = writeln!(out, "f {a} {b} {c}");
    }

    out
}

/// Writes a mesh to `path` in the text format.
///
/// By default the mesh is compacted first, which also validates that
/// every face index lies in `[1, vertex_count]`. The full file contents
/// are formatted in memory before the destination is opened, so a
/// failure never leaves a partial file on disk.
///
/// # Errors
///
/// Returns [`ObjError::Mesh`] if compaction rejects the mesh, or
/// [`ObjError::Io`] (carrying the offending path) if the destination
/// cannot be written.
pub fn write_obj(
    path: impl AsRef<Path>,
    mesh: &Mesh,
    header: &[String],
    options: &WriteOptions,
) -> Result<(), ObjError> {
    let path = path.as_ref();

    let compacted;
    let mesh = if options.compact {
        compacted = compact(mesh)?;
        &compacted
    } else {
        mesh
    };

    let contents = format_obj(mesh, header);
    std::fs::write(path, contents).map_err(|source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    })
}
