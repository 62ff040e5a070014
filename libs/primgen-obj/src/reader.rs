//! # Mesh Reader
//!
//! Parses the text mesh format back into a [`Mesh`]. Exists for
//! verification tooling: round-tripping generated files and loading
//! reference geometry in downstream testbeds.

use crate::error::ObjError;
use glam::DVec3;
use primgen_mesh::Mesh;
use std::path::Path;

/// Reads a mesh from a file in the text format.
pub fn read_obj(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_obj(&source)
}

/// Parses the text mesh format.
///
/// Accepted lines:
/// - `v x y z` - vertex positions (three floats)
/// - `f a b c ...` - faces with three or more 1-based indices; polygons
///   are fan-triangulated. Tokens of the form `a/b/c` use the leading
///   vertex index; negative indices resolve relative to the vertices
///   parsed so far (`-1` is the most recent vertex).
///
/// Comments (`#`) and unrecognized keywords are skipped. Malformed
/// vertex or face lines fail with the offending 1-based line number.
pub fn parse_obj(source: &str) -> Result<Mesh, ObjError> {
    let mut mesh = Mesh::new();

    for (number, line) in source.lines().enumerate() {
        let number = number + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut coords = [0.0f64; 3];
                for coord in &mut coords {
                    let token = tokens
                        .next()
                        .ok_or_else(|| ObjError::parse(number, "vertex needs 3 coordinates"))?;
                    *coord = token.parse().map_err(|_| {
                        ObjError::parse(number, format!("invalid coordinate '{token}'"))
                    })?;
                }
                mesh.add_vertex(DVec3::from_array(coords));
            }
            Some("f") => {
                let mut indices = Vec::new();
                for token in tokens {
                    indices.push(face_index(token, mesh.vertex_count(), number)?);
                }
                if indices.len() < 3 {
                    return Err(ObjError::parse(number, "face needs at least 3 indices"));
                }
                for i in 1..indices.len() - 1 {
                    mesh.add_face(indices[0], indices[i], indices[i + 1]);
                }
            }
            // Comments, blank lines and unsupported keywords (vn, vt, g, ...)
            _ => {}
        }
    }

    Ok(mesh)
}

/// Resolves one face token to a 1-based vertex index.
///
/// Only the part before the first `/` is used (`v/vt/vn` syntax).
fn face_index(token: &str, vertex_count: usize, line: usize) -> Result<u32, ObjError> {
    let head = token.split('/').next().unwrap_or(token);
    let raw: i64 = head
        .parse()
        .map_err(|_| ObjError::parse(line, format!("invalid face index '{token}'")))?;

    let resolved = match raw {
        0 => return Err(ObjError::parse(line, "face index 0 is not valid")),
        // Negative indices count back from the vertices seen so far
        n if n < 0 => vertex_count as i64 + n + 1,
        n => n,
    };

    if resolved < 1 {
        return Err(ObjError::parse(
            line,
            format!("relative face index '{token}' resolves before the first vertex"),
        ));
    }

    Ok(resolved as u32)
}
