//! # Mesh Compaction
//!
//! Removes vertices not referenced by any face and renumbers the
//! survivors contiguously, rewriting face indices to match.

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Compacts a mesh: validates face indices, drops unreferenced vertices,
/// and renumbers the remaining vertices contiguously starting at 1,
/// preserving their relative order.
///
/// If the mesh has no faces at all, the vertices pass through unchanged
/// ("unreferenced" is meaningless with zero faces).
///
/// The operation is idempotent: compacting an already-compact mesh
/// yields an identical mesh.
///
/// # Errors
///
/// Returns [`MeshError::IndexOutOfRange`] if any face references an
/// index outside `[1, vertex_count]`.
///
/// # Example
///
/// ```rust
/// use primgen_mesh::{compact, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);     // never referenced
/// let a = mesh.add_vertex(DVec3::X);
/// let b = mesh.add_vertex(DVec3::Y);
/// let c = mesh.add_vertex(DVec3::Z);
/// mesh.add_face(a, b, c);
///
/// let compacted = compact(&mesh)?;
/// assert_eq!(compacted.vertex_count(), 3);
/// assert_eq!(compacted.faces()[0], [1, 2, 3]);
/// # Ok::<(), primgen_mesh::MeshError>(())
/// ```
pub fn compact(mesh: &Mesh) -> Result<Mesh, MeshError> {
    let vertex_count = mesh.vertex_count();

    // Validate every index before touching any geometry.
    let mut used = vec![false; vertex_count];
    for face in mesh.faces() {
        for &index in face {
            if index < 1 || index as usize > vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
            used[(index - 1) as usize] = true;
        }
    }

    if mesh.faces().is_empty() {
        return Ok(mesh.clone());
    }

    let kept = used.iter().filter(|&&u| u).count();
    let mut compacted = Mesh::with_capacity(kept, mesh.face_count());

    // Old 1-based index -> new 1-based index (0 = dropped).
    let mut remap = vec![0u32; vertex_count];
    for (i, vertex) in mesh.vertices().iter().enumerate() {
        if used[i] {
            remap[i] = compacted.add_vertex(*vertex);
        }
    }

    for face in mesh.faces() {
        let [a, b, c] = *face;
        compacted.add_face(
            remap[(a - 1) as usize],
            remap[(b - 1) as usize],
            remap[(c - 1) as usize],
        );
    }

    Ok(compacted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_with_orphan() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(9.0, 9.0, 9.0)); // orphan
        let a = mesh.add_vertex(DVec3::ZERO);
        let b = mesh.add_vertex(DVec3::X);
        let c = mesh.add_vertex(DVec3::Y);
        mesh.add_face(a, b, c);
        mesh
    }

    #[test]
    fn test_compact_drops_unreferenced_vertices() {
        let mesh = triangle_with_orphan();
        let compacted = compact(&mesh).unwrap();
        assert_eq!(compacted.vertex_count(), 3);
        assert_eq!(compacted.face_count(), 1);
        assert_eq!(compacted.faces()[0], [1, 2, 3]);
        // Relative order preserved
        assert_eq!(compacted.vertex(1), DVec3::ZERO);
        assert_eq!(compacted.vertex(2), DVec3::X);
        assert_eq!(compacted.vertex(3), DVec3::Y);
    }

    #[test]
    fn test_compact_no_faces_passes_vertices_through() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        let compacted = compact(&mesh).unwrap();
        assert_eq!(compacted, mesh);
    }

    #[test]
    fn test_compact_empty_mesh() {
        let mesh = Mesh::new();
        let compacted = compact(&mesh).unwrap();
        assert!(compacted.is_empty());
        assert_eq!(compacted.face_count(), 0);
    }

    #[test]
    fn test_compact_is_idempotent() {
        let mesh = triangle_with_orphan();
        let once = compact(&mesh).unwrap();
        let twice = compact(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compact_rejects_index_too_large() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_face(1, 2, 3);
        let err = compact(&mesh).unwrap_err();
        match err {
            MeshError::IndexOutOfRange {
                index,
                vertex_count,
            } => {
                assert_eq!(index, 3);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compact_rejects_zero_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(0, 1, 2);
        assert!(matches!(
            compact(&mesh),
            Err(MeshError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_compact_rewrites_interleaved_orphans() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::splat(7.0)); // orphan between used vertices
        let b = mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::splat(8.0)); // orphan
        let c = mesh.add_vertex(DVec3::Y);
        mesh.add_face(a, b, c);

        let compacted = compact(&mesh).unwrap();
        assert_eq!(compacted.vertex_count(), 3);
        assert_eq!(compacted.faces()[0], [1, 2, 3]);
    }
}
