//! # UV Sphere Primitive
//!
//! Generates a latitude/longitude sphere with shared pole vertices and
//! no duplicate seam column.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// 1-based index of the vertex at latitude ring `ring`, longitude slot `j`.
///
/// `ring` is in `[0, stacks - 2]` (there are `stacks - 1` rings between
/// the poles); `j` wraps modulo `slices`. The top pole is vertex 1 and
/// rings start at vertex 2.
fn ring_index(slices: u32, ring: u32, j: u32) -> u32 {
    2 + ring * slices + (j % slices)
}

/// Creates a UV sphere mesh.
///
/// # Arguments
///
/// * `radius` - Sphere radius, must be positive
/// * `slices` - Longitude divisions, at least 3
/// * `stacks` - Latitude divisions, at least 2
///
/// # Topology
///
/// Produces exactly `2 + (stacks - 1) * slices` vertices: one top pole,
/// `stacks - 1` latitude rings of `slices` vertices each, one bottom
/// pole. Connectivity wraps around each ring via modulo indexing, so no
/// seam column is duplicated and every vertex ends up referenced by at
/// least one face. Face count is `2 * slices * (stacks - 1)`: a fan per
/// pole plus two triangles per quad in the ladder between rings.
///
/// # Example
///
/// ```rust
/// use primgen_mesh::primitives::sphere_uv;
///
/// let mesh = sphere_uv(1.0, 16, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 + 7 * 16);
/// ```
pub fn sphere_uv(radius: f64, slices: u32, stacks: u32) -> Result<Mesh, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "sphere radius must be positive: {radius}"
        )));
    }

    if slices < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "sphere slices must be at least 3: {slices}"
        )));
    }

    if stacks < 2 {
        return Err(MeshError::invalid_parameter(format!(
            "sphere stacks must be at least 2: {stacks}"
        )));
    }

    let vertex_count = 2 + (stacks - 1) * slices;
    let face_count = 2 * slices * (stacks - 1);
    let mut mesh = Mesh::with_capacity(vertex_count as usize, face_count as usize);

    let top = mesh.add_vertex(DVec3::new(0.0, 0.0, radius));

    // Latitude rings, poles excluded: phi in (0, PI)
    for i in 1..stacks {
        let phi = i as f64 / stacks as f64 * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let z = radius * cos_phi;

        for j in 0..slices {
            let theta = j as f64 / slices as f64 * 2.0 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.add_vertex(DVec3::new(
                radius * sin_phi * cos_theta,
                radius * sin_phi * sin_theta,
                z,
            ));
        }
    }

    let bottom = mesh.add_vertex(DVec3::new(0.0, 0.0, -radius));

    // Top cap: fan from the pole to the first ring
    for j in 0..slices {
        mesh.add_face(
            top,
            ring_index(slices, 0, j),
            ring_index(slices, 0, j + 1),
        );
    }

    // Middle ladder: two triangles per quad between adjacent rings
    for ring in 0..stacks - 2 {
        for j in 0..slices {
            let a = ring_index(slices, ring, j);
            let b = ring_index(slices, ring + 1, j);
            let c = ring_index(slices, ring + 1, j + 1);
            let d = ring_index(slices, ring, j + 1);
            mesh.add_face(a, b, d);
            mesh.add_face(b, c, d);
        }
    }

    // Bottom cap: fan from the last ring to the pole
    let last_ring = stacks - 2;
    for j in 0..slices {
        mesh.add_face(
            ring_index(slices, last_ring, j),
            bottom,
            ring_index(slices, last_ring, j + 1),
        );
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::compact;
    use config::constants::EPSILON_TOLERANCE;

    #[test]
    fn test_sphere_vertex_and_face_counts() {
        let slices = 16;
        let stacks = 8;
        let mesh = sphere_uv(1.0, slices, stacks).unwrap();
        assert_eq!(mesh.vertex_count(), (2 + (stacks - 1) * slices) as usize);
        assert_eq!(
            mesh.face_count(),
            (2 * slices + 2 * slices * (stacks - 2)) as usize
        );
    }

    #[test]
    fn test_sphere_minimal_stacks() {
        // stacks = 2: one ring, two fans, no middle ladder
        let mesh = sphere_uv(2.0, 4, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 8);

        // Every vertex is referenced: compaction changes nothing
        let compacted = compact(&mesh).unwrap();
        assert_eq!(compacted, mesh);
    }

    #[test]
    fn test_sphere_all_vertices_referenced() {
        let mesh = sphere_uv(1.0, 12, 6).unwrap();
        let compacted = compact(&mesh).unwrap();
        assert_eq!(compacted.vertex_count(), mesh.vertex_count());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let radius = 3.0;
        let mesh = sphere_uv(radius, 16, 8).unwrap();
        for v in mesh.vertices() {
            assert!((v.length() - radius).abs() < EPSILON_TOLERANCE);
        }
    }

    #[test]
    fn test_sphere_poles_are_first_and_last() {
        let radius = 1.5;
        let mesh = sphere_uv(radius, 8, 4).unwrap();
        assert_eq!(mesh.vertex(1), DVec3::new(0.0, 0.0, radius));
        assert_eq!(
            mesh.vertex(mesh.vertex_count() as u32),
            DVec3::new(0.0, 0.0, -radius)
        );
    }

    #[test]
    fn test_sphere_face_indices_in_range() {
        let mesh = sphere_uv(1.0, 5, 3).unwrap();
        let n = mesh.vertex_count() as u32;
        for face in mesh.faces() {
            for &idx in face {
                assert!(idx >= 1 && idx <= n);
            }
        }
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(sphere_uv(0.0, 16, 8).is_err());
        assert!(sphere_uv(-1.0, 16, 8).is_err());
    }

    #[test]
    fn test_sphere_too_few_slices() {
        let err = sphere_uv(1.0, 2, 4).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { .. }));
    }

    #[test]
    fn test_sphere_too_few_stacks() {
        assert!(sphere_uv(1.0, 16, 1).is_err());
    }

    #[test]
    fn test_sphere_bounding_box() {
        let radius = 5.0;
        let mesh = sphere_uv(radius, 32, 16).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!((max.z - radius).abs() < EPSILON_TOLERANCE);
        assert!((min.z + radius).abs() < EPSILON_TOLERANCE);
        assert!(min.x >= -radius - EPSILON_TOLERANCE);
        assert!(max.x <= radius + EPSILON_TOLERANCE);
    }
}
