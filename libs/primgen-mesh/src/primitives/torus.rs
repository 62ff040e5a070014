//! # Torus Primitive
//!
//! Generates a torus from the standard two-angle parametrization.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::emit_grid_faces;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a torus mesh.
///
/// # Arguments
///
/// * `major_radius` - Distance from the torus center to the tube center,
///   must be positive
/// * `minor_radius` - Tube radius, must be positive
/// * `segments_major` - Segments around the ring, at least 1
/// * `segments_minor` - Segments around the tube, at least 1
///
/// # Topology
///
/// Produces a `(segments_major + 1) x (segments_minor + 1)` vertex grid.
/// Both directions are closed but not deduplicated: the last row and
/// column repeat the first at the seam, and the seam vertices are
/// legitimately referenced once by the cells covering the wrap.
///
/// # Example
///
/// ```rust
/// use primgen_mesh::primitives::torus;
///
/// let mesh = torus(1.4, 0.45, 8, 6).unwrap();
/// assert_eq!(mesh.vertex_count(), 9 * 7);
/// assert_eq!(mesh.face_count(), 2 * 8 * 6);
/// ```
pub fn torus(
    major_radius: f64,
    minor_radius: f64,
    segments_major: u32,
    segments_minor: u32,
) -> Result<Mesh, MeshError> {
    if major_radius <= 0.0 || minor_radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "torus radii must be positive: major={major_radius}, minor={minor_radius}"
        )));
    }

    if segments_major < 1 || segments_minor < 1 {
        return Err(MeshError::invalid_parameter(format!(
            "torus segments must be at least 1: major={segments_major}, minor={segments_minor}"
        )));
    }

    let rows = segments_major + 1;
    let cols = segments_minor + 1;
    let mut mesh = Mesh::with_capacity(
        (rows * cols) as usize,
        (2 * segments_major * segments_minor) as usize,
    );

    for i in 0..rows {
        let theta = i as f64 / segments_major as f64 * 2.0 * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..cols {
            let phi = j as f64 / segments_minor as f64 * 2.0 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let ring = major_radius + minor_radius * cos_phi;
            mesh.add_vertex(DVec3::new(
                ring * cos_theta,
                ring * sin_theta,
                minor_radius * sin_phi,
            ));
        }
    }

    emit_grid_faces(&mut mesh, segments_major, segments_minor);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::compact;
    use config::constants::EPSILON_TOLERANCE;

    #[test]
    fn test_torus_vertex_and_face_counts() {
        let mesh = torus(1.4, 0.45, 10, 6).unwrap();
        assert_eq!(mesh.vertex_count(), 11 * 7);
        assert_eq!(mesh.face_count(), 2 * 10 * 6);
    }

    #[test]
    fn test_torus_all_vertices_referenced() {
        // The duplicated wrap row/column is still covered by faces
        let mesh = torus(1.4, 0.45, 5, 4).unwrap();
        let compacted = compact(&mesh).unwrap();
        assert_eq!(compacted, mesh);
    }

    #[test]
    fn test_torus_seam_duplicates_first_ring() {
        let mesh = torus(2.0, 0.5, 6, 4).unwrap();
        let cols = 5usize;
        let rows = 7usize;
        // Last row repeats the first row of vertices
        for j in 0..cols {
            let first = mesh.vertices()[j];
            let last = mesh.vertices()[(rows - 1) * cols + j];
            assert!((first - last).length() < EPSILON_TOLERANCE);
        }
    }

    #[test]
    fn test_torus_vertices_on_tube_surface() {
        let major = 1.4;
        let minor = 0.45;
        let mesh = torus(major, minor, 12, 8).unwrap();
        for v in mesh.vertices() {
            // Distance from the tube's center circle must equal minor_radius
            let ring = (v.x * v.x + v.y * v.y).sqrt() - major;
            let d = (ring * ring + v.z * v.z).sqrt();
            assert!((d - minor).abs() < EPSILON_TOLERANCE);
        }
    }

    #[test]
    fn test_torus_invalid_radii() {
        assert!(torus(0.0, 0.45, 8, 6).is_err());
        assert!(torus(1.4, -0.1, 8, 6).is_err());
    }

    #[test]
    fn test_torus_invalid_segments() {
        assert!(torus(1.4, 0.45, 0, 6).is_err());
        assert!(torus(1.4, 0.45, 8, 0).is_err());
    }

    #[test]
    fn test_torus_minimal_segments() {
        let mesh = torus(1.4, 0.45, 1, 1).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
    }
}
