//! # Saddle Grid Primitive
//!
//! Generates a hyperbolic-paraboloid grid: `z = height * (x^2 - y^2)`.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::plane::validate_grid_parameters;
use crate::primitives::{emit_grid_faces, grid_vertices};

/// Creates a saddle surface mesh over a square grid spanning
/// `[-size, size]` in x and y.
///
/// Same grid topology as [`plane_grid`](crate::primitives::plane_grid),
/// but each vertex is lifted to `z = height * (x^2 - y^2)`.
///
/// # Arguments
///
/// * `size` - Half-extent of the grid, must be positive
/// * `divisions` - Grid cells per axis, at least 1
/// * `height` - Scale factor applied to `x^2 - y^2`
///
/// # Example
///
/// ```rust
/// use primgen_mesh::primitives::saddle_grid;
///
/// let mesh = saddle_grid(1.2, 4, 0.6).unwrap();
/// assert_eq!(mesh.vertex_count(), 25);
/// ```
pub fn saddle_grid(size: f64, divisions: u32, height: f64) -> Result<Mesh, MeshError> {
    validate_grid_parameters("saddle", size, divisions)?;

    let mut mesh = grid_vertices(size, divisions, |x, y| height * (x * x - y * y));
    emit_grid_faces(&mut mesh, divisions, divisions);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::compact;
    use config::constants::EPSILON_TOLERANCE;

    #[test]
    fn test_saddle_vertex_and_face_counts() {
        let divisions = 6;
        let mesh = saddle_grid(1.2, divisions, 0.6).unwrap();
        assert_eq!(
            mesh.vertex_count(),
            ((divisions + 1) * (divisions + 1)) as usize
        );
        assert_eq!(mesh.face_count(), (2 * divisions * divisions) as usize);
    }

    #[test]
    fn test_saddle_height_function() {
        let height = 0.6;
        let mesh = saddle_grid(1.2, 8, height).unwrap();
        for v in mesh.vertices() {
            let expected = height * (v.x * v.x - v.y * v.y);
            assert!((v.z - expected).abs() < EPSILON_TOLERANCE);
        }
    }

    #[test]
    fn test_saddle_zero_height_is_flat() {
        let mesh = saddle_grid(1.0, 4, 0.0).unwrap();
        for v in mesh.vertices() {
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn test_saddle_all_vertices_referenced() {
        let mesh = saddle_grid(1.2, 5, 0.6).unwrap();
        let compacted = compact(&mesh).unwrap();
        assert_eq!(compacted, mesh);
    }

    #[test]
    fn test_saddle_invalid_parameters() {
        assert!(saddle_grid(0.0, 4, 0.6).is_err());
        assert!(saddle_grid(1.2, 0, 0.6).is_err());
    }

    #[test]
    fn test_saddle_matches_plane_topology() {
        use crate::primitives::plane_grid;

        let saddle = saddle_grid(1.2, 4, 0.6).unwrap();
        let plane = plane_grid(1.2, 4).unwrap();
        assert_eq!(saddle.faces(), plane.faces());
    }
}
