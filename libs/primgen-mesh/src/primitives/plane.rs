//! # Plane Grid Primitive
//!
//! Generates a triangulated square grid in the XY plane (z = 0).

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{emit_grid_faces, grid_vertices};

/// Creates a flat plane grid mesh spanning `[-size, size]` in x and y.
///
/// # Arguments
///
/// * `size` - Half-extent of the grid, must be positive
/// * `divisions` - Grid cells per axis, at least 1
///
/// # Example
///
/// ```rust
/// use primgen_mesh::primitives::plane_grid;
///
/// let mesh = plane_grid(1.4, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 25);
/// assert_eq!(mesh.face_count(), 2 * 4 * 4);
/// ```
pub fn plane_grid(size: f64, divisions: u32) -> Result<Mesh, MeshError> {
    validate_grid_parameters("plane", size, divisions)?;

    let mut mesh = grid_vertices(size, divisions, |_, _| 0.0);
    emit_grid_faces(&mut mesh, divisions, divisions);

    Ok(mesh)
}

/// Shared parameter validation for the flat grid generators.
pub(crate) fn validate_grid_parameters(
    name: &str,
    size: f64,
    divisions: u32,
) -> Result<(), MeshError> {
    if size <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "{name} size must be positive: {size}"
        )));
    }

    if divisions < 1 {
        return Err(MeshError::invalid_parameter(format!(
            "{name} divisions must be at least 1: {divisions}"
        )));
    }

    Ok(())
}
