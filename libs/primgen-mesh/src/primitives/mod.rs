//! # Primitives
//!
//! Mesh generation for parametric primitives (sphere, torus, plane, saddle).
//!
//! Every generator is a pure function from shape parameters to a
//! [`Mesh`](crate::Mesh): deterministic, no I/O, counter-clockwise
//! winding viewed from outside (or from above for the flat grids).
//! Parameter validation happens before any geometry is built.

pub mod plane;
pub mod saddle;
pub mod sphere;
pub mod torus;

pub use plane::plane_grid;
pub use saddle::saddle_grid;
pub use sphere::sphere_uv;
pub use torus::torus;

use crate::mesh::Mesh;

/// 1-based index of the grid vertex at row `i`, column `j`, for a grid
/// with `cols` vertices per row.
pub(crate) fn grid_index(cols: u32, i: u32, j: u32) -> u32 {
    i * cols + j + 1
}

/// Builds the `(divisions + 1)^2` vertex grid spanning `[-size, size]`
/// in x and y, with `height(x, y)` supplying the z coordinate.
///
/// Row `i` sweeps y, column `j` sweeps x; faces are not emitted here.
pub(crate) fn grid_vertices(size: f64, divisions: u32, height: impl Fn(f64, f64) -> f64) -> Mesh {
    let rows = divisions + 1;
    let mut mesh = Mesh::with_capacity(
        (rows * rows) as usize,
        (2 * divisions * divisions) as usize,
    );

    let step = size * 2.0 / divisions as f64;
    for i in 0..rows {
        let y = -size + i as f64 * step;
        for j in 0..rows {
            let x = -size + j as f64 * step;
            mesh.add_vertex(glam::DVec3::new(x, y, height(x, y)));
        }
    }

    mesh
}

/// Emits two triangles per grid cell for a `cell_rows` x `cell_cols`
/// grid of cells (so `cell_rows + 1` rows of `cell_cols + 1` vertices).
///
/// Each quad `(a, b, c, d)` with `a = idx(i, j)`, `b = idx(i+1, j)`,
/// `c = idx(i+1, j+1)`, `d = idx(i, j+1)` is split into `(a, b, d)`
/// and `(b, c, d)`.
pub(crate) fn emit_grid_faces(mesh: &mut Mesh, cell_rows: u32, cell_cols: u32) {
    let cols = cell_cols + 1;
    for i in 0..cell_rows {
        for j in 0..cell_cols {
            let a = grid_index(cols, i, j);
            let b = grid_index(cols, i + 1, j);
            let c = grid_index(cols, i + 1, j + 1);
            let d = grid_index(cols, i, j + 1);
            mesh.add_face(a, b, d);
            mesh.add_face(b, c, d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_first_row() {
        assert_eq!(grid_index(5, 0, 0), 1);
        assert_eq!(grid_index(5, 0, 4), 5);
    }

    #[test]
    fn test_grid_index_later_rows() {
        assert_eq!(grid_index(5, 1, 0), 6);
        assert_eq!(grid_index(5, 2, 3), 14);
    }
}
