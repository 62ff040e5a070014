//! # Primgen Mesh
//!
//! Parametric mesh primitive generation for test/reference geometry.
//! Produces triangle meshes for a UV sphere, a torus, a flat plane grid,
//! and a saddle surface, plus the compaction step that guarantees a
//! well-formed mesh (no unreferenced vertices, valid face indices).
//!
//! ## Architecture
//!
//! ```text
//! primitives (Mesh) → compact (Mesh) → primgen-obj (file)
//! ```
//!
//! Generators and compaction are pure and perform no I/O; serialization
//! lives in the `primgen-obj` crate.
//!
//! ## Usage
//!
//! ```rust
//! use primgen_mesh::primitives::sphere_uv;
//! use primgen_mesh::compact;
//!
//! let mesh = sphere_uv(1.0, 16, 8)?;
//! let mesh = compact(&mesh)?;
//! assert_eq!(mesh.vertex_count(), 2 + 7 * 16);
//! # Ok::<(), primgen_mesh::MeshError>(())
//! ```

pub mod compact;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use compact::compact;
pub use error::MeshError;
pub use mesh::Mesh;
