//! # Primgen OBJ
//!
//! Serialization for the text mesh format produced by primgen: a
//! Wavefront-OBJ subset of comment lines (`# ...`), vertex lines
//! (`v x y z`, six decimal places) and triangle face lines (`f a b c`,
//! 1-based indices). No normals, texture coordinates, or groups.
//!
//! This is the only crate in the workspace that touches the filesystem.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use primgen_mesh::primitives::sphere_uv;
//! use primgen_obj::{write_obj, WriteOptions};
//!
//! let mesh = sphere_uv(1.0, 16, 8)?;
//! write_obj(
//!     "sphere.obj",
//!     &mesh,
//!     &["Generated sphere (UV)".to_string()],
//!     &WriteOptions::default(),
//! )?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod reader;
pub mod writer;

pub use error::ObjError;
pub use reader::{parse_obj, read_obj};
pub use writer::{format_obj, write_obj, WriteOptions};
