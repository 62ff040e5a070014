//! # Mesh Data Structure
//!
//! Core mesh representation with vertices and triangle faces.

use glam::DVec3;

/// A triangle mesh with vertices and 1-based face indices.
///
/// All geometry uses f64. Faces store **1-based** vertex indices,
/// matching the text output format's convention; index 1 refers to the
/// first vertex. Duplicate vertex positions are legal.
///
/// # Example
///
/// ```rust
/// use primgen_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(a, b, c);
/// assert_eq!(a, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle faces (three 1-based vertex indices each)
    faces: Vec<[u32; 3]>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its 1-based index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        self.vertices.push(position);
        self.vertices.len() as u32
    }

    /// Adds a triangle face by 1-based vertex indices.
    pub fn add_face(&mut self, a: u32, b: u32, c: u32) {
        self.faces.push([a, b, c]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the vertex at the given 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0 or greater than `vertex_count`.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[(index - 1) as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }
}
