use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;
use na::Point2;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A face references a vertex that doesn't exist.
    #[error("Face {face} references the vertex {index} but the mesh only has {len} vertices.")]
    VertexIndexOutOfBounds {
        /// The index of the faulty face.
        face: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        len: usize,
    },
    /// A face references a vertex normal that doesn't exist.
    #[error("Face {face} references the normal {index} but the mesh only has {len} normals.")]
    NormalIndexOutOfBounds {
        /// The index of the faulty face.
        face: usize,
        /// The out-of-bounds normal index.
        index: u32,
        /// The number of normals of the mesh.
        len: usize,
    },
    /// A face references texture coordinates that don't exist.
    #[error("Face {face} references the texcoord {index} but the mesh only has {len} texcoords.")]
    TexcoordIndexOutOfBounds {
        /// The index of the faulty face.
        face: usize,
        /// The out-of-bounds texture coordinates index.
        index: u32,
        /// The number of texture coordinates of the mesh.
        len: usize,
    },
}

/// A triangular face of a [`TriMesh`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Face {
    /// Indices of the three vertices of this face.
    pub vertices: [u32; 3],
    /// Indices of the normals of this face's vertices, if any.
    pub normals: Option<[u32; 3]>,
    /// Indices of the texture coordinates of this face's vertices, if any.
    pub texcoords: Option<[u32; 3]>,
}

impl Face {
    /// A face referencing only vertex positions.
    pub fn new(vertices: [u32; 3]) -> Self {
        Self {
            vertices,
            normals: None,
            texcoords: None,
        }
    }
}

/// A triangle mesh.
///
/// The mesh is immutable once built: colliders share it behind an `Arc`. The mass properties
/// computed from a mesh are only meaningful if it is closed and its faces are wound
/// counter-clockwise when seen from outside.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point>,
    normals: Vec<Vector>,
    texcoords: Vec<Point2<Real>>,
    faces: Vec<Face>,
    aabb: Aabb,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(vertices: Vec<Point>, indices: Vec<[u32; 3]>) -> Result<Self, TriMeshBuilderError> {
        let faces = indices.into_iter().map(Face::new).collect();
        Self::with_attributes(vertices, vec![], vec![], faces)
    }

    /// Creates a new triangle mesh with optional per-vertex normals and texture coordinates.
    ///
    /// Every index of every face is checked against the size of the buffer it refers to.
    pub fn with_attributes(
        vertices: Vec<Point>,
        normals: Vec<Vector>,
        texcoords: Vec<Point2<Real>>,
        faces: Vec<Face>,
    ) -> Result<Self, TriMeshBuilderError> {
        if faces.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (i, face) in faces.iter().enumerate() {
            if let Some(index) = out_of_bounds(&face.vertices, vertices.len()) {
                return Err(TriMeshBuilderError::VertexIndexOutOfBounds {
                    face: i,
                    index,
                    len: vertices.len(),
                });
            }

            if let Some(index) = face.normals.and_then(|ids| out_of_bounds(&ids, normals.len())) {
                return Err(TriMeshBuilderError::NormalIndexOutOfBounds {
                    face: i,
                    index,
                    len: normals.len(),
                });
            }

            if let Some(index) = face
                .texcoords
                .and_then(|ids| out_of_bounds(&ids, texcoords.len()))
            {
                return Err(TriMeshBuilderError::TexcoordIndexOutOfBounds {
                    face: i,
                    index,
                    len: texcoords.len(),
                });
            }
        }

        let aabb = Aabb::from_points(vertices.iter().copied());

        Ok(Self {
            vertices,
            normals,
            texcoords,
            faces,
            aabb,
        })
    }

    /// The vertex positions of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The vertex normals of this mesh (possibly empty).
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        &self.normals
    }

    /// The texture coordinates of this mesh (possibly empty).
    #[inline]
    pub fn texcoords(&self) -> &[Point2<Real>] {
        &self.texcoords
    }

    /// The faces of this mesh.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    /// The vertex indices of each face.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = [u32; 3]> + '_ {
        self.faces.iter().map(|face| face.vertices)
    }

    /// The `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.faces[i as usize].vertices;
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.faces.len() as u32).map(move |i| self.triangle(i))
    }

    /// The local-space AABB of this mesh, computed when it was built.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }
}

fn out_of_bounds(ids: &[u32; 3], len: usize) -> Option<u32> {
    ids.iter().copied().find(|id| *id as usize >= len)
}
