use std::fmt;

/// Error indicating that a geometric query is not supported between certain collider kinds.
///
/// Contact generation is only implemented for sphere-sphere and mesh-sphere pairs. A pair of
/// meshes yields this error.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rigid3d::math::{Pose, Vector};
/// use rigid3d::query::{contact_manifold, Unsupported};
/// use rigid3d::shape::{SharedCollider, TriMesh};
/// use rigid3d::transformation;
///
/// let (vertices, indices) = transformation::cuboid(&Vector::repeat(0.5));
/// let mesh = SharedCollider::trimesh(Arc::new(TriMesh::new(vertices, indices).unwrap()));
/// let pose = Pose::identity();
///
/// assert_eq!(
///     contact_manifold(&pose, &mesh, &pose, &mesh).unwrap_err(),
///     Unsupported
/// );
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these colliders")
    }
}

impl std::error::Error for Unsupported {}
