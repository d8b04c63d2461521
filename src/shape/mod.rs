//! Shapes and colliders supported by rigid3d.

pub use self::ball::Ball;
pub use self::collider::{Collider, ColliderType, MeshCollider, SharedCollider};
pub use self::segment::Segment;
pub use self::triangle::Triangle;
pub use self::trimesh::{Face, TriMesh, TriMeshBuilderError};

mod ball;
mod collider;
mod segment;
mod triangle;
mod trimesh;
