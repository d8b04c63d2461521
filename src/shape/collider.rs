use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Pose, Real};
use crate::partitioning::Bvh;
use crate::shape::{Ball, TriMesh};

/// Enum representing the kind of a collider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ColliderType {
    /// A triangle mesh.
    Mesh,
    /// A sphere.
    Sphere,
}

/// A collider made of a triangle mesh, with precomputed mass properties.
///
/// The mesh itself is shared with every other collider built from it. The optional BVH over
/// the mesh faces is only ever modified by explicit calls to [`MeshCollider::rebuild_bvh`] or
/// [`MeshCollider::clear_bvh`].
#[derive(Clone, Debug)]
pub struct MeshCollider {
    mesh: Arc<TriMesh>,
    mass_properties: MassProperties,
    bvh: Option<Bvh>,
}

impl MeshCollider {
    /// Creates a mesh collider without face acceleration structure.
    pub fn new(mesh: Arc<TriMesh>) -> Self {
        let mass_properties = MassProperties::from_trimesh(mesh.vertices(), mesh.indices());

        Self {
            mesh,
            mass_properties,
            bvh: None,
        }
    }

    /// Creates a mesh collider with a BVH over its faces.
    pub fn with_bvh(mesh: Arc<TriMesh>) -> Self {
        let mut result = Self::new(mesh);
        result.rebuild_bvh();
        result
    }

    /// Rebuilds, from scratch, the BVH over the faces of this mesh.
    ///
    /// Faces are inserted in order, each leaf storing the index of its face.
    pub fn rebuild_bvh(&mut self) {
        let bvh: Bvh = self
            .mesh
            .triangles()
            .enumerate()
            .map(|(i, tri)| (tri.local_aabb(), i as u32))
            .collect();
        log::debug!(
            "Rebuilt a BVH with {} nodes over {} faces.",
            bvh.node_count(),
            bvh.len()
        );
        self.bvh = Some(bvh);
    }

    /// Removes the BVH of this collider, if any.
    pub fn clear_bvh(&mut self) {
        self.bvh = None;
    }

    /// The triangle mesh of this collider.
    #[inline]
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// The shared handle to the triangle mesh of this collider.
    #[inline]
    pub fn shared_mesh(&self) -> &Arc<TriMesh> {
        &self.mesh
    }

    /// The BVH over the faces of this mesh, if it was built.
    #[inline]
    pub fn bvh(&self) -> Option<&Bvh> {
        self.bvh.as_ref()
    }

    /// The unit-density mass properties of this mesh.
    #[inline]
    pub fn mass_properties(&self) -> &MassProperties {
        &self.mass_properties
    }
}

/// The geometric proxy of a rigid body.
#[derive(Clone, Debug)]
pub enum Collider {
    /// A triangle mesh, optionally accelerated by a BVH.
    Mesh(MeshCollider),
    /// A sphere centered at the body's origin.
    Sphere(Ball),
}

impl Collider {
    /// The kind of this collider.
    pub fn collider_type(&self) -> ColliderType {
        match self {
            Collider::Mesh(_) => ColliderType::Mesh,
            Collider::Sphere(_) => ColliderType::Sphere,
        }
    }

    /// The volume enclosed by this collider.
    pub fn volume(&self) -> Real {
        match self {
            Collider::Mesh(mesh) => mesh.mass_properties.volume,
            Collider::Sphere(ball) => MassProperties::from_ball(ball.radius).volume,
        }
    }

    /// The unit-density inertia tensor of this collider, relative to its local origin.
    pub fn inertia(&self) -> AngularInertia {
        match self {
            Collider::Mesh(mesh) => mesh.mass_properties.inertia,
            Collider::Sphere(ball) => MassProperties::from_ball(ball.radius).inertia,
        }
    }

    /// The AABB of this collider in its local frame.
    pub fn local_aabb(&self) -> Aabb {
        match self {
            Collider::Mesh(mesh) => *mesh.mesh.local_aabb(),
            Collider::Sphere(ball) => ball.local_aabb(),
        }
    }

    /// The world-space AABB of this collider placed at `pose`.
    ///
    /// The box of a sphere is only translated. The box of a mesh is the box of its rotated
    /// local box corners, which may be larger than the tightest box of the rotated mesh.
    pub fn compute_aabb(&self, pose: &Pose) -> Aabb {
        match self {
            Collider::Mesh(_) => self.local_aabb().transform_by(&pose.to_homogeneous()),
            Collider::Sphere(ball) => ball.local_aabb().translated(&pose.translation),
        }
    }

    /// This collider as a mesh collider, if it is one.
    pub fn as_mesh(&self) -> Option<&MeshCollider> {
        match self {
            Collider::Mesh(mesh) => Some(mesh),
            Collider::Sphere(_) => None,
        }
    }

    /// This collider as a mutable mesh collider, if it is one.
    pub fn as_mesh_mut(&mut self) -> Option<&mut MeshCollider> {
        match self {
            Collider::Mesh(mesh) => Some(mesh),
            Collider::Sphere(_) => None,
        }
    }

    /// This collider as a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            Collider::Sphere(ball) => Some(ball),
            Collider::Mesh(_) => None,
        }
    }
}

/// A collider shared by any number of rigid bodies.
///
/// Cloning a `SharedCollider` only clones the `Arc`.
#[derive(Clone)]
pub struct SharedCollider(pub Arc<Collider>);

impl Deref for SharedCollider {
    type Target = Collider;
    fn deref(&self) -> &Collider {
        &self.0
    }
}

impl AsRef<Collider> for SharedCollider {
    fn as_ref(&self) -> &Collider {
        &self.0
    }
}

impl fmt::Debug for SharedCollider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedCollider ( Arc<{:?}> )", self.0.collider_type())
    }
}

impl SharedCollider {
    /// Wraps a collider into a `SharedCollider`.
    pub fn new(collider: Collider) -> Self {
        Self(Arc::new(collider))
    }

    /// Returns a mutable reference to the underlying collider, cloning it if it is shared.
    pub fn make_mut(&mut self) -> &mut Collider {
        Arc::make_mut(&mut self.0)
    }

    /// Initializes a sphere collider.
    pub fn ball(radius: Real) -> Self {
        Self::new(Collider::Sphere(Ball::new(radius)))
    }

    /// Initializes a triangle mesh collider without BVH.
    pub fn trimesh(mesh: Arc<TriMesh>) -> Self {
        Self::new(Collider::Mesh(MeshCollider::new(mesh)))
    }

    /// Initializes a triangle mesh collider with a BVH over its faces.
    pub fn trimesh_with_bvh(mesh: Arc<TriMesh>) -> Self {
        Self::new(Collider::Mesh(MeshCollider::with_bvh(mesh)))
    }
}
