//! Linear algebra type aliases.

use na::{Matrix3, Matrix4, Point3, SMatrix, SVector, UnitVector3, Vector3, U3};

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The number of velocity components of a pair of rigid bodies.
pub const PAIR_DOF: usize = 12;

/// The dimension of the ambient space.
pub type Dim = U3;

/// The point type.
pub type Point = Point3<Real>;

/// The vector type.
pub type Vector = Vector3<Real>;

/// The angular vector type.
pub type AngVector = Vector3<Real>;

/// The unit vector type.
pub type UnitVector = UnitVector3<Real>;

/// The matrix type.
pub type Matrix = Matrix3<Real>;

/// The homogeneous transformation matrix type.
pub type HomogeneousMatrix = Matrix4<Real>;

/// The angular inertia of a rigid body, expressed as a full 3x3 tensor.
pub type AngularInertia = Matrix3<Real>;

/// The two tangent directions orthogonal to a contact normal.
pub type TangentBasis = [Vector3<Real>; 2];

/// The combined velocity of two rigid bodies: linear then angular velocity of
/// the first body, followed by the linear then angular velocity of the second.
pub type Vector12 = SVector<Real, PAIR_DOF>;

/// `L` constraint rows, each acting on the twelve velocity components of a
/// pair of rigid bodies.
pub type Jacobian<const L: usize> = SMatrix<Real, L, PAIR_DOF>;

/// The 2D vector type, used for pairs of impulses.
pub type Vector2 = na::Vector2<Real>;

pub use self::pose::Pose;

mod pose;
