use super::{HomogeneousMatrix, Matrix, Point, Vector};

/// The position and orientation of a rigid body.
///
/// The rotation is kept as a 3x3 matrix, and is expected to stay orthonormal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Pose {
    /// The position of the local origin, in world-space.
    pub translation: Vector,
    /// The orientation of the local frame.
    pub rotation: Matrix,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// The identity pose.
    pub fn identity() -> Self {
        Self::new(Vector::zeros(), Matrix::identity())
    }

    /// A pose from its translation and rotation.
    pub fn new(translation: Vector, rotation: Matrix) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// A pure translation.
    pub fn from_translation(translation: Vector) -> Self {
        Self::new(translation, Matrix::identity())
    }

    /// The 4x4 homogeneous matrix of this pose.
    pub fn to_homogeneous(&self) -> HomogeneousMatrix {
        let mut result = self.rotation.to_homogeneous();
        result
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.translation);
        result
    }

    /// Maps a point from the local frame to world-space.
    #[inline]
    pub fn transform_point(&self, pt: &Point) -> Point {
        Point::from(self.rotation * pt.coords + self.translation)
    }

    /// Maps a point from world-space to the local frame.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point) -> Point {
        Point::from(self.rotation.tr_mul(&(pt.coords - self.translation)))
    }

    /// Rotates a vector from the local frame to world-space.
    #[inline]
    pub fn transform_vector(&self, v: &Vector) -> Vector {
        self.rotation * v
    }

    /// Rotates a vector from world-space to the local frame.
    #[inline]
    pub fn inverse_transform_vector(&self, v: &Vector) -> Vector {
        self.rotation.tr_mul(v)
    }
}
