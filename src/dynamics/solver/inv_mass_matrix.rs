use crate::dynamics::RigidBody;
use crate::math::{Matrix, Real, Vector12};
use std::ops::Mul;

/// The block-diagonal inverse mass matrix of a pair of rigid bodies.
///
/// Maps an impulse acting on the twelve velocity components of the pair to the resulting
/// velocity change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvMassMatrix {
    /// The inverse mass of the first body.
    pub inv_mass1: Real,
    /// The world-space inverse inertia tensor of the first body.
    pub inv_inertia1: Matrix,
    /// The inverse mass of the second body.
    pub inv_mass2: Real,
    /// The world-space inverse inertia tensor of the second body.
    pub inv_inertia2: Matrix,
}

impl InvMassMatrix {
    /// The inverse mass matrix of the given pair of bodies.
    pub fn new(body1: &RigidBody, body2: &RigidBody) -> Self {
        Self {
            inv_mass1: body1.inv_mass(),
            inv_inertia1: *body1.world_inv_inertia(),
            inv_mass2: body2.inv_mass(),
            inv_inertia2: *body2.world_inv_inertia(),
        }
    }

    /// Computes `M⁻¹ v`.
    pub fn transform(&self, v: &Vector12) -> Vector12 {
        let mut result = Vector12::zeros();
        result
            .fixed_rows_mut::<3>(0)
            .copy_from(&(v.fixed_rows::<3>(0) * self.inv_mass1));
        result
            .fixed_rows_mut::<3>(3)
            .copy_from(&(self.inv_inertia1 * v.fixed_rows::<3>(3)));
        result
            .fixed_rows_mut::<3>(6)
            .copy_from(&(v.fixed_rows::<3>(6) * self.inv_mass2));
        result
            .fixed_rows_mut::<3>(9)
            .copy_from(&(self.inv_inertia2 * v.fixed_rows::<3>(9)));
        result
    }
}

impl Mul<&Vector12> for &InvMassMatrix {
    type Output = Vector12;

    #[inline]
    fn mul(self, rhs: &Vector12) -> Vector12 {
        self.transform(rhs)
    }
}

impl Mul<Vector12> for &InvMassMatrix {
    type Output = Vector12;

    #[inline]
    fn mul(self, rhs: Vector12) -> Vector12 {
        self.transform(&rhs)
    }
}
