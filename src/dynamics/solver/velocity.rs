use super::InvMassMatrix;
use crate::math::{Jacobian, Real, Vector, Vector12};
use na::{SMatrix, SVector};

/// Assembles a Jacobian row from its four 3D blocks.
#[inline]
pub fn jacobian_row(
    linear1: &Vector,
    angular1: &Vector,
    linear2: &Vector,
    angular2: &Vector,
) -> Vector12 {
    let mut row = Vector12::zeros();
    row.fixed_rows_mut::<3>(0).copy_from(linear1);
    row.fixed_rows_mut::<3>(3).copy_from(angular1);
    row.fixed_rows_mut::<3>(6).copy_from(linear2);
    row.fixed_rows_mut::<3>(9).copy_from(angular2);
    row
}

/// The effective mass `(J M⁻¹ Jᵀ)⁻¹` of `L` constraint rows.
///
/// If `J M⁻¹ Jᵀ` is singular, every entry of the result is NaN.
pub fn effective_mass<const L: usize>(
    jacobian: &Jacobian<L>,
    inv_mass: &InvMassMatrix,
) -> SMatrix<Real, L, L> {
    let mj: [Vector12; L] = std::array::from_fn(|i| inv_mass * jacobian.row(i).transpose());
    let jmj = SMatrix::<Real, L, L>::from_fn(|i, k| jacobian.row(i).transpose().dot(&mj[k]));

    jmj.try_inverse()
        .unwrap_or_else(|| SMatrix::repeat(Real::NAN))
}

/// The effective mass `1 / (j M⁻¹ jᵀ)` of a single constraint row.
#[inline]
pub fn effective_mass_row(jacobian: &Vector12, inv_mass: &InvMassMatrix) -> Real {
    1.0 / jacobian.dot(&(inv_mass * jacobian))
}

/// The impulses cancelling the constraint velocity `J V + bias`.
pub fn resolve<const L: usize>(
    jacobian: &Jacobian<L>,
    inv_mass: &InvMassMatrix,
    velocity: &Vector12,
    bias: &SVector<Real, L>,
) -> SVector<Real, L> {
    effective_mass(jacobian, inv_mass) * (-bias - jacobian * velocity)
}

/// The impulse cancelling the constraint velocity `j V + bias` of a single row.
#[inline]
pub fn resolve_row(
    jacobian: &Vector12,
    inv_mass: &InvMassMatrix,
    velocity: &Vector12,
    bias: Real,
) -> Real {
    effective_mass_row(jacobian, inv_mass) * (-bias - jacobian.dot(velocity))
}

/// The velocity change `M⁻¹ Jᵀ λ` caused by the impulses `lambda`.
#[inline]
pub fn apply_impulse<const L: usize>(
    jacobian: &Jacobian<L>,
    inv_mass: &InvMassMatrix,
    lambda: &SVector<Real, L>,
) -> Vector12 {
    inv_mass * (jacobian.transpose() * lambda)
}

/// The velocity change `M⁻¹ jᵀ λ` caused by the impulse `lambda` along a single row.
#[inline]
pub fn apply_impulse_row(jacobian: &Vector12, inv_mass: &InvMassMatrix, lambda: Real) -> Vector12 {
    inv_mass * (jacobian * lambda)
}
