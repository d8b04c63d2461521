//! Building blocks of the sequential impulse solver.
//!
//! A constraint between two bodies is a set of `L` Jacobian rows acting on the twelve velocity
//! components of the pair, ordered as `[linvel1, angvel1, linvel2, angvel2]`. Solving it
//! computes the impulse `λ = (J M⁻¹ Jᵀ)⁻¹ (-bias - J V)` and applies `M⁻¹ Jᵀ λ` to the
//! velocities.

pub use self::inv_mass_matrix::InvMassMatrix;
pub use self::velocity::{
    apply_impulse, apply_impulse_row, effective_mass, effective_mass_row, jacobian_row, resolve,
    resolve_row,
};
pub use self::velocity_constraint::{
    body_pair_mut, set_velocities, velocity_vector, VelocityConstraint,
};

mod inv_mass_matrix;
mod velocity;
mod velocity_constraint;
