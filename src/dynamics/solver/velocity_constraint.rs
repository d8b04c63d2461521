use crate::dynamics::{BodyHandle, RigidBody, SimulationParams};
use crate::math::{Real, Vector12};

/// A constraint solved by applying impulses to the velocities of two rigid bodies.
pub trait VelocityConstraint {
    /// The two bodies affected by this constraint.
    fn bodies(&self) -> [BodyHandle; 2];

    /// Runs one solver iteration, updating the velocities of both bodies.
    ///
    /// `body1` and `body2` are the bodies identified by [`VelocityConstraint::bodies`], in the
    /// same order.
    fn solve(
        &mut self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        params: &SimulationParams,
        dt: Real,
    );
}

/// The combined velocity vector `[linvel1, angvel1, linvel2, angvel2]` of two bodies.
pub fn velocity_vector(body1: &RigidBody, body2: &RigidBody) -> Vector12 {
    let mut v = Vector12::zeros();
    v.fixed_rows_mut::<3>(0).copy_from(&body1.linvel);
    v.fixed_rows_mut::<3>(3).copy_from(&body1.angvel);
    v.fixed_rows_mut::<3>(6).copy_from(&body2.linvel);
    v.fixed_rows_mut::<3>(9).copy_from(&body2.angvel);
    v
}

/// Writes a combined velocity vector back to both bodies.
pub fn set_velocities(body1: &mut RigidBody, body2: &mut RigidBody, v: &Vector12) {
    body1.linvel = v.fixed_rows::<3>(0).into_owned();
    body1.angvel = v.fixed_rows::<3>(3).into_owned();
    body2.linvel = v.fixed_rows::<3>(6).into_owned();
    body2.angvel = v.fixed_rows::<3>(9).into_owned();
}

/// Mutable references to two distinct bodies of the same slice.
///
/// # Panics
///
/// Panics if both handles are equal or out of bounds.
pub fn body_pair_mut(
    bodies: &mut [RigidBody],
    handle1: BodyHandle,
    handle2: BodyHandle,
) -> (&mut RigidBody, &mut RigidBody) {
    let (i, j) = (handle1.0, handle2.0);
    assert_ne!(i, j, "A constraint cannot attach a body to itself.");

    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
