use arrayvec::ArrayVec;

use crate::dynamics::solver::{
    apply_impulse, apply_impulse_row, body_pair_mut, jacobian_row, resolve, resolve_row,
    set_velocities, velocity_vector, InvMassMatrix, VelocityConstraint,
};
use crate::dynamics::{BodyHandle, RigidBody, SimulationParams};
use crate::math::{Jacobian, Real, TangentBasis, Vector, Vector12, Vector2};
use crate::query::{ContactManifold, MAX_MANIFOLD_POINTS};
use crate::utils;

/// A contact point between the two bodies of a [`ContactConstraint`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The contact point on each body, relative to the body origin.
    pub offsets: [Vector; 2],
    /// The contact normal, pointing from the first body toward the second.
    pub normal: Vector,
    /// Two directions spanning the plane orthogonal to the normal.
    pub tangents: TangentBasis,
    /// The signed distance between both contact points along the normal. Negative when the
    /// bodies overlap.
    pub separation: Real,
    /// The speed at which both contact points were approaching each other along the normal when
    /// the contact was generated.
    pub closing_velocity: Real,
    /// The friction impulse accumulated along each tangent during the current substep.
    pub tangent_impulse: Vector2,
}

impl ContactPoint {
    /// The Jacobian row of the relative velocity of both contact points along `dir`.
    fn jacobian(&self, dir: &Vector) -> Vector12 {
        jacobian_row(
            &-dir,
            &dir.cross(&self.offsets[0]),
            dir,
            &self.offsets[1].cross(dir),
        )
    }
}

/// The non-penetration and friction constraint between two bodies, with one or two contact
/// points.
///
/// Accumulated impulses start at zero when the constraint is created, at every substep.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactConstraint {
    body1: BodyHandle,
    body2: BodyHandle,
    points: ArrayVec<ContactPoint, MAX_MANIFOLD_POINTS>,
    normal_impulses: Vector2,
}

impl ContactConstraint {
    /// Creates the constraint for the contacts of `manifold`, computed for `body1` and `body2`.
    ///
    /// Returns `None` if `manifold` is empty.
    pub fn new(
        handle1: BodyHandle,
        body1: &RigidBody,
        handle2: BodyHandle,
        body2: &RigidBody,
        manifold: &ContactManifold,
    ) -> Option<Self> {
        if manifold.is_empty() {
            return None;
        }

        let points = manifold
            .iter()
            .map(|contact| {
                let normal = contact.normal.into_inner();
                let world1 = body1.position() + contact.offset1;
                let world2 = body2.position() + contact.offset2;
                let relative_velocity =
                    body1.velocity_at(&contact.offset1) - body2.velocity_at(&contact.offset2);

                ContactPoint {
                    offsets: [contact.offset1, contact.offset2],
                    normal,
                    tangents: utils::compute_tangents(&normal),
                    separation: (world2 - world1).dot(&normal),
                    closing_velocity: normal.dot(&relative_velocity),
                    tangent_impulse: Vector2::zeros(),
                }
            })
            .collect();

        Some(Self {
            body1: handle1,
            body2: handle2,
            points,
            normal_impulses: Vector2::zeros(),
        })
    }

    /// The contact points of this constraint.
    pub fn points(&self) -> &[ContactPoint] {
        &self.points
    }

    /// The normal impulse accumulated at each contact point during the current substep.
    ///
    /// The second component is unused if there is a single contact point.
    pub fn normal_impulses(&self) -> &Vector2 {
        &self.normal_impulses
    }

    /// Runs one solver iteration of this constraint on the bodies it affects.
    pub fn solve_in(&mut self, bodies: &mut [RigidBody], params: &SimulationParams, dt: Real) {
        let (body1, body2) = body_pair_mut(bodies, self.body1, self.body2);
        self.solve(body1, body2, params, dt);
    }

    fn solve_normal_one(
        &mut self,
        inv_mass: &InvMassMatrix,
        v: &mut Vector12,
        erp_inv_dt: Real,
        restitution: Real,
    ) {
        let point = &self.points[0];
        let jacobian = point.jacobian(&point.normal);
        let bias = erp_inv_dt * point.separation - point.closing_velocity * restitution;

        let lambda = resolve_row(&jacobian, inv_mass, v, bias);
        let prev = self.normal_impulses.x;
        self.normal_impulses.x = (prev + lambda).max(0.0);

        *v += apply_impulse_row(&jacobian, inv_mass, self.normal_impulses.x - prev);
    }

    fn solve_normal_two(
        &mut self,
        inv_mass: &InvMassMatrix,
        v: &mut Vector12,
        erp_inv_dt: Real,
        restitution: Real,
    ) {
        let [p0, p1] = [&self.points[0], &self.points[1]];
        let rows = [p0.jacobian(&p0.normal), p1.jacobian(&p1.normal)];
        let jacobian = Jacobian::<2>::from_rows(&[rows[0].transpose(), rows[1].transpose()]);
        let bias = Vector2::new(p0.separation, p1.separation) * erp_inv_dt
            - Vector2::new(p0.closing_velocity, p1.closing_velocity) * restitution;

        let prev = self.normal_impulses;
        let mut sum = prev + resolve(&jacobian, inv_mass, v, &bias);

        if sum.x < 0.0 && sum.y < 0.0 {
            // Both points separate.
            sum = Vector2::zeros();
            *v += apply_impulse(&jacobian, inv_mass, &-prev);
        } else if sum.x < 0.0 {
            // Only the first point separates: solve the second one alone.
            sum.x = 0.0;
            *v += apply_impulse_row(&rows[0], inv_mass, -prev.x);

            // Restart from the impulse accumulated before this iteration, not from the joint
            // solution, which was never applied.
            sum.y = (prev.y + resolve_row(&rows[1], inv_mass, v, bias.y)).max(0.0);
            *v += apply_impulse_row(&rows[1], inv_mass, sum.y - prev.y);
        } else if sum.y < 0.0 {
            sum.y = 0.0;
            *v += apply_impulse_row(&rows[1], inv_mass, -prev.y);

            // Same restart point as above.
            sum.x = (prev.x + resolve_row(&rows[0], inv_mass, v, bias.x)).max(0.0);
            *v += apply_impulse_row(&rows[0], inv_mass, sum.x - prev.x);
        } else {
            *v += apply_impulse(&jacobian, inv_mass, &(sum - prev));
        }

        self.normal_impulses = sum;
    }

    fn solve_friction(&mut self, inv_mass: &InvMassMatrix, v: &mut Vector12, friction: Real) {
        for (i, point) in self.points.iter_mut().enumerate() {
            let jacobian = Jacobian::<2>::from_rows(&[
                point.jacobian(&point.tangents[0]).transpose(),
                point.jacobian(&point.tangents[1]).transpose(),
            ]);

            let lambda = resolve(&jacobian, inv_mass, v, &Vector2::zeros());
            let limit = self.normal_impulses[i] * friction;
            let sum = (point.tangent_impulse + lambda).map(|e| e.max(-limit).min(limit));
            let delta = sum - point.tangent_impulse;
            point.tangent_impulse = sum;

            *v += apply_impulse(&jacobian, inv_mass, &delta);
        }
    }
}

impl VelocityConstraint for ContactConstraint {
    fn bodies(&self) -> [BodyHandle; 2] {
        [self.body1, self.body2]
    }

    fn solve(
        &mut self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        params: &SimulationParams,
        dt: Real,
    ) {
        let inv_mass = InvMassMatrix::new(body1, body2);
        let mut v = velocity_vector(body1, body2);
        let friction = (body1.friction * body2.friction).sqrt();
        let restitution = (body1.restitution * body2.restitution).sqrt();
        let erp_inv_dt = params.erp_inv_dt(dt);

        match self.points.len() {
            1 => self.solve_normal_one(&inv_mass, &mut v, erp_inv_dt, restitution),
            2 => self.solve_normal_two(&inv_mass, &mut v, erp_inv_dt, restitution),
            _ => {}
        }

        self.solve_friction(&inv_mass, &mut v, friction);
        set_velocities(body1, body2, &v);
    }
}
