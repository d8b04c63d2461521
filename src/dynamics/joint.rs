use crate::dynamics::solver::{
    apply_impulse, body_pair_mut, jacobian_row, resolve, set_velocities, velocity_vector,
    InvMassMatrix, VelocityConstraint,
};
use crate::dynamics::{BodyHandle, RigidBody, SimulationParams};
use crate::math::{Jacobian, Matrix, Point, Real, Vector, Vector12, Vector2};
use crate::utils;

/// A joint keeping an anchor point of each body at the same location.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointJoint {
    /// The first attached body.
    pub body1: BodyHandle,
    /// The second attached body.
    pub body2: BodyHandle,
    /// The anchor, in the local frame of the first body.
    pub local_anchor1: Point,
    /// The anchor, in the local frame of the second body.
    pub local_anchor2: Point,
}

impl PointJoint {
    /// Creates a point joint between two distinct bodies.
    pub fn new(
        body1: BodyHandle,
        body2: BodyHandle,
        local_anchor1: Point,
        local_anchor2: Point,
    ) -> Self {
        assert_ne!(body1, body2, "A joint cannot attach a body to itself.");
        Self {
            body1,
            body2,
            local_anchor1,
            local_anchor2,
        }
    }

    /// Applies the impulse bringing both anchors together to the velocity vector `v`.
    fn solve_anchors(
        &self,
        body1: &RigidBody,
        body2: &RigidBody,
        inv_mass: &InvMassMatrix,
        v: &mut Vector12,
        erp_inv_dt: Real,
    ) {
        let r1 = body1.local_to_global_vec(&self.local_anchor1.coords);
        let r2 = body2.local_to_global_vec(&self.local_anchor2.coords);

        let jacobian = anchor_jacobian(&r1, &r2);
        let error = body2.position() + r2 - body1.position() - r1;
        let bias = error * erp_inv_dt;

        *v += apply_impulse(&jacobian, inv_mass, &resolve(&jacobian, inv_mass, v, &bias));
    }
}

/// The three rows constraining `(x2 + r2) - (x1 + r1)` to zero.
fn anchor_jacobian(r1: &Vector, r2: &Vector) -> Jacobian<3> {
    let mut jacobian = Jacobian::<3>::zeros();
    jacobian
        .fixed_view_mut::<3, 3>(0, 0)
        .copy_from(&-Matrix::identity());
    jacobian.fixed_view_mut::<3, 3>(0, 3).copy_from(&r1.cross_matrix());
    jacobian
        .fixed_view_mut::<3, 3>(0, 6)
        .copy_from(&Matrix::identity());
    jacobian
        .fixed_view_mut::<3, 3>(0, 9)
        .copy_from(&-r2.cross_matrix());
    jacobian
}

impl VelocityConstraint for PointJoint {
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
        self.solve_anchors(body1, body2, &inv_mass, &mut v, params.erp_inv_dt(dt));
        set_velocities(body1, body2, &v);
    }
}

/// A joint keeping an anchor point of each body at the same location, and an axis of each body
/// aligned, leaving a single rotational degree of freedom.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HingeJoint {
    /// The anchors of the hinge.
    pub anchors: PointJoint,
    /// The hinge axis, in the local frame of the first body.
    pub local_axis1: Vector,
    /// The hinge axis, in the local frame of the second body.
    pub local_axis2: Vector,
}

impl HingeJoint {
    /// Creates a hinge joint between two distinct bodies. Axes must be unit vectors.
    pub fn new(
        body1: BodyHandle,
        body2: BodyHandle,
        local_anchor1: Point,
        local_anchor2: Point,
        local_axis1: Vector,
        local_axis2: Vector,
    ) -> Self {
        Self {
            anchors: PointJoint::new(body1, body2, local_anchor1, local_anchor2),
            local_axis1,
            local_axis2,
        }
    }
}

impl VelocityConstraint for HingeJoint {
    fn bodies(&self) -> [BodyHandle; 2] {
        self.anchors.bodies()
    }

    fn solve(
        &mut self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        params: &SimulationParams,
        dt: Real,
    ) {
        let inv_mass = InvMassMatrix::new(body1, body2);
        let erp_inv_dt = params.erp_inv_dt(dt);
        let mut v = velocity_vector(body1, body2);

        self.anchors
            .solve_anchors(body1, body2, &inv_mass, &mut v, erp_inv_dt);

        // Keep the first axis orthogonal to the plane orthogonal to the second one.
        let axis1 = body1.local_to_global_vec(&self.local_axis1);
        let axis2 = body2.local_to_global_vec(&self.local_axis2);
        let [t0, t1] = utils::compute_tangents(&axis2);
        let zero = Vector::zeros();

        let jacobian = Jacobian::<2>::from_rows(&[
            jacobian_row(&zero, &axis1.cross(&t0), &zero, &t0.cross(&axis1)).transpose(),
            jacobian_row(&zero, &axis1.cross(&t1), &zero, &t1.cross(&axis1)).transpose(),
        ]);
        let bias = Vector2::new(axis1.dot(&t0), axis1.dot(&t1)) * erp_inv_dt;

        let lambda = resolve(&jacobian, &inv_mass, &v, &bias);
        v += apply_impulse(&jacobian, &inv_mass, &lambda);
        set_velocities(body1, body2, &v);
    }
}

/// A joint between two rigid bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Joint {
    /// A ball-and-socket joint.
    Point(PointJoint),
    /// A hinge joint.
    Hinge(HingeJoint),
}

impl Joint {
    /// Runs one solver iteration of this joint on the bodies it attaches.
    pub fn solve_in(&mut self, bodies: &mut [RigidBody], params: &SimulationParams, dt: Real) {
        let [h1, h2] = self.bodies();
        let (body1, body2) = body_pair_mut(bodies, h1, h2);
        self.solve(body1, body2, params, dt);
    }
}

impl VelocityConstraint for Joint {
    fn bodies(&self) -> [BodyHandle; 2] {
        match self {
            Joint::Point(joint) => joint.bodies(),
            Joint::Hinge(joint) => joint.bodies(),
        }
    }

    fn solve(
        &mut self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        params: &SimulationParams,
        dt: Real,
    ) {
        match self {
            Joint::Point(joint) => joint.solve(body1, body2, params, dt),
            Joint::Hinge(joint) => joint.solve(body1, body2, params, dt),
        }
    }
}

impl From<PointJoint> for Joint {
    fn from(joint: PointJoint) -> Self {
        Joint::Point(joint)
    }
}

impl From<HingeJoint> for Joint {
    fn from(joint: HingeJoint) -> Self {
        Joint::Hinge(joint)
    }
}

/// The kind and local attachment data of a [`JointDesc`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum JointKind {
    /// A ball-and-socket joint with one local anchor per body.
    Point {
        /// The local anchors of both bodies.
        local_anchors: [Point; 2],
    },
    /// A hinge joint with one local anchor and one local axis per body.
    Hinge {
        /// The local anchors of both bodies.
        local_anchors: [Point; 2],
        /// The local axes of both bodies.
        local_axes: [Vector; 2],
    },
}

/// A joint between two bodies identified by name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct JointDesc {
    /// The names of the two attached bodies.
    pub bodies: [String; 2],
    /// The kind of joint.
    pub kind: JointKind,
}

impl JointDesc {
    /// Creates the joint, given the handles of the bodies named by this description.
    pub fn build(&self, body1: BodyHandle, body2: BodyHandle) -> Joint {
        match self.kind {
            JointKind::Point { local_anchors } => {
                PointJoint::new(body1, body2, local_anchors[0], local_anchors[1]).into()
            }
            JointKind::Hinge {
                local_anchors,
                local_axes,
            } => HingeJoint::new(
                body1,
                body2,
                local_anchors[0],
                local_anchors[1],
                local_axes[0],
                local_axes[1],
            )
            .into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{HingeJoint, Joint, PointJoint};
    use crate::dynamics::solver::VelocityConstraint;
    use crate::dynamics::{BodyHandle, RigidBody, SimulationParams};
    use crate::math::{Matrix, Point, Pose, Vector};

    fn dynamic_body(position: Vector) -> RigidBody {
        let mut body = RigidBody::new(Pose::from_translation(position), None);
        body.set_mass(1.0);
        body.set_inertia(Matrix::identity());
        body
    }

    fn anchor_velocity(body: &RigidBody, local_anchor: &Point) -> Vector {
        body.velocity_at(&body.local_to_global_vec(&local_anchor.coords))
    }

    #[test]
    fn point_joint_cancels_relative_anchor_velocity() {
        let mut b1 = dynamic_body(Vector::zeros());
        let mut b2 = dynamic_body(Vector::new(2.0, 0.0, 0.0));
        b1.linvel = Vector::new(0.0, 1.0, 0.0);
        b2.angvel = Vector::new(0.3, 0.0, -1.0);

        let mut joint = PointJoint::new(
            BodyHandle(0),
            BodyHandle(1),
            Point::new(1.0, 0.0, 0.0),
            Point::new(-1.0, 0.0, 0.0),
        );
        let params = SimulationParams::default();
        joint.solve(&mut b1, &mut b2, &params, params.max_step_size);

        let v1 = anchor_velocity(&b1, &joint.local_anchor1);
        let v2 = anchor_velocity(&b2, &joint.local_anchor2);
        assert_relative_eq!(v1, v2, epsilon = 1.0e-4);
    }

    #[test]
    fn point_joint_corrects_separated_anchors() {
        let mut b1 = dynamic_body(Vector::zeros());
        let mut b2 = dynamic_body(Vector::new(3.0, 0.0, 0.0));
        let mut joint = PointJoint::new(
            BodyHandle(0),
            BodyHandle(1),
            Point::new(1.0, 0.0, 0.0),
            Point::new(-1.0, 0.0, 0.0),
        );
        let params = SimulationParams::default();
        let dt = params.max_step_size;
        joint.solve(&mut b1, &mut b2, &params, dt);

        // The anchors are one unit apart: their relative velocity must close the gap.
        let relative = anchor_velocity(&b2, &joint.local_anchor2)
            - anchor_velocity(&b1, &joint.local_anchor1);
        assert_relative_eq!(
            relative,
            Vector::new(-params.baumgarte_factor / dt, 0.0, 0.0),
            epsilon = 1.0e-2
        );
    }

    #[test]
    fn hinge_keeps_the_free_rotation() {
        let mut b1 = dynamic_body(Vector::zeros());
        let mut b2 = dynamic_body(Vector::new(0.0, 0.0, 1.0));
        b1.set_infinite_mass();
        b1.set_infinite_inertia();
        b2.angvel = Vector::new(1.0, 0.0, 2.0);

        let mut joint = Joint::Hinge(HingeJoint::new(
            BodyHandle(0),
            BodyHandle(1),
            Point::new(0.0, 0.0, 1.0),
            Point::origin(),
            Vector::z(),
            Vector::z(),
        ));
        let params = SimulationParams::default();

        for _ in 0..params.solver_iterations {
            joint.solve(&mut b1, &mut b2, &params, params.max_step_size);
        }

        // Rotation about the hinge axis is untouched, the rest is removed.
        assert_relative_eq!(b2.angvel, Vector::new(0.0, 0.0, 2.0), epsilon = 1.0e-3);
        assert_relative_eq!(b2.linvel, Vector::zeros(), epsilon = 1.0e-3);
    }

    #[test]
    #[should_panic]
    fn joint_on_a_single_body() {
        let anchor = Point::origin();
        let _ = PointJoint::new(BodyHandle(3), BodyHandle(3), anchor, anchor);
    }

    #[test]
    fn solve_in_uses_the_handles() {
        let mut bodies = vec![
            dynamic_body(Vector::zeros()),
            dynamic_body(Vector::new(5.0, 0.0, 0.0)),
            dynamic_body(Vector::new(2.0, 0.0, 0.0)),
        ];
        bodies[2].linvel = Vector::new(0.0, 0.0, 1.0);

        let mut joint = Joint::Point(PointJoint::new(
            BodyHandle(2),
            BodyHandle(0),
            Point::new(-1.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        ));
        let params = SimulationParams::default();
        joint.solve_in(&mut bodies, &params, params.max_step_size);

        assert_eq!(bodies[1].linvel, Vector::zeros());
        assert!(bodies[0].linvel.z > 0.0);
        assert!(bodies[2].linvel.z < 1.0);
    }
}
