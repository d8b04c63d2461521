use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::dynamics::solver::VelocityConstraint;
use crate::dynamics::{
    BodyHandle, ContactConstraint, Joint, JointDesc, JointHandle, RigidBody, SimulationParams,
};
use crate::math::Real;
use crate::query;

/// Relative tolerance, in fractions of a substep, under which the time left over by
/// [`PhysicsWorld::advance`] is considered to be a complete substep.
const STEP_SNAP_TOLERANCE: Real = Real::EPSILON * 4.0;

/// A set of rigid bodies and joints advanced by fixed substeps.
///
/// Bodies, joints and contacts are processed in insertion order, making the simulation
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct PhysicsWorld {
    /// The parameters used by every substep.
    pub params: SimulationParams,
    bodies: Vec<RigidBody>,
    joints: Vec<Joint>,
    contacts: Vec<ContactConstraint>,
    remaining_time: Real,
    tick: f64,
}

impl PhysicsWorld {
    /// Creates an empty world.
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    /// Adds a body to this world.
    pub fn insert_body(&mut self, body: RigidBody) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// The body identified by `handle`.
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0)
    }

    /// The body identified by `handle`.
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.0)
    }

    /// All the bodies of this world, indexed by their handles.
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// The first body named `name`.
    pub fn body_by_name(&self, name: &str) -> Option<BodyHandle> {
        self.bodies
            .iter()
            .position(|body| body.name() == Some(name))
            .map(BodyHandle)
    }

    /// Adds a joint to this world.
    ///
    /// # Panics
    ///
    /// Panics if the joint attaches a body to itself or references a body missing from this
    /// world.
    pub fn insert_joint(&mut self, joint: impl Into<Joint>) -> JointHandle {
        let joint = joint.into();
        let [body1, body2] = joint.bodies();
        assert_ne!(body1, body2, "A joint cannot attach a body to itself.");
        assert!(
            body1.0 < self.bodies.len() && body2.0 < self.bodies.len(),
            "A joint references a body missing from the world."
        );

        self.joints.push(joint);
        JointHandle(self.joints.len() - 1)
    }

    /// Adds a joint between the bodies named by `desc`.
    ///
    /// # Panics
    ///
    /// Panics if a body name is unknown, or if both names designate the same body.
    pub fn insert_joint_desc(&mut self, desc: &JointDesc) -> JointHandle {
        let [body1, body2] = [&desc.bodies[0], &desc.bodies[1]].map(|name| {
            self.body_by_name(name)
                .unwrap_or_else(|| panic!("No body named {:?} in the world.", name))
        });
        self.insert_joint(desc.build(body1, body2))
    }

    /// All the joints of this world, indexed by their handles.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// The contacts generated by the last substep.
    pub fn contacts(&self) -> &[ContactConstraint] {
        &self.contacts
    }

    /// The simulated time elapsed since the creation of this world.
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// The time requested by [`PhysicsWorld::advance`] that was too short to fill a substep.
    pub fn remaining_time(&self) -> Real {
        self.remaining_time
    }

    /// Returns `true` if no collider bounds of this world intersect `region`.
    pub fn is_region_empty(&self, region: &Aabb) -> bool {
        !self
            .bodies
            .iter()
            .any(|body| body.collider().is_some() && body.physics_aabb().intersects(region))
    }

    /// Removes every body, joint and contact, and resets the clock.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.joints.clear();
        self.contacts.clear();
        self.remaining_time = 0.0;
        self.tick = 0.0;
    }

    /// Advances the simulation by `dt` seconds, using as many fixed substeps as fit into `dt`
    /// plus the time left over by the previous call.
    ///
    /// # Panics
    ///
    /// Panics if `dt` is negative.
    pub fn advance(&mut self, dt: Real) {
        assert!(dt >= 0.0, "Cannot advance a simulation by a negative time.");

        let step = self.params.max_step_size;
        let total = self.remaining_time + dt;
        // A leftover within rounding error of a full step counts as a full step.
        let num_substeps = (total / step + STEP_SNAP_TOLERANCE).floor();
        self.remaining_time = (total - num_substeps * step).max(0.0);

        let num_substeps = num_substeps as usize;
        if num_substeps > 1 {
            log::debug!(
                "Advancing by {} substeps of {}s (remaining: {}s).",
                num_substeps,
                step,
                self.remaining_time
            );
        }

        for _ in 0..num_substeps {
            self.step();
        }
    }

    /// Runs a single substep of length `params.max_step_size`.
    pub fn step(&mut self) {
        let dt = self.params.max_step_size;

        self.update_contacts();

        for _ in 0..self.params.solver_iterations {
            for joint in &mut self.joints {
                joint.solve_in(&mut self.bodies, &self.params, dt);
            }
            for contact in &mut self.contacts {
                contact.solve_in(&mut self.bodies, &self.params, dt);
            }
        }

        for body in &mut self.bodies {
            body.integrate(&self.params.gravity, dt);
        }

        self.tick += dt as f64;
    }

    fn update_contacts(&mut self) {
        self.contacts.clear();

        for (i, body1) in self.bodies.iter().enumerate() {
            let Some(collider1) = body1.collider() else {
                continue;
            };

            for (j, body2) in self.bodies[..i].iter().enumerate() {
                let Some(collider2) = body2.collider() else {
                    continue;
                };

                if !body1.physics_aabb().intersects(body2.physics_aabb()) {
                    continue;
                }

                if is_immovable(body1) && is_immovable(body2) {
                    continue;
                }

                match query::contact_manifold(body1.pose(), collider1, body2.pose(), collider2) {
                    Ok(manifold) => {
                        let constraint = ContactConstraint::new(
                            BodyHandle(i),
                            body1,
                            BodyHandle(j),
                            body2,
                            &manifold,
                        );
                        self.contacts.extend(constraint);
                    }
                    Err(err) => {
                        log::debug!("Skipping bodies {} and {}: {}.", i, j, err);
                    }
                }
            }
        }

        log::trace!("Generated {} contact constraints.", self.contacts.len());
    }
}

fn is_immovable(body: &RigidBody) -> bool {
    body.inv_mass() == 0.0 && body.world_inv_inertia().iter().all(|e| *e == 0.0)
}
