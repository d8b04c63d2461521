//! Rigid bodies, joints, contact constraints and the impulse solver acting on them.

pub use self::contact_constraint::{ContactConstraint, ContactPoint};
pub use self::handles::{BodyHandle, JointHandle};
pub use self::joint::{HingeJoint, Joint, JointDesc, JointKind, PointJoint};
pub use self::rigid_body::{MassSpec, RigidBody, RigidBodyDesc};
pub use self::simulation_params::SimulationParams;

mod contact_constraint;
mod handles;
mod joint;
mod rigid_body;
mod simulation_params;
pub mod solver;
