//! The simulation pipeline stepping a set of rigid bodies and joints.

pub use self::physics_world::PhysicsWorld;

mod physics_world;
