/// The index of a rigid body inside a [`PhysicsWorld`](crate::pipeline::PhysicsWorld).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub usize);

/// The index of a joint inside a [`PhysicsWorld`](crate::pipeline::PhysicsWorld).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct JointHandle(pub usize);
