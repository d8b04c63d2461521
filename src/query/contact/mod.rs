//! Narrow-phase contact generation between pairs of colliders.

pub use self::contact::{Contact, ContactManifold, MAX_MANIFOLD_POINTS};
pub use self::contact_ball_ball::contact_ball_ball;
pub use self::contact_collider_collider::contact_manifold;
pub use self::contact_trimesh_ball::contact_trimesh_ball;

mod contact;
mod contact_ball_ball;
mod contact_collider_collider;
mod contact_trimesh_ball;
