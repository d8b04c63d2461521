//! Non-persistent geometric queries: point projection and contact generation.

pub use self::contact::{
    contact_ball_ball, contact_manifold, contact_trimesh_ball, Contact, ContactManifold,
    MAX_MANIFOLD_POINTS,
};
pub use self::error::Unsupported;

pub mod contact;
mod error;
pub mod point;
