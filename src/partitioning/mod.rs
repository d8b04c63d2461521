//! Spatial partitioning tools.

pub use self::bvh::{Bvh, BvhNode, BvhNodeKind, Leaves};

mod bvh;
