pub use bvh_traverse::Leaves;
pub use bvh_tree::{Bvh, BvhNode, BvhNodeKind};

mod bvh_insert;
mod bvh_queries;
mod bvh_traverse;
mod bvh_tree;
mod bvh_validation;
