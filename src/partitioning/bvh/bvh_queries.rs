use super::{BvhNode, Leaves};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::Bvh;

impl Bvh {
    /// Iterates through the data of every leaf whose AABB strictly intersects `aabb`.
    ///
    /// Leaves that only touch `aabb` are not reported.
    pub fn intersect_aabb<'a>(
        &'a self,
        aabb: &'a Aabb,
    ) -> Leaves<'a, impl Fn(&BvhNode) -> bool + 'a> {
        self.leaves(move |node: &BvhNode| node.aabb.intersects(aabb))
    }

    /// Collects the data of every leaf whose AABB strictly intersects `aabb`.
    ///
    /// The order of the result is unspecified.
    pub fn query(&self, aabb: &Aabb) -> Vec<u32> {
        self.intersect_aabb(aabb).collect()
    }
}
