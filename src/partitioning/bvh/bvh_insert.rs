use super::bvh_tree::{BvhNode, BvhNodeKind};
use super::bvh_traverse::TraversalStack;
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::partitioning::Bvh;

impl Bvh {
    /// Inserts a new leaf bounded by `aabb` and carrying the index `data`.
    ///
    /// The new leaf descends from the root, choosing at each internal node the child whose
    /// volume would grow the least when absorbing `aabb` (ties go to the second child). Once a
    /// leaf is reached, it is replaced by an internal node having the new leaf as first child
    /// and the old leaf as second child. The boxes along the descent path are then refitted.
    pub fn insert(&mut self, aabb: Aabb, data: u32) {
        self.leaf_count += 1;

        if self.nodes.is_empty() {
            self.nodes.push(BvhNode::leaf(aabb, data));
            return;
        }

        let mut path = TraversalStack::new();
        let mut curr = 0u32;

        loop {
            let node = self.nodes[curr as usize];

            match node.kind {
                BvhNodeKind::Leaf { .. } => {
                    let new_id = self.nodes.len() as u32;
                    self.nodes.push(BvhNode::leaf(aabb, data));
                    let old_id = self.nodes.len() as u32;
                    self.nodes.push(node);
                    self.nodes[curr as usize] =
                        BvhNode::internal(node.aabb.merged(&aabb), [new_id, old_id]);
                    break;
                }
                BvhNodeKind::Internal { children } => {
                    path.push(curr);
                    let growth0 = self.volume_growth(children[0], &aabb);
                    let growth1 = self.volume_growth(children[1], &aabb);
                    curr = if growth0 < growth1 {
                        children[0]
                    } else {
                        children[1]
                    };
                }
            }
        }

        for id in path.into_iter().rev() {
            self.refit_node(id);
        }
    }

    fn volume_growth(&self, id: u32, aabb: &Aabb) -> Real {
        let node_aabb = &self.nodes[id as usize].aabb;
        node_aabb.merged(aabb).volume() - node_aabb.volume()
    }

    fn refit_node(&mut self, id: u32) {
        if let BvhNodeKind::Internal { children } = self.nodes[id as usize].kind {
            let aabb = self.nodes[children[0] as usize]
                .aabb
                .merged(&self.nodes[children[1] as usize].aabb);
            self.nodes[id as usize].aabb = aabb;
        }
    }
}
