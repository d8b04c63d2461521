use super::BvhNodeKind;
use crate::bounding_volume::BoundingVolume;
use crate::partitioning::Bvh;

impl Bvh {
    /// Counts the number of leaves that can be reached from the node at index `id`.
    ///
    /// This is mostly a utility for debugging.
    pub fn reachable_leaf_count(&self, id: u32) -> u32 {
        match self.node(id).kind {
            BvhNodeKind::Leaf { .. } => 1,
            BvhNodeKind::Internal { children } => {
                self.reachable_leaf_count(children[0]) + self.reachable_leaf_count(children[1])
            }
        }
    }

    /// Panics if the tree isn't well-formed.
    ///
    /// Checks that every internal node's AABB is exactly the union of its children's, that
    /// every node is reachable exactly once, and that the leaf count is consistent.
    pub fn assert_well_formed(&self) {
        if self.nodes.is_empty() {
            assert_eq!(self.leaf_count, 0);
            return;
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut leaves = 0;
        let mut stack = vec![0u32];

        while let Some(id) = stack.pop() {
            assert!(!visited[id as usize], "Node {} reached twice.", id);
            visited[id as usize] = true;
            let node = self.node(id);

            match node.kind {
                BvhNodeKind::Leaf { .. } => leaves += 1,
                BvhNodeKind::Internal { children } => {
                    let merged = self
                        .node(children[0])
                        .aabb
                        .merged(&self.node(children[1]).aabb);
                    assert_eq!(node.aabb, merged, "Node {} isn't refitted.", id);
                    stack.extend_from_slice(&children);
                }
            }
        }

        assert!(visited.iter().all(|v| *v), "Some nodes are unreachable.");
        assert_eq!(leaves, self.leaf_count);
        assert_eq!(self.nodes.len(), 2 * self.leaf_count - 1);
    }
}
