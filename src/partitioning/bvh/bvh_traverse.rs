use super::{BvhNode, BvhNodeKind};
use crate::partitioning::Bvh;
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

pub(super) type TraversalStack = SmallVec<[u32; TRAVERSAL_STACK_SIZE]>;

/// Iterator over the data of the leaves of a [`Bvh`] for which every node on the path from the
/// root passes a check.
pub struct Leaves<'a, Check: Fn(&BvhNode) -> bool> {
    tree: &'a Bvh,
    stack: TraversalStack,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode) -> bool> Leaves<'a, Check> {
    /// Starts a traversal of `tree`, pruning every subtree whose root fails `check`.
    pub fn new(tree: &'a Bvh, check: Check) -> Leaves<'a, Check> {
        let mut stack = TraversalStack::new();

        if let Some(root) = tree.root() {
            if check(root) {
                stack.push(0);
            }
        }

        Leaves { tree, stack, check }
    }
}

impl<Check: Fn(&BvhNode) -> bool> Iterator for Leaves<'_, Check> {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.tree.node(self.stack.pop()?);

            match node.kind {
                BvhNodeKind::Leaf { data } => return Some(data),
                BvhNodeKind::Internal { children } => {
                    // Pushed in reverse so the first child is visited first.
                    for child in children.into_iter().rev() {
                        if (self.check)(self.tree.node(child)) {
                            self.stack.push(child);
                        }
                    }
                }
            }
        }
    }
}

impl Bvh {
    /// Iterates through the leaves, in depth-first order, whose path from the root only
    /// contains nodes passing `check`.
    pub fn leaves<F: Fn(&BvhNode) -> bool>(&self, check: F) -> Leaves<'_, F> {
        Leaves::new(self, check)
    }

    /// Calls `f` on every node of this tree, parents before children, together with the node's
    /// depth (the root has a depth of 0).
    ///
    /// This is mostly a utility for debug rendering.
    pub fn traverse_depth_first(&self, mut f: impl FnMut(&BvhNode, usize)) {
        if self.nodes.is_empty() {
            return;
        }

        let mut stack: SmallVec<[(u32, usize); TRAVERSAL_STACK_SIZE]> = SmallVec::new();
        stack.push((0, 0));

        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            f(node, depth);

            if let BvhNodeKind::Internal { children } = node.kind {
                stack.push((children[1], depth + 1));
                stack.push((children[0], depth + 1));
            }
        }
    }
}
