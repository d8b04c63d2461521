use crate::bounding_volume::Aabb;

/// The content of a BVH node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BvhNodeKind {
    /// A leaf, carrying the index of the object it bounds (typically a face index).
    Leaf {
        /// The user-defined index stored by this leaf.
        data: u32,
    },
    /// An internal node with exactly two children, given as indices into the node arena.
    Internal {
        /// The two children of this node.
        children: [u32; 2],
    },
}

/// A node of a [`Bvh`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNode {
    /// The bounding box of this node.
    ///
    /// For an internal node, this is the union of its children's boxes.
    pub aabb: Aabb,
    /// Whether this node is a leaf or an internal node.
    pub kind: BvhNodeKind,
}

impl BvhNode {
    #[inline(always)]
    pub(super) fn leaf(aabb: Aabb, data: u32) -> Self {
        Self {
            aabb,
            kind: BvhNodeKind::Leaf { data },
        }
    }

    #[inline(always)]
    pub(super) fn internal(aabb: Aabb, children: [u32; 2]) -> Self {
        Self {
            aabb,
            kind: BvhNodeKind::Internal { children },
        }
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, BvhNodeKind::Leaf { .. })
    }

    /// The index stored by this node if it is a leaf.
    #[inline(always)]
    pub fn leaf_data(&self) -> Option<u32> {
        match self.kind {
            BvhNodeKind::Leaf { data } => Some(data),
            BvhNodeKind::Internal { .. } => None,
        }
    }
}

/// A Bounding Volume Hierarchy built by incremental insertion.
///
/// This is a binary tree: each internal node has exactly two children and bounds them. Leaves
/// store a `u32` index into externally-owned data (e.g. the faces of a triangle mesh). The tree
/// doesn't own that data, and must be rebuilt wholesale whenever it changes.
///
/// The shape of the tree only depends on the insertion order: no rebalancing is ever
/// performed.
///
/// All the nodes are stored in a single arena. The root, if any, is always the first node.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) nodes: Vec<BvhNode>,
    pub(super) leaf_count: usize,
}

impl Bvh {
    /// An empty BVH.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of leaves of this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.leaf_count
    }

    /// Does this tree contain no leaf at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    /// The root node of this tree, if it isn't empty.
    #[inline]
    pub fn root(&self) -> Option<&BvhNode> {
        self.nodes.first()
    }

    /// The bounding box of every leaf of this tree.
    ///
    /// This is the invalid AABB if the tree is empty.
    pub fn root_aabb(&self) -> Aabb {
        self.root()
            .map(|root| root.aabb)
            .unwrap_or_else(Aabb::new_invalid)
    }

    /// The node at the given arena index.
    #[inline]
    pub fn node(&self, id: u32) -> &BvhNode {
        &self.nodes[id as usize]
    }

    /// The total number of nodes (internal and leaves) of this tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Removes every node from this tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.leaf_count = 0;
    }
}

impl FromIterator<(Aabb, u32)> for Bvh {
    /// Builds a tree by inserting every `(aabb, data)` pair in iteration order.
    fn from_iter<I: IntoIterator<Item = (Aabb, u32)>>(iter: I) -> Self {
        let mut result = Bvh::new();
        for (aabb, data) in iter {
            result.insert(aabb, data);
        }
        result
    }
}
