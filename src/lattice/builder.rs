//! Lattice builder
//!
//! Owns the node arena and the two attach primitives that wire a new child
//! into the lattice. Construction is row by row: the first value of a row
//! hangs off the frontier as its left child, every further value is attached
//! as a right child while walking the previous row through its sibling links.
//! Each attach also links the child to the neighbouring parent (one hop),
//! which is what gives interior nodes their second parent.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use tracing::{debug, trace};

use super::error::{LatticeError, LatticeResult};
use super::generator::value_count;
use super::node::LatticeNode;
use super::node_id::NodeId;

/// A triangular lattice stored as an arena of nodes.
///
/// The root, when present, is always [`NodeId(0)`](NodeId).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lattice {
    nodes: Vec<LatticeNode>,
    /// Number of rows actually built
    depth: usize,
}

impl Lattice {
    /// Create an empty lattice.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty lattice with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            depth: 0,
        }
    }

    /// Build a lattice of `depth` rows from a row-major value sequence.
    ///
    /// The first value becomes the root. If the supply runs short, the row
    /// being built is truncated and construction stops; values beyond
    /// `d(d+1)/2` are ignored.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::InvalidConfiguration`] if `depth` is 0
    /// - [`LatticeError::EmptyLattice`] if `values` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use pascal_lattice::lattice::Lattice;
    ///
    /// let lattice = Lattice::build(3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(lattice.len(), 6);
    /// assert_eq!(lattice.depth(), 3);
    /// ```
    pub fn build(
        depth: usize,
        values: &[i64],
    ) -> LatticeResult<Self> {
        if depth == 0 {
            return Err(LatticeError::invalid("depth must be at least 1"));
        }
        let (&root_value, mut rest) = values.split_first().ok_or(LatticeError::EmptyLattice)?;

        let capacity = value_count(depth).map_or(values.len(), |n| n.min(values.len()));
        let mut lattice = Lattice::with_capacity(capacity);
        let mut frontier = lattice.add_node(root_value);
        lattice.depth = 1;

        let mut width = 2;
        while width <= depth && !rest.is_empty() {
            let take = width.min(rest.len());
            if take < width {
                debug!(
                    "value supply exhausted: row {} truncated to {} of {} nodes",
                    width, take, width
                );
            }
            let (batch, remaining) = rest.split_at(take);
            rest = remaining;

            let first = lattice.add_node(batch[0]);
            lattice.link_left(frontier, first, true);

            let mut cursor = Some(frontier);
            for &value in &batch[1..] {
                let Some(parent) = cursor else { break };
                let child = lattice.add_node(value);
                lattice.link_right(parent, child, true);
                cursor = lattice.nodes[parent.0].r_sibling;
            }

            trace!("row {} built with {} nodes", width, take);
            frontier = first;
            lattice.depth = width;
            width += 1;
        }

        if !rest.is_empty() {
            debug!("{} surplus values ignored", rest.len());
        }
        debug!(
            "lattice built: {} nodes in {} rows",
            lattice.len(),
            lattice.depth
        );
        Ok(lattice)
    }

    /// Add a detached node and return its ID.
    #[inline]
    pub fn add_node(
        &mut self,
        value: i64,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LatticeNode::new(value));
        id
    }

    /// Attach `child` as the left child of `parent`.
    ///
    /// Sets the back-reference, links `child` to an existing right child of
    /// `parent` as siblings, and attaches `child` as the right child of
    /// `parent`'s left sibling.
    pub fn attach_left_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) -> LatticeResult<()> {
        self.get_node(parent)?;
        self.get_node(child)?;
        self.link_left(parent, child, true);
        Ok(())
    }

    /// Attach `child` as the right child of `parent`.
    ///
    /// Mirror image of [`attach_left_child`](Self::attach_left_child).
    pub fn attach_right_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) -> LatticeResult<()> {
        self.get_node(parent)?;
        self.get_node(child)?;
        self.link_right(parent, child, true);
        Ok(())
    }

    fn link_left(
        &mut self,
        parent: NodeId,
        child: NodeId,
        propagate: bool,
    ) {
        self.nodes[child.0].r_parent = Some(parent);
        self.nodes[parent.0].l_child = Some(child);

        if let Some(right) = self.nodes[parent.0].r_child {
            self.nodes[child.0].r_sibling = Some(right);
            self.nodes[right.0].l_sibling = Some(child);
        }

        // One hop only: the mirrored call must not bounce back.
        if propagate {
            if let Some(neighbour) = self.nodes[parent.0].l_sibling {
                self.link_right(neighbour, child, false);
            }
        }
    }

    fn link_right(
        &mut self,
        parent: NodeId,
        child: NodeId,
        propagate: bool,
    ) {
        self.nodes[child.0].l_parent = Some(parent);
        self.nodes[parent.0].r_child = Some(child);

        if let Some(left) = self.nodes[parent.0].l_child {
            self.nodes[child.0].l_sibling = Some(left);
            self.nodes[left.0].r_sibling = Some(child);
        }

        if propagate {
            if let Some(neighbour) = self.nodes[parent.0].r_sibling {
                self.link_left(neighbour, child, false);
            }
        }
    }

    /// The root node, if any.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    /// Look up a node.
    pub fn get_node(
        &self,
        id: NodeId,
    ) -> LatticeResult<&LatticeNode> {
        self.nodes.get(id.0).ok_or(LatticeError::NodeNotFound(id))
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Hash of every node's value and links.
    ///
    /// Lattices holding the same values wired the same way share a
    /// fingerprint. Memo tables use it to notice they are being reused on a
    /// different lattice.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.nodes.hash(&mut hasher);
        hasher.finish()
    }

    /// Number of rows built. The last one may be truncated.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterate over `(id, node)` pairs in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LatticeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Collect the rows top-down, each left to right, by following sibling
    /// and left-child links from the root.
    pub fn rows(&self) -> Vec<Vec<NodeId>> {
        let mut rows = Vec::with_capacity(self.depth);
        let mut head = self.root();
        while let Some(start) = head {
            let mut row = vec![start];
            let mut cursor = start;
            while let Some(next) = self[cursor].r_sibling {
                row.push(next);
                cursor = next;
            }
            rows.push(row);
            head = self[start].l_child;
        }
        rows
    }
}

impl Index<NodeId> for Lattice {
    type Output = LatticeNode;

    /// # Panics
    ///
    /// Panics if `id` does not belong to this lattice.
    fn index(
        &self,
        id: NodeId,
    ) -> &LatticeNode {
        &self.nodes[id.0]
    }
}
