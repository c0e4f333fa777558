//! Lattice node
//!
//! A single cell of the triangular lattice. All relations are stored as
//! optional arena indices; parents are only ever written by the attach
//! primitives in [`builder`](super::builder).

use std::fmt;

use super::node_id::NodeId;

/// A node in the triangular lattice.
///
/// `l_parent` / `r_parent` are named from the child's point of view: a node
/// attached as somebody's *left* child records that parent as its *right*
/// parent (the parent sits up and to the right), and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LatticeNode {
    /// Raw value, fixed at creation
    value: i64,

    /// Child one row below, to the left
    pub(crate) l_child: Option<NodeId>,
    /// Child one row below, to the right
    pub(crate) r_child: Option<NodeId>,

    /// Parent one row above, to the left
    pub(crate) l_parent: Option<NodeId>,
    /// Parent one row above, to the right
    pub(crate) r_parent: Option<NodeId>,

    /// Neighbour in the same row, to the left
    pub(crate) l_sibling: Option<NodeId>,
    /// Neighbour in the same row, to the right
    pub(crate) r_sibling: Option<NodeId>,
}

impl LatticeNode {
    /// Create a detached node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pascal_lattice::lattice::LatticeNode;
    ///
    /// let node = LatticeNode::new(7);
    /// assert_eq!(node.value(), 7);
    /// assert!(node.is_leaf());
    /// ```
    #[inline]
    pub fn new(value: i64) -> Self {
        Self {
            value,
            l_child: None,
            r_child: None,
            l_parent: None,
            r_parent: None,
            l_sibling: None,
            r_sibling: None,
        }
    }

    /// Get the node's raw value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn l_child(&self) -> Option<NodeId> {
        self.l_child
    }

    #[inline]
    pub fn r_child(&self) -> Option<NodeId> {
        self.r_child
    }

    #[inline]
    pub fn l_parent(&self) -> Option<NodeId> {
        self.l_parent
    }

    #[inline]
    pub fn r_parent(&self) -> Option<NodeId> {
        self.r_parent
    }

    #[inline]
    pub fn l_sibling(&self) -> Option<NodeId> {
        self.l_sibling
    }

    #[inline]
    pub fn r_sibling(&self) -> Option<NodeId> {
        self.r_sibling
    }

    /// Iterate over the existing children, left first.
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.l_child.into_iter().chain(self.r_child)
    }

    /// Number of parents (0 for the root, 1 on the outer edges, 2 inside).
    #[inline]
    pub fn num_parents(&self) -> usize {
        self.l_parent.is_some() as usize + self.r_parent.is_some() as usize
    }

    /// Check if this node is a leaf (no children).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.l_child.is_none() && self.r_child.is_none()
    }
}

impl fmt::Display for LatticeNode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "LatticeNode({})", self.value)
    }
}
