//! Node ID for the lattice arena
//!
//! Nodes are addressed by their slot in the arena, so an ID is only
//! meaningful inside the lattice that produced it.

use std::fmt;

use serde::Serialize;

/// Index of a node inside a [`Lattice`](super::builder::Lattice) arena.
///
/// IDs are handed out in insertion order starting from 0 (the root).
/// They are stable for the lifetime of one lattice and carry no meaning
/// across builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId with the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pascal_lattice::lattice::NodeId;
    ///
    /// let id = NodeId::new(42);
    /// assert_eq!(id.index(), 42);
    /// ```
    #[inline]
    pub fn new(value: usize) -> Self {
        NodeId(value)
    }

    /// Returns the arena slot of this node.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
