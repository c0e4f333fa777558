//! Lattice errors

use super::node_id::NodeId;

/// Errors raised while configuring, building or querying a lattice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    /// Rejected before any construction work begins
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Naive recomputation is exponential in depth, so it is capped
    #[error("naive recomputation is limited to depth {limit}, requested depth {depth}")]
    RecomputeCeiling { depth: usize, limit: usize },

    /// The value supply ran dry before the root could be created
    #[error("lattice is empty: no values were supplied")]
    EmptyLattice,

    /// The ID does not belong to this lattice
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}

impl LatticeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LatticeError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the lattice module.
pub type LatticeResult<T> = Result<T, LatticeError>;
