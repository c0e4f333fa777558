//! Triangular lattice (Pascal's-triangle-shaped DAG)
//!
//! This module builds the lattice from a flat value sequence, evaluates its
//! optimal root-to-leaf path sum and projects it onto a 2-D canvas.
//!
//! # Architecture
//!
//! - [`NodeId`](node_id::NodeId) - Index of a node in the lattice arena
//! - [`LatticeNode`](node::LatticeNode) - Value plus child/parent/sibling links
//! - [`generate_values`](generator::generate_values) - Random row-major values
//! - [`Lattice`](builder::Lattice) - The arena and its attach primitives
//! - [`PathSumEvaluator`](evaluator::PathSumEvaluator) - Memoized or naive path sums
//! - [`project`](layout::project) - Placements and edges for a graph canvas
//! - [`relabel`](label::relabel) - `"value (sum)"` labels
//! - [`generate`](pipeline::generate) - One complete generate action
//! - [`LatticeError`](error::LatticeError) - Errors raised along the way

pub mod builder;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod label;
pub mod layout;
pub mod node;
pub mod node_id;
pub mod pipeline;
pub mod render;

pub use builder::Lattice;
pub use error::{LatticeError, LatticeResult};
pub use evaluator::{evaluate, optimal_path, EvalStats, Evaluation, MemoTable, Mode, PathSumEvaluator};
pub use generator::{generate_values, generate_values_with, value_count};
pub use label::{node_label, relabel, PLACEHOLDER_SUM};
pub use layout::{project, Edge, Layout, LayoutConfig, Placement, Position};
pub use node::LatticeNode;
pub use node_id::NodeId;
pub use pipeline::{generate, generate_with_values, validate, LatticeView};
pub use render::render_text;
