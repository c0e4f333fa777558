//! Layout projector
//!
//! Walks the lattice row by row through its sibling links and turns it into
//! the flat node/edge lists a graph canvas consumes.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::builder::Lattice;
use super::node_id::NodeId;

/// Geometry used to place nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width reserved for one node
    #[serde(default = "default_node_width")]
    pub node_width: f64,
    /// Horizontal gap between neighbouring nodes
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Vertical distance between rows
    #[serde(default = "default_row_height")]
    pub row_height: f64,
}

fn default_node_width() -> f64 {
    150.0
}

fn default_padding() -> f64 {
    50.0
}

fn default_row_height() -> f64 {
    100.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 150.0,
            padding: 50.0,
            row_height: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between the origins of neighbouring nodes.
    #[inline]
    pub fn step(&self) -> f64 {
        self.node_width + self.padding
    }
}

/// Canvas coordinates of a node's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One placed node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Display ID, `"1"`, `"2"`, ... in traversal order
    pub id: String,
    pub position: Position,
    /// Raw node value
    pub value: i64,
    pub label: String,
    /// Zero-based row
    pub row: usize,
    /// Zero-based column within the row
    pub column: usize,
    /// Arena ID of the underlying node
    pub node: NodeId,
}

/// A parent → child link between two placed nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// `e{source}-{target}`
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Node and edge lists for one lattice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub nodes: Vec<Placement>,
    pub edges: Vec<Edge>,
}

/// Project `lattice` onto the canvas.
///
/// Rows are centred against the widest row and stacked downward.
///
/// # Examples
///
/// ```
/// use pascal_lattice::lattice::{project, Lattice, LayoutConfig};
///
/// let lattice = Lattice::build(2, &[1, 2, 3]).unwrap();
/// let layout = project(&lattice, &LayoutConfig::default());
/// assert_eq!(layout.nodes.len(), 3);
/// assert_eq!(layout.edges[0].id, "e1-2");
/// ```
pub fn project(
    lattice: &Lattice,
    config: &LayoutConfig,
) -> Layout {
    let order = traverse(lattice);

    let mut row_widths: Vec<usize> = Vec::new();
    for &(_, row, column) in &order {
        if row >= row_widths.len() {
            row_widths.resize(row + 1, 0);
        }
        row_widths[row] = row_widths[row].max(column + 1);
    }
    let base_width = row_widths.iter().copied().max().unwrap_or(0);
    let step = config.step();

    let mut display_ids: Vec<Option<usize>> = vec![None; lattice.len()];
    let nodes: Vec<Placement> = order
        .iter()
        .enumerate()
        .map(|(i, &(id, row, column))| {
            display_ids[id.0] = Some(i + 1);
            let indent = (base_width - row_widths[row]) as f64 * step / 2.0;
            let value = lattice[id].value();
            Placement {
                id: (i + 1).to_string(),
                position: Position {
                    x: indent + column as f64 * step,
                    y: row as f64 * config.row_height,
                },
                value,
                label: value.to_string(),
                row,
                column,
                node: id,
            }
        })
        .collect();

    let mut edges = Vec::new();
    for placement in &nodes {
        for child in lattice[placement.node].children() {
            match display_ids[child.0] {
                Some(target) => edges.push(Edge {
                    id: format!("e{}-{}", placement.id, target),
                    source: placement.id.clone(),
                    target: target.to_string(),
                }),
                None => warn!("child {} of node {} was never placed", child, placement.id),
            }
        }
    }

    debug!(
        "projected {} nodes and {} edges across {} rows",
        nodes.len(),
        edges.len(),
        row_widths.len()
    );
    Layout { nodes, edges }
}

/// Row-major walk: right along the siblings, then rewind to the row start
/// and drop to its left child. Yields `(id, row, column)`.
fn traverse(lattice: &Lattice) -> Vec<(NodeId, usize, usize)> {
    let mut order = Vec::with_capacity(lattice.len());
    let (mut row, mut column) = (0, 0);
    let mut cursor = lattice.root();

    while let Some(id) = cursor {
        order.push((id, row, column));

        if let Some(next) = lattice[id].r_sibling() {
            cursor = Some(next);
            column += 1;
        } else {
            let mut start = id;
            while let Some(prev) = lattice[start].l_sibling() {
                start = prev;
            }
            cursor = lattice[start].l_child();
            row += 1;
            column = 0;
        }
    }
    order
}
