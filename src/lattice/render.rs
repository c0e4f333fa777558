//! Plain-text rendering of a labelled lattice for terminals.

use std::collections::HashSet;

use owo_colors::OwoColorize;

use super::node_id::NodeId;
use super::pipeline::LatticeView;

/// Draw the lattice as a centred triangle of labels, one row per line.
///
/// With `highlight` set, nodes on the optimal path are printed bold green.
pub fn render_text(
    view: &LatticeView,
    highlight: bool,
) -> String {
    let placements = &view.layout.nodes;
    let cell = placements.iter().map(|p| p.label.len()).max().unwrap_or(0) + 2;
    let base_width = placements.iter().map(|p| p.column + 1).max().unwrap_or(0);
    let on_path: HashSet<NodeId> = if highlight {
        view.optimal_path().into_iter().collect()
    } else {
        HashSet::new()
    };

    let mut out = String::new();
    let mut rows = placements.chunk_by(|a, b| a.row == b.row).peekable();
    while let Some(row) = rows.next() {
        let indent = (base_width - row.len()) * cell / 2;
        out.push_str(&" ".repeat(indent));
        for placement in row {
            let padded = format!("{:^width$}", placement.label, width = cell);
            if on_path.contains(&placement.node) {
                out.push_str(&padded.green().bold().to_string());
            } else {
                out.push_str(&padded);
            }
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        if rows.peek().is_some() {
            out.push('\n');
        }
    }
    out
}
