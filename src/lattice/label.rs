//! Label renderer

use super::evaluator::MemoTable;
use super::layout::Placement;

/// Sum shown for nodes that have not been evaluated.
pub const PLACEHOLDER_SUM: i64 = 0;

/// `"{value} ({sum})"`, falling back to [`PLACEHOLDER_SUM`].
///
/// # Examples
///
/// ```
/// use pascal_lattice::lattice::node_label;
///
/// assert_eq!(node_label(4, Some(11)), "4 (11)");
/// assert_eq!(node_label(4, None), "4 (0)");
/// ```
#[inline]
pub fn node_label(
    value: i64,
    sum: Option<i64>,
) -> String {
    format!("{} ({})", value, sum.unwrap_or(PLACEHOLDER_SUM))
}

/// Rewrite every placement's label from its value and memoized sum.
pub fn relabel(
    placements: &mut [Placement],
    memo: &MemoTable,
) {
    for placement in placements {
        placement.label = node_label(placement.value, memo.get(placement.node));
    }
}
