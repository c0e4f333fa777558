//! Path-sum evaluator
//!
//! Computes the best root-to-leaf path sum over the lattice by recursion on
//! the children. Results live in a caller-owned [`MemoTable`]; whether the
//! table is consulted before recursing is the only difference between the
//! linear (persisted) and exponential (naive) evaluation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builder::Lattice;
use super::node_id::NodeId;

/// Whether the evaluator looks for the largest or the smallest path sum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Maximize,
    Minimize,
}

impl Mode {
    /// Pick the preferred of two sums.
    #[inline]
    pub fn best(
        self,
        a: i64,
        b: i64,
    ) -> i64 {
        match self {
            Mode::Maximize => a.max(b),
            Mode::Minimize => a.min(b),
        }
    }

    /// Check if `candidate` is strictly preferred over `incumbent`.
    #[inline]
    pub fn prefers(
        self,
        candidate: i64,
        incumbent: i64,
    ) -> bool {
        match self {
            Mode::Maximize => candidate > incumbent,
            Mode::Minimize => candidate < incumbent,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Mode::Maximize => write!(f, "maximize"),
            Mode::Minimize => write!(f, "minimize"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" | "maximize" => Ok(Mode::Maximize),
            "min" | "minimize" => Ok(Mode::Minimize),
            other => Err(format!("unknown mode '{}', expected maximize or minimize", other)),
        }
    }
}

/// Per-node path sums, indexed by [`NodeId`].
///
/// An absent entry means the node has not been evaluated. The table
/// remembers the lattice (by [`Lattice::fingerprint`]) and the mode it was
/// filled for; evaluating a different lattice or mode through it starts
/// from an empty table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoTable {
    sums: Vec<Option<i64>>,
    lattice: Option<u64>,
    mode: Option<Mode>,
}

impl MemoTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table sized for and bound to `lattice`.
    pub fn for_lattice(lattice: &Lattice) -> Self {
        Self {
            sums: vec![None; lattice.len()],
            lattice: Some(lattice.fingerprint()),
            mode: None,
        }
    }

    /// Cached sum for `id`, if evaluated.
    #[inline]
    pub fn get(
        &self,
        id: NodeId,
    ) -> Option<i64> {
        self.sums.get(id.0).copied().flatten()
    }

    /// Mode the cached sums were computed under, if any.
    #[inline]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    fn set(
        &mut self,
        id: NodeId,
        sum: i64,
    ) {
        if id.0 >= self.sums.len() {
            self.sums.resize(id.0 + 1, None);
        }
        self.sums[id.0] = Some(sum);
    }

    /// Bind the table to `lattice` and `mode`, dropping sums that belong
    /// to anything else.
    fn bind(
        &mut self,
        lattice: &Lattice,
        mode: Mode,
    ) {
        let fingerprint = lattice.fingerprint();
        let foreign_lattice = self.lattice.is_some_and(|f| f != fingerprint);
        let foreign_mode = self.mode.is_some_and(|m| m != mode);
        if foreign_lattice || foreign_mode {
            debug!(
                "memo table reset (lattice changed: {}, mode changed: {})",
                foreign_lattice, foreign_mode
            );
            self.clear();
        }
        self.sums.resize(lattice.len(), None);
        self.lattice = Some(fingerprint);
        self.mode = Some(mode);
    }

    /// Number of evaluated nodes.
    pub fn len(&self) -> usize {
        self.sums.iter().filter(|s| s.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every cached sum and what they were computed for.
    pub fn clear(&mut self) {
        self.sums.iter_mut().for_each(|s| *s = None);
        self.lattice = None;
        self.mode = None;
    }
}

/// Work counters for one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalStats {
    /// Node sums actually computed
    pub visits: u64,
    /// Lookups answered from the memo table
    pub cache_hits: u64,
}

/// Result of evaluating a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Optimal sum at the root (0 for an empty lattice)
    pub sum: i64,
    pub stats: EvalStats,
}

/// Recursive path-sum evaluator over one lattice.
#[derive(Debug)]
pub struct PathSumEvaluator<'a> {
    lattice: &'a Lattice,
    mode: Mode,
    persist: bool,
    stats: EvalStats,
}

impl<'a> PathSumEvaluator<'a> {
    /// Create an evaluator. With `persist` off the memo table is written but
    /// never read, so shared nodes are recomputed on every reference.
    pub fn new(
        lattice: &'a Lattice,
        mode: Mode,
        persist: bool,
    ) -> Self {
        Self {
            lattice,
            mode,
            persist,
            stats: EvalStats::default(),
        }
    }

    /// Evaluate from the root.
    pub fn evaluate(
        &mut self,
        memo: &mut MemoTable,
    ) -> Evaluation {
        memo.bind(self.lattice, self.mode);
        let sum = match self.lattice.root() {
            Some(root) => self.value_of(root, memo),
            None => 0,
        };
        Evaluation {
            sum,
            stats: self.stats,
        }
    }

    /// Optimal sum of the sub-lattice rooted at `id`.
    fn value_of(
        &mut self,
        id: NodeId,
        memo: &mut MemoTable,
    ) -> i64 {
        if self.persist {
            if let Some(sum) = memo.get(id) {
                self.stats.cache_hits += 1;
                return sum;
            }
        }
        self.stats.visits += 1;

        let lattice = self.lattice;
        let node = &lattice[id];
        let below = match (node.l_child(), node.r_child()) {
            (None, None) => 0,
            (Some(only), None) | (None, Some(only)) => self.value_of(only, memo),
            (Some(left), Some(right)) => {
                let l = self.value_of(left, memo);
                let r = self.value_of(right, memo);
                self.mode.best(l, r)
            }
        };
        let sum = node.value().saturating_add(below);

        memo.set(id, sum);
        sum
    }

    pub fn stats(&self) -> EvalStats {
        self.stats
    }
}

/// Evaluate `lattice` from the root.
///
/// # Examples
///
/// ```
/// use pascal_lattice::lattice::{evaluate, Lattice, MemoTable, Mode};
///
/// let lattice = Lattice::build(3, &[1, 2, 3, 4, 5, 6]).unwrap();
/// let mut memo = MemoTable::for_lattice(&lattice);
/// let eval = evaluate(&lattice, Mode::Maximize, true, &mut memo);
/// assert_eq!(eval.sum, 10);
/// ```
pub fn evaluate(
    lattice: &Lattice,
    mode: Mode,
    persist: bool,
    memo: &mut MemoTable,
) -> Evaluation {
    let evaluation = PathSumEvaluator::new(lattice, mode, persist).evaluate(memo);
    debug!(
        "evaluated {} (persist={}): sum={}, visits={}, cache hits={}",
        mode, persist, evaluation.sum, evaluation.stats.visits, evaluation.stats.cache_hits
    );
    evaluation
}

/// Reconstruct one optimal root-to-leaf path from an evaluated memo table.
///
/// Ties go to the left child. The walk stops early at a node whose children
/// have not been evaluated. A table filled for another mode or lattice
/// yields an empty path.
pub fn optimal_path(
    lattice: &Lattice,
    memo: &MemoTable,
    mode: Mode,
) -> Vec<NodeId> {
    if memo.mode.is_some_and(|m| m != mode)
        || memo.lattice.is_some_and(|f| f != lattice.fingerprint())
    {
        return Vec::new();
    }
    let mut path = Vec::with_capacity(lattice.depth());
    let mut cursor = lattice.root();
    while let Some(id) = cursor {
        path.push(id);
        let mut next: Option<(NodeId, i64)> = None;
        for child in lattice[id].children() {
            let Some(sum) = memo.get(child) else { continue };
            match next {
                Some((_, best)) if !mode.prefers(sum, best) => {}
                _ => next = Some((child, sum)),
            }
        }
        cursor = next.map(|(child, _)| child);
    }
    path
}
