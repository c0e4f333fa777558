//! Generate action
//!
//! One call validates the configuration, obtains values, builds a fresh
//! lattice, evaluates it (timed), projects it and labels the result. Nothing
//! is shared between calls.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use super::builder::Lattice;
use super::error::{LatticeError, LatticeResult};
use super::evaluator::{evaluate, optimal_path, EvalStats, MemoTable, Mode};
use super::generator::{check_bounds, generate_values};
use super::label::relabel;
use super::layout::{project, Edge, Layout, Placement};
use super::node_id::NodeId;
use crate::util::config::GenerateConfig;

/// Everything produced by one generate action.
#[derive(Debug, Clone)]
pub struct LatticeView {
    pub lattice: Lattice,
    pub memo: MemoTable,
    pub layout: Layout,
    pub mode: Mode,
    pub root_optimal_sum: i64,
    /// Duration of the evaluation step only
    pub elapsed: Duration,
    pub stats: EvalStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewOutput<'a> {
    nodes: &'a [Placement],
    edges: &'a [Edge],
    mode: Mode,
    root_optimal_sum: i64,
    elapsed_micros: u128,
    stats: EvalStats,
}

impl LatticeView {
    /// Node IDs along one optimal root-to-leaf path.
    pub fn optimal_path(&self) -> Vec<NodeId> {
        optimal_path(&self.lattice, &self.memo, self.mode)
    }

    /// Serialize the node/edge projection for a visualization host.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ViewOutput {
            nodes: &self.layout.nodes,
            edges: &self.layout.edges,
            mode: self.mode,
            root_optimal_sum: self.root_optimal_sum,
            elapsed_micros: self.elapsed.as_micros(),
            stats: self.stats,
        })
    }
}

/// Reject a configuration before any work is done.
///
/// Returns the number of values the lattice needs.
pub fn validate(
    config: &GenerateConfig,
    explicit: Option<&[i64]>,
) -> LatticeResult<usize> {
    let required = check_bounds(config.depth, config.max_value)?;

    if let Some(values) = explicit {
        if values.len() < required {
            return Err(LatticeError::invalid(format!(
                "depth {} needs {} values, got {}",
                config.depth,
                required,
                values.len()
            )));
        }
    }

    if !config.persist_memo && config.depth > config.max_recompute_depth {
        return Err(LatticeError::RecomputeCeiling {
            depth: config.depth,
            limit: config.max_recompute_depth,
        });
    }
    Ok(required)
}

/// Generate random values per `config` and run the full action.
pub fn generate(config: &GenerateConfig) -> LatticeResult<LatticeView> {
    validate(config, None)?;
    let values = generate_values(config.depth, config.max_value, config.seed)?;
    run(config, &values)
}

/// Run the full action on an explicit value sequence.
///
/// # Examples
///
/// ```
/// use pascal_lattice::lattice::generate_with_values;
/// use pascal_lattice::util::config::GenerateConfig;
///
/// let view = generate_with_values(&GenerateConfig::default(), &[1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(view.root_optimal_sum, 10);
/// assert_eq!(view.layout.nodes[0].label, "1 (10)");
/// ```
pub fn generate_with_values(
    config: &GenerateConfig,
    values: &[i64],
) -> LatticeResult<LatticeView> {
    validate(config, Some(values))?;
    run(config, values)
}

fn run(
    config: &GenerateConfig,
    values: &[i64],
) -> LatticeResult<LatticeView> {
    let lattice = Lattice::build(config.depth, values)?;

    let mut memo = MemoTable::for_lattice(&lattice);
    let started = Instant::now();
    let evaluation = evaluate(&lattice, config.mode, config.persist_memo, &mut memo);
    let elapsed = started.elapsed();

    let mut layout = project(&lattice, &config.layout);
    relabel(&mut layout.nodes, &memo);

    info!(
        "depth {}: {} optimum {} in {:?} ({} visits)",
        config.depth, config.mode, evaluation.sum, elapsed, evaluation.stats.visits
    );

    Ok(LatticeView {
        lattice,
        memo,
        layout,
        mode: config.mode,
        root_optimal_sum: evaluation.sum,
        elapsed,
        stats: evaluation.stats,
    })
}
