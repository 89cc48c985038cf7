//! Betweenness centrality via Brandes' algorithm
//!
//! # Definition
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! # Brandes' Algorithm (2001)
//!
//! For every source `s`:
//!
//! 1. BFS from `s` records `σ_sv` and the predecessor lists `P_s(w)`
//! 2. Nodes are replayed in reverse discovery order (farthest first) and
//!    dependencies accumulate as
//!
//! ```text
//! δ_s(v) += (σ_sv / σ_sw) × (1 + δ_s(w))     for v ∈ P_s(w)
//! ```
//!
//! 3. `δ_s(w)` is added to `C_B(w)` for every `w ≠ s`
//!
//! Each undirected path is seen once from each endpoint, so the sum is
//! halved. Scores are raw path-count sums unless `normalized` is set, which
//! maps them into [0, 1] via `2 / ((n-1)(n-2))`.
//!
//! The replay order is the whole correctness argument: a node's dependency
//! must be final before it is pushed to its predecessors, which holds only
//! if every node of distance `d + 1` is processed before any of distance `d`.

use super::{fan_out, CentralityScores};
use crate::algorithms::shortest_path::ShortestPaths;
use crate::config::CentralityConfig;
use crate::error::{CentralityError, Result};
use crate::storage::{CsrGraph, NodeId, NodeLabel};
use std::ops::Range;
use tracing::{debug, instrument};

/// Accumulator slot for nodes whose score is not requested
const UNTRACKED: usize = usize::MAX;

/// Betweenness of every node
///
/// # Errors
///
/// Returns `Cancelled` if the config's flag is raised mid-run, or
/// `InvalidConfig` for zero partitions.
///
/// # Complexity
///
/// - Time: O(V · E), parallel over sources
/// - Space: O(V + E) per worker plus one O(V) partial per partition
///
/// # Example
///
/// ```
/// use socnet_centrality::{betweenness_centrality, CentralityConfig, CsrGraph, NodeId};
///
/// // Path 1 — 2 — 3 — 4 — 5
/// let graph = CsrGraph::from_edge_list([(1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
/// let scores = betweenness_centrality(&graph, &CentralityConfig::default()).unwrap();
///
/// assert_eq!(scores.get(NodeId(2)), Some(4.0)); // (3-1) * (5-3)
/// assert_eq!(scores.get(NodeId(0)), Some(0.0));
/// ```
#[instrument(skip(graph, config), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn betweenness_centrality<L: NodeLabel>(
    graph: &CsrGraph<L>,
    config: &CentralityConfig,
) -> Result<CentralityScores> {
    let n = graph.num_nodes();
    let slots: Vec<usize> = (0..n).collect();
    let values = accumulate(graph, &slots, n, config)?;
    Ok(CentralityScores::new(values))
}

/// Betweenness of a single node
///
/// Every source still has to be traversed, so this costs as much as the
/// whole-graph run; it only saves the per-partition accumulators.
///
/// # Errors
///
/// Returns `NodeNotFound` if `target` is not in the graph, or `Cancelled`.
pub fn betweenness_of<L: NodeLabel>(
    graph: &CsrGraph<L>,
    target: NodeId,
    config: &CentralityConfig,
) -> Result<f64> {
    let scores = betweenness_of_many(graph, &[target], config)?;
    Ok(scores.first().copied().unwrap_or(0.0))
}

/// Betweenness of a restricted node set, in the order given
///
/// One accumulation pass serves all targets, which is how a top-N list is
/// re-queried without N separate O(V · E) runs.
///
/// # Errors
///
/// Returns `NodeNotFound` if any target is not in the graph, or `Cancelled`.
#[instrument(skip(graph, targets, config), fields(nodes = graph.num_nodes(), targets = targets.len()))]
pub fn betweenness_of_many<L: NodeLabel>(
    graph: &CsrGraph<L>,
    targets: &[NodeId],
    config: &CentralityConfig,
) -> Result<Vec<f64>> {
    let n = graph.num_nodes();
    let mut slots = vec![UNTRACKED; n];
    let mut tracked = 0;
    for &target in targets {
        if !graph.contains(target) {
            return Err(CentralityError::node_not_found(&target));
        }
        if slots[target.index()] == UNTRACKED {
            slots[target.index()] = tracked;
            tracked += 1;
        }
    }

    let values = accumulate(graph, &slots, tracked, config)?;
    Ok(targets.iter().map(|t| values[slots[t.index()]]).collect())
}

/// Fan Brandes out over source partitions and merge the partials in order
///
/// `slots[v]` is the accumulator position of node `v`, or `UNTRACKED`.
#[allow(clippy::cast_precision_loss)] // node counts far below 2^52
fn accumulate<L: NodeLabel>(
    graph: &CsrGraph<L>,
    slots: &[usize],
    tracked: usize,
    config: &CentralityConfig,
) -> Result<Vec<f64>> {
    let n = graph.num_nodes();

    let partials = fan_out(n, config, |sources| {
        brandes_partition(graph, sources, slots, tracked, config)
    })?;

    let mut totals = vec![0.0_f64; tracked];
    for partial in &partials {
        for (total, value) in totals.iter_mut().zip(partial) {
            *total += value;
        }
    }

    let scale = if config.normalized && n > 2 {
        1.0 / ((n - 1) * (n - 2)) as f64
    } else {
        0.5
    };
    for total in &mut totals {
        *total *= scale;
    }

    debug!(partitions = partials.len(), scale, "merged betweenness partials");
    Ok(totals)
}

/// Run both Brandes phases for every source in `sources`
///
/// Owns its BFS workspace, dependency buffer and accumulator; nothing here is
/// shared with other partitions.
#[allow(clippy::cast_possible_truncation)] // source indices fit u32
fn brandes_partition<L: NodeLabel>(
    graph: &CsrGraph<L>,
    sources: Range<usize>,
    slots: &[usize],
    tracked: usize,
    config: &CentralityConfig,
) -> Result<Vec<f64>> {
    let n = graph.num_nodes();
    let mut paths = ShortestPaths::with_capacity(n);
    let mut delta = vec![0.0_f64; n];
    let mut partial = vec![0.0_f64; tracked];

    for s in sources {
        config.cancel.check()?;
        paths.compute(graph, NodeId(s as u32))?;

        let sigma = paths.sigma_slice();
        let preds = paths.preds_slice();

        // Backward phase: farthest layer first
        for &w in paths.order().iter().rev() {
            let w = w as usize;
            let coeff = (1.0 + delta[w]) / sigma[w];
            for &v in &preds[w] {
                let v = v as usize;
                delta[v] += sigma[v] * coeff;
            }
            if w != s && slots[w] != UNTRACKED {
                partial[slots[w]] += delta[w];
            }
        }

        for &w in paths.order() {
            delta[w as usize] = 0.0;
        }
    }

    Ok(partial)
}
