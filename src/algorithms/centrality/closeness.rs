//! Closeness centrality: inverse mean distance to reachable nodes
//!
//! ```text
//! C(v) = (r - 1) / Σ d(v, u)      over the r nodes reachable from v
//! ```
//!
//! `C(v) = 0` when nothing else is reachable. With `wf_improved` the score
//! is further scaled by `(r - 1) / (n - 1)` (Wasserman & Faust), which
//! penalizes nodes stuck in small components; on a connected graph the
//! factor is 1.

use super::{fan_out, CentralityScores};
use crate::algorithms::shortest_path::ShortestPaths;
use crate::config::CentralityConfig;
use crate::error::Result;
use crate::storage::{CsrGraph, NodeId, NodeLabel};
use tracing::{debug, instrument};

/// Closeness of every node, one BFS per node
///
/// # Errors
///
/// Returns `Cancelled` if the config's flag is raised mid-run, or
/// `InvalidConfig` for zero partitions.
///
/// # Complexity
///
/// O(V · (V + E)), parallel over sources
///
/// # Example
///
/// ```
/// use socnet_centrality::{closeness_centrality, CentralityConfig, CsrGraph, NodeId};
///
/// // Path a — b — c
/// let graph = CsrGraph::from_edge_list([("a", "b"), ("b", "c")]).unwrap();
/// let scores = closeness_centrality(&graph, &CentralityConfig::default()).unwrap();
///
/// assert_eq!(scores.get(NodeId(1)), Some(1.0));       // b: 2 / (1 + 1)
/// assert_eq!(scores.get(NodeId(0)), Some(2.0 / 3.0)); // a: 2 / (1 + 2)
/// ```
#[allow(clippy::cast_possible_truncation)] // source indices fit u32
#[instrument(skip(graph, config), fields(nodes = graph.num_nodes()))]
pub fn closeness_centrality<L: NodeLabel>(
    graph: &CsrGraph<L>,
    config: &CentralityConfig,
) -> Result<CentralityScores> {
    let n = graph.num_nodes();

    let partials = fan_out(n, config, |sources| {
        let mut paths = ShortestPaths::with_capacity(n);
        let mut values = Vec::with_capacity(sources.len());
        for s in sources {
            config.cancel.check()?;
            paths.compute_distances(graph, NodeId(s as u32))?;
            values.push(closeness_from(&paths, n, config.wf_improved));
        }
        Ok(values)
    })?;

    debug!(partitions = partials.len(), "merged closeness partials");
    Ok(CentralityScores::new(partials.concat()))
}

/// Closeness of a single node
///
/// Same value as the whole-graph computation at `target`, for one BFS.
///
/// # Errors
///
/// Returns `NodeNotFound` if `target` is not in the graph
pub fn closeness_of<L: NodeLabel>(
    graph: &CsrGraph<L>,
    target: NodeId,
    config: &CentralityConfig,
) -> Result<f64> {
    let mut paths = ShortestPaths::with_capacity(graph.num_nodes());
    paths.compute_distances(graph, target)?;
    Ok(closeness_from(&paths, graph.num_nodes(), config.wf_improved))
}

#[allow(clippy::cast_precision_loss)] // counts and hop sums far below 2^52
fn closeness_from(paths: &ShortestPaths, n: usize, wf_improved: bool) -> f64 {
    let total = paths.distance_sum();
    if total == 0 || n <= 1 {
        return 0.0;
    }

    let reached = (paths.reachable_count() - 1) as f64;
    let closeness = reached / total as f64;
    if wf_improved {
        closeness * reached / (n - 1) as f64
    } else {
        closeness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CentralityError;

    fn sequential() -> CentralityConfig {
        CentralityConfig::default().with_parallel(false)
    }

    #[test]
    fn test_empty_graph_yields_no_scores() {
        let graph: CsrGraph<u32> = CsrGraph::new();
        let scores = closeness_centrality(&graph, &sequential()).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_isolated_node_is_zero() {
        let graph = CsrGraph::with_nodes([5], [(0, 1)]).unwrap();
        let scores = closeness_centrality(&graph, &sequential()).unwrap();
        assert_eq!(scores.get(NodeId(2)), Some(0.0));
        assert_eq!(scores.get(NodeId(0)), Some(1.0));
    }

    #[test]
    fn test_star_center_is_one() {
        let graph = CsrGraph::from_edge_list([(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let scores = closeness_centrality(&graph, &sequential()).unwrap();

        assert_eq!(scores.get(NodeId(0)), Some(1.0));
        // leaf: 4 / (1 + 2 + 2 + 2)
        assert_eq!(scores.get(NodeId(1)), Some(4.0 / 7.0));
    }

    #[test]
    fn test_wf_improved_penalizes_small_components() {
        // Edge 0 — 1 plus triangle 2 — 3 — 4
        let graph = CsrGraph::from_edge_list([(0, 1), (2, 3), (3, 4), (4, 2)]).unwrap();
        let plain = closeness_centrality(&graph, &sequential()).unwrap();
        let scaled =
            closeness_centrality(&graph, &sequential().with_wf_improved(true)).unwrap();

        assert_eq!(plain.get(NodeId(0)), Some(1.0));
        assert_eq!(scaled.get(NodeId(0)), Some(0.25)); // 1 * 1/4
        assert_eq!(scaled.get(NodeId(2)), Some(0.5)); // 1 * 2/4
    }

    #[test]
    fn test_single_query_matches_whole_graph() {
        let graph =
            CsrGraph::from_edge_list([(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (4, 5)]).unwrap();
        let config = CentralityConfig::default();
        let all = closeness_centrality(&graph, &config).unwrap();

        for v in graph.nodes() {
            assert_eq!(all.get(v), Some(closeness_of(&graph, v, &config).unwrap()));
        }
    }

    #[test]
    fn test_missing_target() {
        let graph = CsrGraph::from_edge_list([(0, 1)]).unwrap();
        assert!(matches!(
            closeness_of(&graph, NodeId(3), &sequential()),
            Err(CentralityError::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_cancelled_before_start() {
        let graph = CsrGraph::from_edge_list([(0, 1), (1, 2)]).unwrap();
        let config = sequential();
        config.cancel.cancel();
        assert!(matches!(
            closeness_centrality(&graph, &config),
            Err(CentralityError::Cancelled)
        ));
    }
}
