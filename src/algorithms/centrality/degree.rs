//! Degree centrality: the fraction of other nodes a node touches directly

use super::CentralityScores;
use crate::error::{CentralityError, Result};
use crate::storage::{CsrGraph, NodeLabel};

/// Compute `degree(v) / (n - 1)` for every node
///
/// # Errors
///
/// Returns `DegenerateGraph` if the graph has fewer than two nodes
///
/// # Example
///
/// ```
/// use socnet_centrality::{degree_centrality, CsrGraph, NodeId};
///
/// // Star: center 0 with three leaves
/// let graph = CsrGraph::from_edge_list([(0, 1), (0, 2), (0, 3)]).unwrap();
/// let scores = degree_centrality(&graph).unwrap();
///
/// assert_eq!(scores.get(NodeId(0)), Some(1.0));
/// assert_eq!(scores.get(NodeId(1)), Some(1.0 / 3.0));
/// ```
#[allow(clippy::cast_precision_loss)] // degrees far below 2^52
pub fn degree_centrality<L: NodeLabel>(graph: &CsrGraph<L>) -> Result<CentralityScores> {
    let n = graph.num_nodes();
    if n <= 1 {
        return Err(CentralityError::DegenerateGraph { nodes: n });
    }

    let others = (n - 1) as f64;
    let values = (0..n)
        .map(|v| graph.degree_of(v) as f64 / others)
        .collect();

    Ok(CentralityScores::new(values))
}
