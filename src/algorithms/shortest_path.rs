//! Single-source shortest paths over unweighted undirected graphs
//!
//! BFS from a source yields, for every reachable node `v`:
//! - `dist[v]`: hop count from the source
//! - `sigma[v]`: number of distinct shortest paths (`sigma[source] = 1`)
//! - `preds[v]`: neighbors one layer closer to the source
//!
//! plus the discovery `order`, which is non-decreasing in distance. Brandes'
//! backward phase replays that order in reverse.
//!
//! [`ShortestPaths`] doubles as a workspace: recomputing from a new source
//! resets only the entries the previous run touched and keeps every
//! allocation, so a worker can run thousands of sources with no per-source
//! allocation after warm-up.
//!
//! # Example
//!
//! ```
//! use socnet_centrality::{single_source_shortest_paths, CsrGraph, NodeId};
//!
//! // Diamond: 0 — 1 — 3, 0 — 2 — 3
//! let graph = CsrGraph::from_edge_list([(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! let paths = single_source_shortest_paths(&graph, NodeId(0)).unwrap();
//!
//! assert_eq!(paths.distance(NodeId(3)), Some(2));
//! assert_eq!(paths.sigma(NodeId(3)), 2.0);
//! assert_eq!(paths.predecessors(NodeId(3)), &[1, 2]);
//! ```

use crate::error::Result;
use crate::storage::{CsrGraph, NodeId, NodeLabel};
use std::collections::VecDeque;

/// Marker distance for nodes the BFS never reached
const UNREACHED: u32 = u32::MAX;

/// BFS result from one source: distances, path counts, predecessors, order
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    source: Option<NodeId>,
    dist: Vec<u32>,
    sigma: Vec<f64>,
    preds: Vec<Vec<u32>>,
    order: Vec<u32>,
    queue: VecDeque<u32>,
}

impl ShortestPaths {
    /// Empty workspace sized for graphs of `num_nodes` nodes
    #[must_use]
    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            source: None,
            dist: vec![UNREACHED; num_nodes],
            sigma: vec![0.0; num_nodes],
            preds: vec![Vec::new(); num_nodes],
            order: Vec::with_capacity(num_nodes),
            queue: VecDeque::with_capacity(num_nodes),
        }
    }

    /// Run BFS from `source`, recording distances, path counts and predecessors
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `source` is not in the graph
    pub fn compute<L: NodeLabel>(&mut self, graph: &CsrGraph<L>, source: NodeId) -> Result<()> {
        self.run(graph, source, true)
    }

    /// Run BFS from `source`, recording distances and order only
    ///
    /// Path counts stay zero and predecessor lists stay empty; closeness
    /// needs nothing more.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `source` is not in the graph
    pub fn compute_distances<L: NodeLabel>(
        &mut self,
        graph: &CsrGraph<L>,
        source: NodeId,
    ) -> Result<()> {
        self.run(graph, source, false)
    }

    fn run<L: NodeLabel>(
        &mut self,
        graph: &CsrGraph<L>,
        source: NodeId,
        count_paths: bool,
    ) -> Result<()> {
        // Validates the source before touching any state
        graph.neighbors(source)?;
        self.reset(graph.num_nodes());

        let s = source.index();
        self.source = Some(source);
        self.dist[s] = 0;
        self.sigma[s] = 1.0;
        self.queue.push_back(source.0);

        while let Some(v) = self.queue.pop_front() {
            self.order.push(v);
            let v_idx = v as usize;
            let next = self.dist[v_idx] + 1;

            for &w in graph.adjacency(v_idx) {
                let w_idx = w as usize;
                if self.dist[w_idx] == UNREACHED {
                    self.dist[w_idx] = next;
                    self.queue.push_back(w);
                }
                if count_paths && self.dist[w_idx] == next {
                    self.sigma[w_idx] += self.sigma[v_idx];
                    self.preds[w_idx].push(v);
                }
            }
        }

        Ok(())
    }

    /// Clear the previous run in O(reached) instead of O(n)
    fn reset(&mut self, num_nodes: usize) {
        if self.dist.len() == num_nodes {
            for &v in &self.order {
                let v = v as usize;
                self.dist[v] = UNREACHED;
                self.sigma[v] = 0.0;
                self.preds[v].clear();
            }
        } else {
            *self = Self::with_capacity(num_nodes);
        }
        self.order.clear();
        self.queue.clear();
        self.source = None;
    }

    /// Source of the last run
    #[must_use]
    pub const fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// Hop count from the source, `None` if unreachable
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<u32> {
        self.dist
            .get(node.index())
            .copied()
            .filter(|&d| d != UNREACHED)
    }

    /// Number of shortest paths from the source (0 if unreachable)
    #[must_use]
    pub fn sigma(&self, node: NodeId) -> f64 {
        self.sigma.get(node.index()).copied().unwrap_or(0.0)
    }

    /// Predecessors of `node` on shortest paths, in discovery order
    #[must_use]
    pub fn predecessors(&self, node: NodeId) -> &[u32] {
        self.preds.get(node.index()).map_or(&[][..], Vec::as_slice)
    }

    /// Nodes in BFS discovery order (non-decreasing distance)
    #[must_use]
    pub fn order(&self) -> &[u32] {
        &self.order
    }

    /// Number of nodes reached, including the source
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.order.len()
    }

    /// Sum of distances from the source to every reached node
    #[must_use]
    pub fn distance_sum(&self) -> u64 {
        self.order
            .iter()
            .map(|&v| u64::from(self.dist[v as usize]))
            .sum()
    }

    pub(crate) fn sigma_slice(&self) -> &[f64] {
        &self.sigma
    }

    pub(crate) fn preds_slice(&self) -> &[Vec<u32>] {
        &self.preds
    }
}

/// Compute BFS shortest-path data from a single source
///
/// # Errors
///
/// Returns `NodeNotFound` if `source` is not in the graph
///
/// # Complexity
///
/// O(V + E)
pub fn single_source_shortest_paths<L: NodeLabel>(
    graph: &CsrGraph<L>,
    source: NodeId,
) -> Result<ShortestPaths> {
    let mut paths = ShortestPaths::with_capacity(graph.num_nodes());
    paths.compute(graph, source)?;
    Ok(paths)
}
