//! Connected components and largest-component extraction
//!
//! Provides structural analysis for undirected graphs:
//! - `connected_components`: Partition nodes into components
//! - `largest`: Pick the component with the most nodes
//! - `largest_component`: Materialize the largest component as a subgraph
//!
//! # Example
//!
//! ```
//! use socnet_centrality::{connected_components, largest, CsrGraph};
//!
//! // Two components: a triangle and a single edge
//! let graph = CsrGraph::from_edge_list([(0, 1), (1, 2), (2, 0), (7, 8)]).unwrap();
//!
//! let components = connected_components(&graph);
//! assert_eq!(components.len(), 2);
//! assert_eq!(largest(&components).unwrap().len(), 3);
//! ```

use crate::error::{CentralityError, Result};
use crate::storage::{CsrGraph, NodeId, NodeLabel};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// A maximal set of mutually reachable nodes, in ascending `NodeId` order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    nodes: Vec<NodeId>,
}

impl Component {
    /// Member nodes, ascending
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of member nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the component has no nodes (never true for discovered components)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` belongs to this component
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }
}

/// Partition all nodes into connected components
///
/// Runs a BFS from the lowest unvisited node until every node is visited;
/// each run discovers exactly one component. Components are returned in
/// discovery order, so the first one holds the smallest label.
///
/// # Complexity
///
/// O(V + E)
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn connected_components<L: NodeLabel>(graph: &CsrGraph<L>) -> Vec<Component> {
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    let mut components = Vec::new();

    for start in graph.nodes() {
        if visited[start.index()] {
            continue;
        }

        visited[start.index()] = true;
        queue.push_back(start.0);
        let mut members = Vec::new();

        while let Some(current) = queue.pop_front() {
            members.push(NodeId(current));
            for &neighbor in graph.adjacency(current as usize) {
                if !visited[neighbor as usize] {
                    visited[neighbor as usize] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        members.sort_unstable();
        components.push(Component { nodes: members });
    }

    debug!(count = components.len(), "found connected components");
    components
}

/// Select the component with the greatest node count
///
/// Ties go to the first component in the slice, which for the output of
/// [`connected_components`] is the one containing the smallest label.
///
/// # Errors
///
/// Returns `EmptyGraph` if `components` is empty (the graph had no nodes)
pub fn largest(components: &[Component]) -> Result<&Component> {
    components
        .iter()
        .reduce(|best, candidate| {
            if candidate.len() > best.len() {
                candidate
            } else {
                best
            }
        })
        .ok_or(CentralityError::EmptyGraph)
}

/// Extract the largest connected component as its own graph
///
/// # Errors
///
/// Returns `EmptyGraph` if the graph has no nodes
///
/// # Example
///
/// ```
/// use socnet_centrality::{largest_component, CsrGraph};
///
/// let graph = CsrGraph::from_edge_list([("a", "b"), ("b", "c"), ("x", "y")]).unwrap();
/// let lcc = largest_component(&graph).unwrap();
///
/// assert_eq!(lcc.labels(), &["a", "b", "c"]);
/// ```
pub fn largest_component<L: NodeLabel>(graph: &CsrGraph<L>) -> Result<CsrGraph<L>> {
    let components = connected_components(graph);
    let component = largest(&components)?;
    graph.subgraph(component.nodes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph: CsrGraph<u32> = CsrGraph::new();
        let components = connected_components(&graph);
        assert!(components.is_empty());
        assert!(matches!(
            largest(&components),
            Err(CentralityError::EmptyGraph)
        ));
        assert!(largest_component(&graph).is_err());
    }

    #[test]
    fn test_single_component() {
        let graph = CsrGraph::from_edge_list([(0, 1), (1, 2), (2, 3)]).unwrap();
        let components = connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 4);
    }

    #[test]
    fn test_isolated_nodes_are_components() {
        let graph = CsrGraph::with_nodes([10, 11], [(0, 1)]).unwrap();
        let components = connected_components(&graph);

        assert_eq!(components.len(), 3);
        assert_eq!(components[0].nodes(), &[NodeId(0), NodeId(1)]);
        assert_eq!(components[1].nodes(), &[NodeId(2)]);
    }

    #[test]
    fn test_components_partition_nodes() {
        let graph =
            CsrGraph::from_edge_list([(0, 1), (2, 3), (3, 4), (5, 6), (6, 7), (7, 5)]).unwrap();
        let components = connected_components(&graph);

        let mut seen: Vec<NodeId> = components
            .iter()
            .flat_map(|c| c.nodes().iter().copied())
            .collect();
        seen.sort_unstable();
        let all: Vec<NodeId> = graph.nodes().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_largest_prefers_bigger() {
        let graph = CsrGraph::from_edge_list([(0, 1), (5, 6), (6, 7), (7, 8)]).unwrap();
        let components = connected_components(&graph);
        let big = largest(&components).unwrap();
        assert_eq!(big.len(), 4);
        assert!(big.contains(NodeId(2)));
        assert!(!big.contains(NodeId(0)));
    }

    #[test]
    fn test_largest_tie_is_first_encountered() {
        // Two disjoint triangles; the one with label 0 is found first
        let graph =
            CsrGraph::from_edge_list([(10, 11), (11, 12), (12, 10), (0, 1), (1, 2), (2, 0)])
                .unwrap();

        for _ in 0..5 {
            let lcc = largest_component(&graph).unwrap();
            assert_eq!(lcc.labels(), &[0, 1, 2]);
            assert_eq!(lcc.num_edges(), 3);
        }
    }
}
