//! CSR (Compressed Sparse Row) storage for undirected simple graphs
//!
//! Every undirected edge `{u, v}` is stored twice (`u → v` and `v → u`) so a
//! node's neighborhood is one contiguous slice. Neighbor slices are sorted
//! and de-duplicated, making adjacency a set rather than a multiset.
//!
//! # CSR Format
//!
//! ```text
//! Graph: a — b, a — c
//!
//! labels:      [a, b, c]
//! row_offsets: [0, 2, 3, 4]   // a: [0..2), b: [2..3), c: [3..4)
//! col_indices: [1, 2, 0, 0]   // a → b, a → c, b → a, c → a
//! ```
//!
//! Labels are interned in ascending order, so `NodeId` order is label order.
//! Every traversal that walks nodes "in index order" is therefore
//! deterministic no matter how the input edges were ordered.

use crate::error::{CentralityError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Node identifier (dense, zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Position of this node in per-node vectors
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque node label supplied by the loader (integer, string, ...)
pub trait NodeLabel: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Debug + Send + Sync> NodeLabel for T {}

/// Immutable undirected graph in CSR form
///
/// Built once from an edge list and read-only afterwards, which is what lets
/// centrality workers share it by reference without locks.
///
/// # Example
///
/// ```
/// use socnet_centrality::{CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edge_list([("a", "b"), ("a", "c"), ("b", "a")]).unwrap();
///
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_edges(), 2); // b — a duplicates a — b
///
/// let a = graph.node_id(&"a").unwrap();
/// assert_eq!(graph.neighbors(a).unwrap(), &[1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CsrGraph<L> {
    /// node i's neighbors live at `col_indices[row_offsets[i]..row_offsets[i + 1]]`
    /// Length: `num_nodes` + 1
    row_offsets: Vec<u32>,

    /// Neighbor indices, both directions of every edge
    /// Length: 2 * `num_edges`
    col_indices: Vec<u32>,

    /// Sorted labels, indexed by `NodeId`
    labels: Vec<L>,

    /// Label → dense index
    index: HashMap<L, NodeId>,
}

impl<L: NodeLabel> CsrGraph<L> {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            row_offsets: vec![0],
            col_indices: Vec::new(),
            labels: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create graph from a sequence of undirected label pairs
    ///
    /// Pair orientation is irrelevant and duplicates are idempotent.
    /// Self-loops register their node but add no adjacency entry.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if there are more distinct labels than a
    /// `u32` index can address, or `AdjacencyExceeded` if twice the distinct
    /// edge count overflows a `u32` row offset.
    pub fn from_edge_list<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, L)>,
    {
        Self::with_nodes(std::iter::empty(), edges)
    }

    /// Create graph from explicit nodes plus edges
    ///
    /// Nodes listed in `nodes` that appear in no edge become isolated nodes.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the node count overflows `u32`, or
    /// `AdjacencyExceeded` if the adjacency entry count does.
    pub fn with_nodes<N, I>(nodes: N, edges: I) -> Result<Self>
    where
        N: IntoIterator<Item = L>,
        I: IntoIterator<Item = (L, L)>,
    {
        let edges: Vec<(L, L)> = edges.into_iter().collect();

        let mut labels: Vec<L> = nodes.into_iter().collect();
        labels.reserve(edges.len() * 2);
        for (a, b) in &edges {
            labels.push(a.clone());
            labels.push(b.clone());
        }
        labels.sort_unstable();
        labels.dedup();

        if u32::try_from(labels.len()).is_err() {
            return Err(CentralityError::CapacityExceeded {
                nodes: labels.len(),
            });
        }

        let index = build_index(&labels);

        // Temporary adjacency lists, both directions
        let mut adj_list: Vec<Vec<u32>> = vec![Vec::new(); labels.len()];
        for (a, b) in &edges {
            let (u, v) = (index[a], index[b]);
            if u == v {
                continue;
            }
            adj_list[u.index()].push(v.0);
            adj_list[v.index()].push(u.0);
        }

        Self::from_adjacency(labels, index, adj_list)
    }

    /// Pack sorted, de-duplicated adjacency lists into CSR
    fn from_adjacency(
        labels: Vec<L>,
        index: HashMap<L, NodeId>,
        adj_list: Vec<Vec<u32>>,
    ) -> Result<Self> {
        let mut row_offsets = Vec::with_capacity(labels.len() + 1);
        let mut col_indices = Vec::with_capacity(adj_list.iter().map(Vec::len).sum());

        row_offsets.push(0_u32);
        for mut neighbors in adj_list {
            neighbors.sort_unstable();
            neighbors.dedup();
            col_indices.extend_from_slice(&neighbors);
            row_offsets.push(row_offset(col_indices.len())?);
        }

        Ok(Self {
            row_offsets,
            col_indices,
            labels,
            index,
        })
    }

    /// Neighbors of a node, as dense indices in ascending order
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if node ID is out of bounds
    pub fn neighbors(&self, node: NodeId) -> Result<&[u32]> {
        self.check(node)?;
        Ok(self.adjacency(node.index()))
    }

    /// Degree of a node (distinct neighbors, self-loops excluded)
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if node ID is out of bounds
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.check(node)?;
        Ok(self.degree_of(node.index()))
    }

    /// Resolve a label to its dense index
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the label is not in the graph
    pub fn node_id(&self, label: &L) -> Result<NodeId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| CentralityError::node_not_found(label))
    }

    /// Label of a node
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if node ID is out of bounds
    pub fn label(&self, node: NodeId) -> Result<&L> {
        self.labels
            .get(node.index())
            .ok_or_else(|| CentralityError::node_not_found(&node))
    }

    /// All labels, indexed by `NodeId`
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Whether `node` addresses a node of this graph
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.labels.len()
    }

    /// Iterate over all node IDs in ascending (label) order
    #[allow(clippy::cast_possible_truncation)] // node count fits u32 by construction
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(|i| NodeId(i as u32))
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Get number of undirected edges
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.col_indices.len() / 2
    }

    /// Restrict the graph to `nodes`, keeping edges with both endpoints inside
    ///
    /// Labels and their relative order are preserved; duplicate IDs in
    /// `nodes` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if any ID is out of bounds
    ///
    /// # Example
    ///
    /// ```
    /// use socnet_centrality::{CsrGraph, NodeId};
    ///
    /// let graph = CsrGraph::from_edge_list([(1, 2), (2, 3), (3, 4)]).unwrap();
    /// let sub = graph.subgraph(&[NodeId(1), NodeId(2), NodeId(3)]).unwrap();
    ///
    /// assert_eq!(sub.labels(), &[2, 3, 4]);
    /// assert_eq!(sub.num_edges(), 2);
    /// ```
    #[allow(clippy::cast_possible_truncation)] // bounded by self.num_nodes()
    pub fn subgraph(&self, nodes: &[NodeId]) -> Result<Self> {
        let mut keep = vec![false; self.num_nodes()];
        for &node in nodes {
            self.check(node)?;
            keep[node.index()] = true;
        }

        // Old index → new index; monotone, so neighbor slices stay sorted
        let mut remap = vec![u32::MAX; self.num_nodes()];
        let mut labels = Vec::new();
        for (old, _) in keep.iter().enumerate().filter(|&(_, &k)| k) {
            remap[old] = labels.len() as u32;
            labels.push(self.labels[old].clone());
        }

        let adj_list: Vec<Vec<u32>> = keep
            .iter()
            .enumerate()
            .filter(|&(_, &k)| k)
            .map(|(old, _)| {
                self.adjacency(old)
                    .iter()
                    .filter(|&&n| keep[n as usize])
                    .map(|&n| remap[n as usize])
                    .collect()
            })
            .collect();

        let index = build_index(&labels);
        Self::from_adjacency(labels, index, adj_list)
    }

    /// Get CSR components (`row_offsets`, `col_indices`)
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32]) {
        (&self.row_offsets, &self.col_indices)
    }

    /// Neighbor slice without bounds validation, for inner loops
    pub(crate) fn adjacency(&self, idx: usize) -> &[u32] {
        let start = self.row_offsets[idx] as usize;
        let end = self.row_offsets[idx + 1] as usize;
        &self.col_indices[start..end]
    }

    pub(crate) fn degree_of(&self, idx: usize) -> usize {
        (self.row_offsets[idx + 1] - self.row_offsets[idx]) as usize
    }

    fn check(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(CentralityError::node_not_found(&node))
        }
    }
}

impl<L: NodeLabel> Default for CsrGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Row offset for `entries` adjacency entries
fn row_offset(entries: usize) -> Result<u32> {
    u32::try_from(entries).map_err(|_| CentralityError::AdjacencyExceeded { entries })
}

#[allow(clippy::cast_possible_truncation)] // callers guarantee labels.len() fits u32
fn build_index<L: NodeLabel>(labels: &[L]) -> HashMap<L, NodeId> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), NodeId(i as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offset_bounds() {
        assert_eq!(row_offset(0).unwrap(), 0);
        assert_eq!(row_offset(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_row_offset_overflow_is_an_error() {
        let entries = u32::MAX as usize + 1;
        assert!(matches!(
            row_offset(entries),
            Err(CentralityError::AdjacencyExceeded { entries: e }) if e == entries
        ));
    }

    #[test]
    fn test_empty_graph() {
        let graph: CsrGraph<u32> = CsrGraph::new();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.csr_components().0, &[0]);
    }

    #[test]
    fn test_from_edge_list_simple() {
        let graph = CsrGraph::from_edge_list([(0, 1), (0, 2), (1, 2)]).unwrap();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);

        // Check CSR structure: triangle, every node sees the other two
        let (row_offsets, col_indices) = graph.csr_components();
        assert_eq!(row_offsets, &[0, 2, 4, 6]);
        assert_eq!(col_indices, &[1, 2, 0, 2, 0, 1]);
    }

    #[test]
    fn test_duplicate_edges_are_idempotent() {
        let graph = CsrGraph::from_edge_list([(0, 1), (1, 0), (0, 1)]).unwrap();

        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.neighbors(NodeId(0)).unwrap(), &[1]);
        assert_eq!(graph.neighbors(NodeId(1)).unwrap(), &[0]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = CsrGraph::from_edge_list([(5, 9), (9, 7), (7, 5), (1, 9)]).unwrap();

        for u in graph.nodes() {
            for &v in graph.neighbors(u).unwrap() {
                assert!(graph.neighbors(NodeId(v)).unwrap().contains(&u.0));
            }
        }
    }

    #[test]
    fn test_labels_interned_in_sorted_order() {
        let graph = CsrGraph::from_edge_list([("zed", "amy"), ("bob", "amy")]).unwrap();

        assert_eq!(graph.labels(), &["amy", "bob", "zed"]);
        assert_eq!(graph.node_id(&"bob").unwrap(), NodeId(1));
        assert_eq!(graph.label(NodeId(2)).unwrap(), &"zed");
    }

    #[test]
    fn test_self_loop_registers_node_only() {
        let graph = CsrGraph::from_edge_list([(0, 0), (0, 1)]).unwrap();

        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.degree(NodeId(0)).unwrap(), 1);
    }

    #[test]
    fn test_with_nodes_keeps_isolated() {
        let graph = CsrGraph::with_nodes([3, 4], [(1, 2)]).unwrap();

        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.degree(graph.node_id(&4).unwrap()).unwrap(), 0);
    }

    #[test]
    fn test_missing_node_errors() {
        let graph = CsrGraph::from_edge_list([(0, 1)]).unwrap();

        assert!(matches!(
            graph.neighbors(NodeId(7)),
            Err(CentralityError::NodeNotFound(_))
        ));
        assert!(matches!(
            graph.node_id(&42),
            Err(CentralityError::NodeNotFound(_))
        ));
        assert!(graph.subgraph(&[NodeId(0), NodeId(9)]).is_err());
    }

    #[test]
    fn test_subgraph_drops_outside_edges() {
        // Square 0-1-2-3-0 plus pendant 3-4
        let graph =
            CsrGraph::from_edge_list([(0, 1), (1, 2), (2, 3), (3, 0), (3, 4)]).unwrap();

        let sub = graph.subgraph(&[NodeId(3), NodeId(0), NodeId(4), NodeId(0)]).unwrap();

        assert_eq!(sub.labels(), &[0, 3, 4]);
        assert_eq!(sub.num_edges(), 2);
        assert_eq!(sub.neighbors(NodeId(1)).unwrap(), &[0, 2]);
    }
}
