//! Error taxonomy for graph construction, centrality and statistics

use thiserror::Error;

/// Errors surfaced by the centrality core
///
/// Every variant is a deterministic precondition failure; none is transient,
/// so callers should report rather than retry.
#[derive(Debug, Error)]
pub enum CentralityError {
    /// An operation referenced a node that is not in the graph
    #[error("node {0} not found in graph")]
    NodeNotFound(String),

    /// The graph has no nodes, so it has no components
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Degree centrality needs at least two nodes
    #[error("graph has fewer than 2 nodes ({nodes})")]
    DegenerateGraph {
        /// Node count of the offending graph
        nodes: usize,
    },

    /// Statistics requested over an empty sequence
    #[error("cannot summarize an empty sequence")]
    EmptySequence,

    /// The graph has more nodes than a `u32` index can address
    #[error("graph has {nodes} nodes, more than the u32 index space")]
    CapacityExceeded {
        /// Distinct labels seen while building
        nodes: usize,
    },

    /// The adjacency has more entries than a `u32` row offset can address
    #[error("graph has {entries} adjacency entries, more than the u32 offset space")]
    AdjacencyExceeded {
        /// Directed adjacency entries (twice the undirected edge count)
        entries: usize,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The cancellation flag was raised between source iterations
    #[error("centrality computation cancelled")]
    Cancelled,

    /// The blocking task running the pipeline panicked or was aborted
    #[error("centrality task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl CentralityError {
    /// Build a `NodeNotFound` from any debug-printable label
    pub(crate) fn node_not_found(label: &impl std::fmt::Debug) -> Self {
        Self::NodeNotFound(format!("{label:?}"))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CentralityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_precondition() {
        let err = CentralityError::DegenerateGraph { nodes: 1 };
        assert_eq!(err.to_string(), "graph has fewer than 2 nodes (1)");

        let err = CentralityError::node_not_found(&"alice");
        assert_eq!(err.to_string(), "node \"alice\" not found in graph");
    }
}
