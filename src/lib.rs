//! socnet-centrality: exact centrality for large undirected social graphs
//!
//! # Overview
//!
//! Given an undirected edge list, socnet-centrality extracts the largest
//! connected component and computes exact degree, closeness and betweenness
//! centrality for every node in it, then reduces the scores to top-N lists,
//! summary statistics and histogram data.
//!
//! # Quick Start
//!
//! ```
//! use socnet_centrality::{
//!     betweenness_centrality, largest_component, CentralityConfig, CsrGraph,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Build graph from edge list (orientation and duplicates don't matter)
//! let graph = CsrGraph::from_edge_list([("ann", "bob"), ("bob", "cat"), ("cat", "bob")])?;
//!
//! // Restrict to the largest connected component
//! let component = largest_component(&graph)?;
//!
//! // Brandes betweenness, parallel over sources
//! let scores = betweenness_centrality(&component, &CentralityConfig::default())?;
//! let bob = component.node_id(&"bob")?;
//! assert_eq!(scores.get(bob), Some(1.0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Storage**: immutable CSR adjacency with a sorted label ↔ index map
//! - **Components**: BFS partitioning, deterministic largest-component choice
//! - **Shortest paths**: BFS distances, path counts and predecessors
//! - **Centrality**: degree, closeness, Brandes betweenness; rayon fan-out
//!   over fixed source partitions, merged in order for reproducible sums
//! - **Stats**: top-N, mean/median/population stddev, histograms
//! - **Pipeline**: the whole flow as one call, sync or on tokio's blocking pool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod stats;
pub mod storage;

// Re-export core types
pub use algorithms::{
    betweenness_centrality, betweenness_of, betweenness_of_many, closeness_centrality,
    closeness_of, connected_components, degree_centrality, largest, largest_component,
    single_source_shortest_paths, CentralityScores, Component, ShortestPaths,
};
pub use config::{CancellationFlag, CentralityConfig};
pub use error::{CentralityError, Result};
pub use pipeline::{analyze, analyze_async, analyze_graph, CentralityReport, Metric};
pub use stats::{histogram, summary_stats, top_n, Histogram, Summary};
pub use storage::{CsrGraph, NodeId, NodeLabel};
