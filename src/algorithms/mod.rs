//! Graph algorithms (components, shortest paths, centrality)
//!
//! Every algorithm borrows an immutable [`CsrGraph`](crate::CsrGraph); none
//! mutates it, so all of them can share one graph across threads.

pub mod centrality;
pub mod components;
pub mod shortest_path;

pub use centrality::{
    betweenness_centrality, betweenness_of, betweenness_of_many, closeness_centrality,
    closeness_of, degree_centrality, CentralityScores,
};
pub use components::{connected_components, largest, largest_component, Component};
pub use shortest_path::{single_source_shortest_paths, ShortestPaths};
