//! End-to-end analysis: edges → largest component → centralities → summaries
//!
//! The pipeline returns a [`CentralityReport`] of pure data. Printing,
//! plotting and file formats stay with the caller.
//!
//! # Example
//!
//! ```
//! use socnet_centrality::{analyze, CentralityConfig};
//!
//! // Triangle with a tail, plus a detached edge that is dropped
//! let edges = vec![(1, 2), (2, 3), (3, 1), (3, 4), (8, 9)];
//! let report = analyze(edges, &CentralityConfig::default().with_top_n(2)).unwrap();
//!
//! assert_eq!(report.graph.num_nodes(), 4);
//! assert_eq!(report.graph.label(report.top_nodes[0]).unwrap(), &3);
//! ```

use crate::algorithms::centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, CentralityScores,
};
use crate::algorithms::components::largest_component;
use crate::config::CentralityConfig;
use crate::error::Result;
use crate::stats::{histogram, summary_stats, top_n, Histogram, Summary};
use crate::storage::{CsrGraph, NodeId, NodeLabel};
use tracing::{info, instrument};

/// Which centrality measure to read from a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Degree centrality
    Degree,
    /// Closeness centrality
    Closeness,
    /// Betweenness centrality
    Betweenness,
}

impl Metric {
    /// All metrics, in presentation order
    pub const ALL: [Self; 3] = [Self::Degree, Self::Closeness, Self::Betweenness];

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Degree => "Degree Centrality",
            Self::Closeness => "Closeness Centrality",
            Self::Betweenness => "Betweenness Centrality",
        }
    }
}

/// Everything the analysis produces for a presentation layer
#[derive(Debug, Clone)]
pub struct CentralityReport<L> {
    /// Nodes in the input graph
    pub input_nodes: usize,
    /// Undirected edges in the input graph
    pub input_edges: usize,
    /// Largest connected component; every score is indexed by its `NodeId`s
    pub graph: CsrGraph<L>,
    /// Degree centrality over the component
    pub degree: CentralityScores,
    /// Closeness centrality over the component
    pub closeness: CentralityScores,
    /// Betweenness centrality over the component
    pub betweenness: CentralityScores,
    /// Highest-degree nodes, best first
    pub top_nodes: Vec<NodeId>,
    /// Closeness summary over `top_nodes`
    pub top_closeness: Summary,
    /// Betweenness summary over `top_nodes`
    pub top_betweenness: Summary,
    /// Bins per histogram, from `CentralityConfig::histogram_bins`
    pub histogram_bins: usize,
}

impl<L: NodeLabel> CentralityReport<L> {
    /// Scores of one metric
    #[must_use]
    pub const fn scores(&self, metric: Metric) -> &CentralityScores {
        match metric {
            Metric::Degree => &self.degree,
            Metric::Closeness => &self.closeness,
            Metric::Betweenness => &self.betweenness,
        }
    }

    /// Bin one metric's scores for plotting into `histogram_bins` bins
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `histogram_bins` was zeroed after analysis
    pub fn histogram(&self, metric: Metric) -> Result<Histogram> {
        histogram(self.scores(metric).values(), self.histogram_bins)
    }

    /// Top nodes with their labels and all three scores
    pub fn top_rows(&self) -> impl Iterator<Item = (&L, f64, f64, f64)> + '_ {
        self.top_nodes.iter().filter_map(move |&node| {
            Some((
                self.graph.label(node).ok()?,
                self.degree.get(node)?,
                self.closeness.get(node)?,
                self.betweenness.get(node)?,
            ))
        })
    }
}

/// Build the graph from `edges`, then run [`analyze_graph`]
///
/// # Errors
///
/// Returns `EmptyGraph` for no edges, `DegenerateGraph` if the largest
/// component has a single node, or `Cancelled`.
pub fn analyze<L, I>(edges: I, config: &CentralityConfig) -> Result<CentralityReport<L>>
where
    L: NodeLabel,
    I: IntoIterator<Item = (L, L)>,
{
    let graph = CsrGraph::from_edge_list(edges)?;
    analyze_graph(&graph, config)
}

/// Analyze an already built graph
///
/// Steps: largest component, degree/closeness/betweenness over it, the
/// `config.top_n` highest-degree nodes, and closeness/betweenness summaries
/// of those nodes. The whole-component scores are authoritative; the top-N
/// summaries read from them rather than recomputing.
///
/// # Errors
///
/// Same as [`analyze`].
#[instrument(skip(graph, config), fields(nodes = graph.num_nodes(), edges = graph.num_edges()))]
pub fn analyze_graph<L: NodeLabel>(
    graph: &CsrGraph<L>,
    config: &CentralityConfig,
) -> Result<CentralityReport<L>> {
    config.validate()?;

    let component = largest_component(graph)?;
    info!(
        nodes = component.num_nodes(),
        edges = component.num_edges(),
        "extracted largest connected component"
    );

    let degree = degree_centrality(&component)?;
    let closeness = closeness_centrality(&component, config)?;
    info!("closeness centrality complete");
    let betweenness = betweenness_centrality(&component, config)?;
    info!("betweenness centrality complete");

    let top_nodes = top_n(&degree, config.top_n);
    let pick = |scores: &CentralityScores| -> Vec<f64> {
        top_nodes.iter().filter_map(|&v| scores.get(v)).collect()
    };
    let top_closeness = summary_stats(&pick(&closeness))?;
    let top_betweenness = summary_stats(&pick(&betweenness))?;

    Ok(CentralityReport {
        input_nodes: graph.num_nodes(),
        input_edges: graph.num_edges(),
        graph: component,
        degree,
        closeness,
        betweenness,
        top_nodes,
        top_closeness,
        top_betweenness,
        histogram_bins: config.histogram_bins,
    })
}

/// Run [`analyze`] on tokio's blocking pool
///
/// The batch is CPU-bound for minutes on large graphs; this keeps an async
/// caller's reactor free. Cancel through `config.cancel`.
///
/// # Errors
///
/// Same as [`analyze`], plus `TaskFailed` if the blocking task panics.
pub async fn analyze_async<L>(
    edges: Vec<(L, L)>,
    config: CentralityConfig,
) -> Result<CentralityReport<L>>
where
    L: NodeLabel + 'static,
{
    tokio::task::spawn_blocking(move || analyze(edges, &config)).await?
}
