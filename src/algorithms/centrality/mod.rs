//! Centrality measures: degree, closeness, betweenness
//!
//! All three return [`CentralityScores`], one `f64` per `NodeId` of the graph
//! they were computed on. Closeness and betweenness fan their per-source BFS
//! runs out over rayon in fixed, contiguous source partitions; each
//! partition owns its workspace and accumulator, and partials are merged in
//! partition order, so parallel and sequential runs agree bit for bit.

pub mod betweenness;
pub mod closeness;
pub mod degree;

pub use betweenness::{betweenness_centrality, betweenness_of, betweenness_of_many};
pub use closeness::{closeness_centrality, closeness_of};
pub use degree::degree_centrality;

use crate::config::CentralityConfig;
use crate::error::Result;
use crate::storage::{CsrGraph, NodeId, NodeLabel};
use rayon::prelude::*;
use std::ops::Range;

/// Per-node centrality values, indexed by `NodeId`
#[derive(Debug, Clone, PartialEq)]
pub struct CentralityScores {
    values: Vec<f64>,
}

impl CentralityScores {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Score of `node`, `None` if out of bounds
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<f64> {
        self.values.get(node.index()).copied()
    }

    /// All scores, indexed by `NodeId`
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of scored nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no node was scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (`NodeId`, score) pairs in node order
    #[allow(clippy::cast_possible_truncation)] // scores come from a u32-indexed graph
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &score)| (NodeId(i as u32), score))
    }

    /// Pair every score with its label from the graph it was computed on
    pub fn labelled<'a, L: NodeLabel>(
        &'a self,
        graph: &'a CsrGraph<L>,
    ) -> impl Iterator<Item = (&'a L, f64)> + 'a {
        graph.labels().iter().zip(self.values.iter().copied())
    }

    /// Consume into the raw vector
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

/// Split `0..n` into at most `partitions` contiguous, equally sized ranges
pub(crate) fn partition_ranges(n: usize, partitions: usize) -> Vec<Range<usize>> {
    if n == 0 {
        return Vec::new();
    }
    let chunk = n.div_ceil(partitions.max(1));
    (0..n)
        .step_by(chunk)
        .map(|start| start..(start + chunk).min(n))
        .collect()
}

/// Run `work` over every source partition and return the partials in order
///
/// The partition layout depends only on `n` and `config.partitions`, never
/// on the rayon pool size.
pub(crate) fn fan_out<T, F>(n: usize, config: &CentralityConfig, work: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(Range<usize>) -> Result<T> + Sync,
{
    config.validate_schedule()?;
    let ranges = partition_ranges(n, config.partitions);
    if config.parallel {
        ranges.into_par_iter().map(&work).collect()
    } else {
        ranges.into_iter().map(work).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_ranges_cover_everything() {
        let ranges = partition_ranges(10, 4);
        assert_eq!(ranges, vec![0..3, 3..6, 6..9, 9..10]);

        let ranges = partition_ranges(3, 64);
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);

        assert!(partition_ranges(0, 8).is_empty());
    }

    #[test]
    fn test_fan_out_preserves_partition_order() {
        let config = CentralityConfig::default().with_partitions(5);
        let starts = fan_out(23, &config, |range| Ok(range.start)).unwrap();
        assert_eq!(starts, vec![0, 5, 10, 15, 20]);
    }

    #[test]
    fn test_labelled_scores() {
        let graph = CsrGraph::from_edge_list([("b", "a")]).unwrap();
        let scores = CentralityScores::new(vec![0.25, 0.75]);

        let pairs: Vec<(&&str, f64)> = scores.labelled(&graph).collect();
        assert_eq!(pairs, vec![(&"a", 0.25), (&"b", 0.75)]);
        assert_eq!(scores.get(NodeId(1)), Some(0.75));
        assert_eq!(scores.get(NodeId(2)), None);
    }
}
