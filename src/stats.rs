//! Reductions over centrality scores: top-N selection, summaries, histograms
//!
//! Everything here returns plain data for a presentation layer to print or
//! plot; nothing renders.

use crate::algorithms::centrality::CentralityScores;
use crate::error::{CentralityError, Result};
use crate::storage::NodeId;

/// Mean, median and population standard deviation of a sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Arithmetic mean
    pub mean: f64,
    /// Middle of the sorted values (mean of the two middles for even counts)
    pub median: f64,
    /// Population standard deviation (divides by `count`, not `count - 1`)
    pub stddev: f64,
}

/// Nodes with the highest scores, best first
///
/// Ties are broken by ascending `NodeId`, which is ascending label order.
/// Asking for more nodes than exist returns all of them.
///
/// # Example
///
/// ```
/// use socnet_centrality::{degree_centrality, top_n, CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edge_list([(0, 1), (0, 2), (2, 3)]).unwrap();
/// let scores = degree_centrality(&graph).unwrap();
///
/// assert_eq!(top_n(&scores, 2), vec![NodeId(0), NodeId(2)]);
/// assert_eq!(top_n(&scores, 10).len(), 4);
/// ```
#[must_use]
pub fn top_n(scores: &CentralityScores, n: usize) -> Vec<NodeId> {
    let mut ranked: Vec<(NodeId, f64)> = scores.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(n).map(|(node, _)| node).collect()
}

/// Mean, median and population standard deviation
///
/// # Errors
///
/// Returns `EmptySequence` if `values` is empty
///
/// # Example
///
/// ```
/// use socnet_centrality::summary_stats;
///
/// let summary = summary_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(summary.mean, 5.0);
/// assert_eq!(summary.median, 4.5);
/// assert_eq!(summary.stddev, 2.0);
/// ```
#[allow(clippy::cast_precision_loss)] // sequence lengths far below 2^52
pub fn summary_stats(values: &[f64]) -> Result<Summary> {
    if values.is_empty() {
        return Err(CentralityError::EmptySequence);
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Ok(Summary {
        mean,
        median,
        stddev: variance.sqrt(),
    })
}

/// Equal-width bin counts over a value range
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin boundaries
    pub edges: Vec<f64>,
    /// Values per bin; every bin is half-open except the last, which is closed
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Total number of binned values
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin `values` into `bins` equal-width bins spanning `[min, max]`
///
/// A constant sequence is binned over `[v - 0.5, v + 0.5]` so the range is
/// never empty.
///
/// # Errors
///
/// Returns `EmptySequence` for no values and `InvalidConfig` for zero bins
///
/// # Example
///
/// ```
/// use socnet_centrality::histogram;
///
/// let hist = histogram(&[0.0, 0.1, 0.5, 1.0], 2).unwrap();
/// assert_eq!(hist.edges, vec![0.0, 0.5, 1.0]);
/// assert_eq!(hist.counts, vec![2, 2]);
/// ```
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(CentralityError::InvalidConfig(
            "histogram needs at least one bin".to_string(),
        ));
    }

    let (min, max) = values
        .iter()
        .fold(None, |range: Option<(f64, f64)>, &v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or(CentralityError::EmptySequence)?;

    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };

    let width = (hi - lo) / bins as f64;
    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0_usize; bins];
    for &v in values {
        let bin = (((v - lo) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Ok(Histogram { edges, counts })
}
