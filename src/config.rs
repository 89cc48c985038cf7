//! Centrality run configuration and cooperative cancellation

use crate::error::{CentralityError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Number of top nodes (by degree) re-examined by the pipeline
pub const DEFAULT_TOP_N: usize = 200;

/// Histogram bin count used for presentation data
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Source partitions for the betweenness fan-out
///
/// Fixed independently of the thread count so the merge order, and therefore
/// every floating-point sum, is the same on every machine.
pub const DEFAULT_PARTITIONS: usize = 64;

/// Shared early-exit signal, checked between source-node iterations
///
/// # Example
///
/// ```
/// use socnet_centrality::CancellationFlag;
///
/// let flag = CancellationFlag::new();
/// let worker_view = flag.clone();
/// flag.cancel();
/// assert!(worker_view.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Create a flag that is not raised
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag; running computations stop at the next source
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether the flag has been raised
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Return `Err(Cancelled)` if the flag is raised
    pub(crate) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(CentralityError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Options for closeness, betweenness and the analysis pipeline
///
/// Defaults reproduce unnormalized scores, parallel execution and the
/// top-200 / 20-bin presentation data.
#[derive(Debug, Clone)]
pub struct CentralityConfig {
    /// Scale betweenness into [0, 1] by `2 / ((n-1)(n-2))`
    pub normalized: bool,
    /// Wasserman-Faust scaling of closeness for disconnected graphs
    pub wf_improved: bool,
    /// Fan source nodes out over the rayon pool
    pub parallel: bool,
    /// Contiguous source partitions, each with a private accumulator
    pub partitions: usize,
    /// Nodes kept by the pipeline's top-N selection
    pub top_n: usize,
    /// Bins per histogram
    pub histogram_bins: usize,
    /// Early-exit signal
    pub cancel: CancellationFlag,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            normalized: false,
            wf_improved: false,
            parallel: true,
            partitions: DEFAULT_PARTITIONS,
            top_n: DEFAULT_TOP_N,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            cancel: CancellationFlag::new(),
        }
    }
}

impl CentralityConfig {
    /// Toggle betweenness normalization
    #[must_use]
    pub const fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Toggle Wasserman-Faust closeness scaling
    #[must_use]
    pub const fn with_wf_improved(mut self, wf_improved: bool) -> Self {
        self.wf_improved = wf_improved;
        self
    }

    /// Toggle parallel execution
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the number of source partitions
    #[must_use]
    pub const fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    /// Set the pipeline's top-N size
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the histogram bin count
    #[must_use]
    pub const fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Attach a cancellation flag shared with the caller
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Reject values the analysis pipeline cannot run with
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for zero partitions, a zero `top_n` or zero
    /// histogram bins.
    pub fn validate(&self) -> Result<()> {
        self.validate_schedule()?;
        if self.top_n == 0 {
            return Err(CentralityError::InvalidConfig(
                "top_n must be at least 1".to_string(),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(CentralityError::InvalidConfig(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Reject a source schedule closeness and betweenness cannot run with
    ///
    /// Only `partitions` is checked; the presentation fields are left to
    /// [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for zero partitions.
    pub fn validate_schedule(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(CentralityError::InvalidConfig(
                "partitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
