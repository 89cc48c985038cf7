//! Graph storage layer
//!
//! Provides the immutable CSR representation of undirected graphs.

pub mod csr;

pub use csr::{CsrGraph, NodeId, NodeLabel};
