//! SCC DAGSP - strongly connected components and DAG path analysis
//!
//! The crate analyzes a directed weighted graph in three stages:
//!
//! 1. Tarjan's algorithm splits the graph into strongly connected components
//!    and collapses them into a condensation DAG.
//! 2. Kahn's algorithm orders the condensation topologically.
//! 3. A single relaxation pass in topological order yields shortest and
//!    longest distances from a source, and one optimal path.
//!
//! Dataset loading, generation and textual reporting live in [`data`],
//! [`analysis`] and [`report`].

pub mod algorithm;
pub mod analysis;
pub mod data;
pub mod graph;
pub mod metrics;
pub mod report;

pub use algorithm::{
    dag_paths::{DagPathSolver, Distances},
    scc::{SccResult, TarjanScc},
    topo::{TopoSorter, TopologicalOrder},
};
pub use analysis::{analyze, AnalysisConfig, AnalysisReport};
pub use data::{Dataset, DatasetGenerator};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use metrics::Metrics;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Negative edge weight on edge from {0} to {1}")]
    NegativeWeight(usize, usize),

    #[error("Distance overflow while relaxing edge from {0} to {1}")]
    DistanceOverflow(usize, usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
