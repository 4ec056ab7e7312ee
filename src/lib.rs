//! Bellman-Ford single-source shortest paths over a statically partitioned
//! CSR graph.
//!
//! Each worker owns a stripe of vertices and relaxes their out-edges against
//! a read-only snapshot of the distance vector. A coordinator merges the
//! workers' candidate vectors by element-wise minimum and their change flags
//! by logical OR after every sweep, so all workers enter the next sweep with
//! the same view. Iteration stops after `vertex_count - 1` sweeps or as soon
//! as a sweep changes nothing.
//!
//! Two drivers share the kernel: [`engine::shortest_paths`] runs the workers
//! as threads synchronized over channels, and the `sssp_lamellar` binary runs
//! one worker per PE with the merge carried by active messages.

pub mod engine;
pub mod graph;
pub mod options;
pub mod partition;
pub mod printer;
pub mod reduce;
pub mod relax;
pub mod serial;

pub use engine::shortest_paths;
pub use graph::{CsrGraph, INF};
pub use serial::shortest_paths_serial;

/// Input validation failures. All of these are surfaced before any
/// partitioning or relaxation runs; the iterate-and-merge phase itself does
/// not fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("row_ptr has length {found}, expected vertex_count + 1 = {expected}")]
    RowPtrLength { found: usize, expected: usize },

    #[error("row_ptr must begin at 0")]
    RowPtrStart,

    #[error("row_ptr decreases at vertex {0}")]
    RowPtrOrder(usize),

    #[error("row_ptr ends at {found}, but the graph stores {expected} edges")]
    EdgeCountMismatch { found: usize, expected: usize },

    #[error("col_idx holds {col_idx} entries, weights holds {weights}")]
    ParallelLengths { col_idx: usize, weights: usize },

    #[error("edge {edge} targets vertex {vertex}, outside 0..{vertex_count}")]
    ColIdxOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },

    // the field is deliberately not named `source`, which thiserror would
    // treat as the causing error
    #[error("source vertex {vertex} outside 0..{vertex_count}")]
    SourceOutOfRange { vertex: usize, vertex_count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
