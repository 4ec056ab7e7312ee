//! Static vertex ownership.
//!
//! Ownership is a pure function of the vertex index and the worker count, so
//! every worker reproduces the full assignment without communication. The
//! scheme is round-robin striping: it spreads hot regions of the graph
//! across workers instead of handing a contiguous block to one of them.

/// The worker that owns `vertex`. `num_workers` must be at least 1.
pub fn owner(vertex: usize, num_workers: usize) -> usize {
    vertex % num_workers
}

/// The stripe of vertices owned by `worker`. Workers with an id at or above
/// `vertex_count` own the empty stripe.
pub fn owned_vertices(
    worker: usize,
    num_workers: usize,
    vertex_count: usize,
) -> impl Iterator<Item = usize> {
    (worker..vertex_count).step_by(num_workers.max(1))
}
