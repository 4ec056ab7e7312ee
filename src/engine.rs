//! Iteration driver for the in-process engine.
//!
//! Workers are long-lived threads, one per vertex stripe. Each iteration the
//! coordinator publishes a snapshot of the distance vector to every worker
//! (fan-out), blocks until every worker has returned its candidate vector and
//! change flag (fan-in), then merges. The blocking receive is the collective
//! barrier: no worker can start sweep `k + 1` before the coordinator has
//! merged every result of sweep `k`, and no worker ever holds a writable
//! reference to the merged vector.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::graph::CsrGraph;
use crate::partition::owned_vertices;
use crate::reduce::{reduce_min, reduce_or};
use crate::relax::{initial_distances, relax_sweep};
use crate::{Error, Result};

/// Shortest-path distances from `source` to every vertex, computed by
/// `num_workers` relaxation workers (clamped to at least 1). Unreachable
/// vertices stay at [`crate::INF`].
///
/// Runs at most `vertex_count - 1` sweeps and stops early once a sweep
/// changes nothing. Negative-weight cycles are not detected: the result for
/// a graph containing one is whatever the bounded iteration produced.
pub fn shortest_paths(graph: &CsrGraph, source: usize, num_workers: usize) -> Result<Vec<i64>> {
    graph.validate()?;
    if source >= graph.vertex_count {
        return Err(Error::SourceOutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count,
        });
    }

    let num_workers = num_workers.max(1);
    let vertex_count = graph.vertex_count;
    let mut dist = initial_distances(vertex_count, source);

    thread::scope(|scope| {
        let (result_tx, result_rx) = mpsc::channel();
        let mut sweep_txs = Vec::with_capacity(num_workers);

        for worker in 0..num_workers {
            let (sweep_tx, sweep_rx) = mpsc::channel::<Arc<Vec<i64>>>();
            sweep_txs.push(sweep_tx);
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                // sleeps until the coordinator publishes the next snapshot;
                // a closed channel is the shutdown signal
                while let Ok(snapshot) = sweep_rx.recv() {
                    let mut dist_next = snapshot.as_ref().clone();
                    let changed = relax_sweep(
                        graph,
                        &snapshot,
                        owned_vertices(worker, num_workers, vertex_count),
                        &mut dist_next,
                    );
                    if result_tx.send((dist_next, changed)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        for iteration in 0..vertex_count.saturating_sub(1) {
            let snapshot = Arc::new(std::mem::take(&mut dist));
            for sweep_tx in &sweep_txs {
                sweep_tx
                    .send(snapshot.clone())
                    .expect("worker exited before shutdown");
            }

            let mut candidates = Vec::with_capacity(num_workers);
            let mut flags = Vec::with_capacity(num_workers);
            for _ in 0..num_workers {
                let (candidate, changed) =
                    result_rx.recv().expect("worker exited before shutdown");
                candidates.push(candidate);
                flags.push(changed);
            }

            dist = reduce_min(candidates).expect("at least one worker");
            let changed = reduce_or(flags);
            debug!(iteration, changed, "merged sweep");
            if !changed {
                break;
            }
        }

        // dropping the sweep channels shuts the workers down; the scope
        // joins them before returning
        drop(sweep_txs);
    });

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::INF;

    #[test]
    fn finds_shorter_paths_through_more_edges() {
        let graph = CsrGraph::from_edges(3, &[(0, 2, 10), (0, 1, 1), (1, 2, 1)]);
        let dist = shortest_paths(&graph, 0, 2).unwrap();
        assert_eq!(dist, vec![0, 1, 2]);
    }

    #[test]
    fn rejects_source_out_of_range() {
        let graph = CsrGraph::from_edges(2, &[(0, 1, 1)]);
        let err = shortest_paths(&graph, 2, 1).unwrap_err();
        assert_eq!(
            err,
            Error::SourceOutOfRange {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert_eq!(err.to_string(), "source vertex 2 outside 0..2");
    }

    #[test]
    fn rejects_invalid_graphs_before_running() {
        let mut graph = CsrGraph::from_edges(2, &[(0, 1, 1)]);
        graph.col_idx[0] = 7;
        assert_eq!(
            shortest_paths(&graph, 0, 2),
            Err(Error::ColIdxOutOfRange {
                edge: 0,
                vertex: 7,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn zero_workers_clamps_to_one() {
        let graph = CsrGraph::from_edges(2, &[(0, 1, 3)]);
        assert_eq!(shortest_paths(&graph, 0, 0).unwrap(), vec![0, 3]);
    }

    #[test]
    fn unreachable_vertices_keep_the_sentinel() {
        let graph = CsrGraph::from_edges(4, &[(0, 1, 2), (3, 0, 1)]);
        let dist = shortest_paths(&graph, 0, 3).unwrap();
        assert_eq!(dist, vec![0, 2, INF, INF]);
    }
}
