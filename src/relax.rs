//! Edge relaxation over one worker's stripe.

use crate::graph::{CsrGraph, INF};

/// Distance vector at the start of a run: every vertex unreachable except
/// the source.
pub fn initial_distances(vertex_count: usize, source: usize) -> Vec<i64> {
    let mut dist = vec![INF; vertex_count];
    dist[source] = 0;
    dist
}

/// One relaxation sweep over the `owned` vertices against the read-only
/// snapshot `dist`. `dist_next` must be seeded from the snapshot; improved
/// candidates land there so positions this worker never touches keep the
/// global value and drop out of the later minimum merge.
///
/// Vertices still at or above `INF / 2` are skipped: they are unreachable so
/// far, and adding a weight to the sentinel must not be allowed to overflow.
///
/// Returns whether any candidate improved on the snapshot.
pub fn relax_sweep(
    graph: &CsrGraph,
    dist: &[i64],
    owned: impl Iterator<Item = usize>,
    dist_next: &mut [i64],
) -> bool {
    let mut changed = false;
    for vertex in owned {
        let du = dist[vertex];
        if du >= INF / 2 {
            continue;
        }
        let (targets, weights) = graph.edges(vertex);
        for (&to, &weight) in targets.iter().zip(weights) {
            let candidate = du + weight;
            if candidate < dist_next[to] {
                dist_next[to] = candidate;
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_relaxes_only_out_edges_of_owned_vertices() {
        let graph = CsrGraph::from_edges(3, &[(0, 1, 5), (1, 2, 1)]);
        let dist = initial_distances(3, 0);

        let mut dist_next = dist.clone();
        let changed = relax_sweep(&graph, &dist, [0].into_iter(), &mut dist_next);
        assert!(changed);
        assert_eq!(dist_next, vec![0, 5, INF]);

        // vertex 1 is still at INF in the snapshot, so owning it does nothing
        let mut dist_next = dist.clone();
        let changed = relax_sweep(&graph, &dist, [1].into_iter(), &mut dist_next);
        assert!(!changed);
        assert_eq!(dist_next, dist);
    }

    #[test]
    fn sweep_keeps_the_best_candidate_per_target() {
        let graph = CsrGraph::from_edges(3, &[(0, 2, 9), (1, 2, 1)]);
        let mut dist = initial_distances(3, 0);
        dist[1] = 4;

        let mut dist_next = dist.clone();
        let changed = relax_sweep(&graph, &dist, 0..2, &mut dist_next);
        assert!(changed);
        assert_eq!(dist_next[2], 5);
    }

    #[test]
    fn converged_sweep_reports_no_change() {
        let graph = CsrGraph::from_edges(2, &[(0, 1, 5)]);
        let dist = vec![0, 5];
        let mut dist_next = dist.clone();
        assert!(!relax_sweep(&graph, &dist, 0..2, &mut dist_next));
        assert_eq!(dist_next, dist);
    }

    #[test]
    fn unreachable_vertices_never_spread_the_sentinel() {
        // isolated source; the other component's edges must not push INF + w
        let graph = CsrGraph::from_edges(3, &[(1, 2, 3)]);
        let dist = initial_distances(3, 0);
        let mut dist_next = dist.clone();
        assert!(!relax_sweep(&graph, &dist, 0..3, &mut dist_next));
        assert_eq!(dist_next, vec![0, INF, INF]);
    }
}
