//! Single-threaded reference solver. Used by the drivers and the tests to
//! cross-check the partitioned engines.

use tracing::debug;

use crate::graph::{CsrGraph, INF};
use crate::relax::initial_distances;
use crate::{Error, Result};

/// In-place Bellman-Ford. Unlike the partitioned engine this relaxes against
/// distances updated earlier in the same sweep, so it may converge in fewer
/// iterations; the fixed point is identical. Negative-weight cycles are not
/// detected, matching [`crate::shortest_paths`].
pub fn shortest_paths_serial(graph: &CsrGraph, source: usize) -> Result<Vec<i64>> {
    graph.validate()?;
    if source >= graph.vertex_count {
        return Err(Error::SourceOutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count,
        });
    }

    let mut dist = initial_distances(graph.vertex_count, source);

    for iteration in 0..graph.vertex_count.saturating_sub(1) {
        let mut changed = false;
        for vertex in 0..graph.vertex_count {
            let du = dist[vertex];
            if du >= INF / 2 {
                continue;
            }
            let (targets, weights) = graph.edges(vertex);
            for (&to, &weight) in targets.iter().zip(weights) {
                let candidate = du + weight;
                if candidate < dist[to] {
                    dist[to] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            debug!(iteration, "converged");
            break;
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::INF;

    #[test]
    fn solves_a_small_diamond() {
        let graph = CsrGraph::from_edges(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 1), (2, 3, 1)]);
        assert_eq!(shortest_paths_serial(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn source_elsewhere_leaves_earlier_vertices_unreached() {
        let graph = CsrGraph::from_edges(3, &[(0, 1, 1), (1, 2, 1)]);
        assert_eq!(shortest_paths_serial(&graph, 1).unwrap(), vec![INF, 0, 1]);
    }

    #[test]
    fn validates_before_solving() {
        let graph = CsrGraph::from_edges(0, &[]);
        assert_eq!(shortest_paths_serial(&graph, 0), Err(Error::EmptyGraph));
    }
}
