//! Compressed sparse row graph storage.
//!
//! The graph is immutable once built: `row_ptr[v]..row_ptr[v + 1]` delimits
//! the out-edges of vertex `v` in the parallel `col_idx`/`weights` arrays.
//! [`CsrGraph::validate`] checks every structural invariant up front so the
//! solvers never have to.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Result};

/// Distance sentinel for unreachable vertices. Kept at a quarter of the
/// `i64` range so that `INF / 2 + weight` cannot overflow during relaxation.
pub const INF: i64 = i64::MAX / 4;

/// The serde derives keep the graph wire-ready: a driver may ship it to PEs
/// in an active message instead of regenerating it locally the way the
/// bundled drivers do.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CsrGraph {
    pub vertex_count: usize,
    pub row_ptr: Vec<usize>,
    pub col_idx: Vec<usize>,
    pub weights: Vec<i64>,
}

impl CsrGraph {
    pub fn edge_count(&self) -> usize {
        self.col_idx.len()
    }

    /// Out-edges of `vertex` as parallel (targets, weights) slices.
    pub fn edges(&self, vertex: usize) -> (&[usize], &[i64]) {
        let begin = self.row_ptr[vertex];
        let end = self.row_ptr[vertex + 1];
        (&self.col_idx[begin..end], &self.weights[begin..end])
    }

    /// Checks the structural CSR invariants. A graph that passes is safe to
    /// index without bounds failures for the rest of the run.
    pub fn validate(&self) -> Result<()> {
        if self.vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }
        if self.row_ptr.len() != self.vertex_count + 1 {
            return Err(Error::RowPtrLength {
                found: self.row_ptr.len(),
                expected: self.vertex_count + 1,
            });
        }
        if self.row_ptr[0] != 0 {
            return Err(Error::RowPtrStart);
        }
        for vertex in 0..self.vertex_count {
            if self.row_ptr[vertex + 1] < self.row_ptr[vertex] {
                return Err(Error::RowPtrOrder(vertex));
            }
        }
        if self.col_idx.len() != self.weights.len() {
            return Err(Error::ParallelLengths {
                col_idx: self.col_idx.len(),
                weights: self.weights.len(),
            });
        }
        if self.row_ptr[self.vertex_count] != self.col_idx.len() {
            return Err(Error::EdgeCountMismatch {
                found: self.row_ptr[self.vertex_count],
                expected: self.col_idx.len(),
            });
        }
        for (edge, &vertex) in self.col_idx.iter().enumerate() {
            if vertex >= self.vertex_count {
                return Err(Error::ColIdxOutOfRange {
                    edge,
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Builds a graph from `(from, to, weight)` triplets via counting sort.
    /// Triplets may arrive in any order; duplicates are kept as parallel
    /// edges. Every `from` must lie in `0..vertex_count`; out-of-range
    /// targets are representable and left for [`CsrGraph::validate`] to
    /// reject.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, i64)]) -> CsrGraph {
        let mut row_ptr = vec![0usize; vertex_count + 1];
        for &(from, _, _) in edges {
            debug_assert!(
                from < vertex_count,
                "edge source {from} outside 0..{vertex_count}"
            );
            row_ptr[from + 1] += 1;
        }
        for vertex in 0..vertex_count {
            row_ptr[vertex + 1] += row_ptr[vertex];
        }

        let mut cursor = row_ptr.clone();
        let mut col_idx = vec![0usize; edges.len()];
        let mut weights = vec![0i64; edges.len()];
        for &(from, to, weight) in edges {
            let slot = cursor[from];
            col_idx[slot] = to;
            weights[slot] = weight;
            cursor[from] += 1;
        }

        CsrGraph {
            vertex_count,
            row_ptr,
            col_idx,
            weights,
        }
    }

    /// The fixture graph: `edges_per_vertex` out-edges per vertex, targets
    /// `(v + k) % n` for `k` in `1..=edges_per_vertex`, and the weight
    /// formula `1 + ((v*31 + to*17 + k*13) % 20)`. Reproducible everywhere
    /// without communication, which makes it the fixture for cross-variant
    /// comparisons.
    pub fn deterministic(vertex_count: usize, edges_per_vertex: usize) -> CsrGraph {
        let per_vertex = edges_per_vertex.max(1);
        let mut row_ptr = Vec::with_capacity(vertex_count + 1);
        let mut col_idx = Vec::with_capacity(vertex_count * per_vertex);
        let mut weights = Vec::with_capacity(vertex_count * per_vertex);

        row_ptr.push(0);
        for vertex in 0..vertex_count {
            for k in 1..=per_vertex {
                let to = (vertex + k) % vertex_count;
                let weight = 1 + ((vertex * 31 + to * 17 + k * 13) % 20) as i64;
                col_idx.push(to);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        CsrGraph {
            vertex_count,
            row_ptr,
            col_idx,
            weights,
        }
    }

    /// Unit-weight directed cycle `0 -> 1 -> ... -> n-1 -> 0`.
    pub fn cycle(vertex_count: usize) -> CsrGraph {
        let edges: Vec<_> = (0..vertex_count)
            .map(|vertex| (vertex, (vertex + 1) % vertex_count, 1))
            .collect();
        CsrGraph::from_edges(vertex_count, &edges)
    }

    /// Randomly weighted benchmark graph: same target layout as
    /// [`CsrGraph::deterministic`], weights drawn from a seeded `StdRng` so
    /// every PE generates the identical graph.
    pub fn random(
        seed: u64,
        vertex_count: usize,
        edges_per_vertex: usize,
        max_weight: i64,
    ) -> CsrGraph {
        let mut graph = CsrGraph::deterministic(vertex_count, edges_per_vertex);
        let mut rng = StdRng::seed_from_u64(seed);
        let max_weight = max_weight.max(1);
        for weight in graph.weights.iter_mut() {
            *weight = rng.gen_range(1..=max_weight);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_sorts_triplets_into_rows() {
        let graph = CsrGraph::from_edges(3, &[(2, 0, 7), (0, 1, 5), (0, 2, 3)]);
        assert_eq!(graph.row_ptr, vec![0, 2, 2, 3]);
        assert_eq!(graph.edges(0), (&[1usize, 2][..], &[5i64, 3][..]));
        assert_eq!(graph.edges(1), (&[][..], &[][..]));
        assert_eq!(graph.edges(2), (&[0usize][..], &[7i64][..]));
        assert!(graph.validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "edge source 2 outside 0..2")]
    fn from_edges_rejects_out_of_range_sources() {
        let _ = CsrGraph::from_edges(2, &[(2, 0, 1)]);
    }

    #[test]
    fn validate_rejects_empty_graph() {
        let graph = CsrGraph::from_edges(0, &[]);
        assert_eq!(graph.validate(), Err(Error::EmptyGraph));
    }

    #[test]
    fn validate_rejects_bad_row_ptr() {
        let mut graph = CsrGraph::from_edges(2, &[(0, 1, 1)]);
        graph.row_ptr = vec![0, 1];
        assert_eq!(
            graph.validate(),
            Err(Error::RowPtrLength {
                found: 2,
                expected: 3
            })
        );

        let mut graph = CsrGraph::from_edges(2, &[(0, 1, 1)]);
        graph.row_ptr[0] = 1;
        assert_eq!(graph.validate(), Err(Error::RowPtrStart));

        let mut graph = CsrGraph::from_edges(3, &[(0, 1, 1), (1, 2, 1)]);
        graph.row_ptr = vec![0, 2, 1, 2];
        assert_eq!(graph.validate(), Err(Error::RowPtrOrder(1)));
    }

    #[test]
    fn validate_rejects_mismatched_edge_arrays() {
        let mut graph = CsrGraph::from_edges(2, &[(0, 1, 1)]);
        graph.weights.push(9);
        assert_eq!(
            graph.validate(),
            Err(Error::ParallelLengths {
                col_idx: 1,
                weights: 2
            })
        );

        let mut graph = CsrGraph::from_edges(2, &[(0, 1, 1)]);
        graph.row_ptr[2] = 5;
        assert_eq!(
            graph.validate(),
            Err(Error::EdgeCountMismatch {
                found: 5,
                expected: 1
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_targets() {
        let mut graph = CsrGraph::from_edges(2, &[(0, 1, 1)]);
        graph.col_idx[0] = 2;
        assert_eq!(
            graph.validate(),
            Err(Error::ColIdxOutOfRange {
                edge: 0,
                vertex: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn deterministic_graph_matches_the_fixture_formula() {
        let graph = CsrGraph::deterministic(100, 3);
        assert_eq!(graph.vertex_count, 100);
        assert_eq!(graph.edge_count(), 300);
        assert!(graph.validate().is_ok());

        // spot-check vertex 5, k = 2: to = 7, weight = 1 + ((155 + 119 + 26) % 20)
        let (targets, weights) = graph.edges(5);
        assert_eq!(targets, &[6, 7, 8]);
        assert_eq!(weights[1], 1 + ((5 * 31 + 7 * 17 + 2 * 13) % 20) as i64);
    }

    #[test]
    fn random_graph_is_reproducible() {
        let a = CsrGraph::random(42, 50, 3, 20);
        let b = CsrGraph::random(42, 50, 3, 20);
        assert_eq!(a, b);
        assert!(a.validate().is_ok());
        assert!(a.weights.iter().all(|&w| (1..=20).contains(&w)));
    }

    #[test]
    fn cycle_graph_has_unit_weights() {
        let graph = CsrGraph::cycle(4);
        assert!(graph.validate().is_ok());
        assert_eq!(graph.edges(3), (&[0usize][..], &[1i64][..]));
    }
}
