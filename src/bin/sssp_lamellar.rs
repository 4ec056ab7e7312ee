//! Distributed Bellman-Ford: one relaxation worker per PE.
//!
//! Every PE builds the identical graph locally and holds a full replica of
//! the distance vector. Each epoch a PE relaxes the out-edges of its vertex
//! stripe against a snapshot of its replica, then broadcasts its improved
//! (vertex, distance) pairs to all PEs; the receiving active message merges
//! them by element-wise minimum, so concurrent proposals from different PEs
//! commute and every replica converges to the same vector. `wait_all` plus
//! the barrier closes the epoch, and an epoch in which no merge improved any
//! entry ends the run early.

use lamellar::active_messaging::prelude::*;
use lamellar::darc::prelude::*;

use bellman_ford::options::SsspCli;
use bellman_ford::partition::owned_vertices;
use bellman_ford::printer::{print_summary, print_times};
use bellman_ford::relax::{initial_distances, relax_sweep};
use bellman_ford::shortest_paths_serial;

use clap::Parser;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

#[lamellar::AmData(Clone, Debug)]
struct MergeDistancesAm {
    new_distances: Vec<(usize, i64)>,
    distances: LocalRwDarc<Vec<i64>>,
    changed: Darc<AtomicBool>,
}

#[lamellar::am]
impl LamellarAM for MergeDistancesAm {
    async fn exec(self) {
        let mut distances = self.distances.write();
        for &(vertex, candidate) in self.new_distances.iter() {
            if candidate < distances[vertex] {
                distances[vertex] = candidate;
                self.changed.store(true, Ordering::Relaxed);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let world = lamellar::LamellarWorldBuilder::new().build();
    let my_pe = world.my_pe();
    let num_pes = world.num_pes();

    let cli = SsspCli::parse();
    if my_pe == 0 {
        cli.describe(num_pes);
    }

    let timer = Instant::now();
    // seeded generation: every PE ends up with the identical graph, so
    // ownership needs no communication
    let graph = cli.graph();
    graph.validate().expect("invalid input graph");
    assert!(
        cli.source < graph.vertex_count,
        "source vertex out of range"
    );
    let vertex_count = graph.vertex_count;

    let distances = LocalRwDarc::new(&world, initial_distances(vertex_count, cli.source))
        .expect("darc should be created");
    let changed = Darc::new(&world, AtomicBool::new(false)).expect("darc should be created");
    world.barrier();
    let init_time = timer.elapsed();

    let timer = Instant::now();
    for _epoch in 0..vertex_count.saturating_sub(1) {
        changed.store(false, Ordering::Relaxed);
        world.barrier(); // every flag is reset before any merge of this epoch lands

        let snapshot: Vec<i64> = distances.read().to_vec();
        let mut dist_next = snapshot.clone();
        relax_sweep(
            &graph,
            &snapshot,
            owned_vertices(my_pe, num_pes, vertex_count),
            &mut dist_next,
        );

        let new_distances: Vec<(usize, i64)> = dist_next
            .iter()
            .zip(snapshot.iter())
            .enumerate()
            .filter(|(_, (next, prev))| next < prev)
            .map(|(vertex, (&next, _))| (vertex, next))
            .collect();

        if !new_distances.is_empty() {
            let _ = world.exec_am_all(MergeDistancesAm {
                new_distances,
                distances: distances.clone(),
                changed: changed.clone(),
            });
        }
        world.wait_all();
        world.barrier();

        // replicas start each epoch identical and apply the same merges, so
        // the local flag agrees on every PE
        if !changed.load(Ordering::Relaxed) {
            break;
        }
    }
    let solve_time = timer.elapsed();

    let dist: Vec<i64> = distances.read().to_vec();
    print_times(my_pe, "lamellar", init_time, solve_time);
    if my_pe == 0 {
        let reference = shortest_paths_serial(&graph, cli.source).expect("invalid input graph");
        assert_eq!(
            dist, reference,
            "distributed engine disagrees with the serial reference"
        );
        print_summary(my_pe, &dist);
    }
    world.barrier();
}
