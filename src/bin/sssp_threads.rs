//! In-process driver: runs the serial reference and the threaded engine on
//! the same generated graph, checks they agree, and prints timings.

use bellman_ford::options::SsspCli;
use bellman_ford::printer::{print_summary, print_times};
use bellman_ford::{shortest_paths, shortest_paths_serial};

use clap::Parser;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = SsspCli::parse();
    cli.describe(cli.workers);

    let timer = Instant::now();
    let graph = cli.graph();
    let init_time = timer.elapsed();

    let timer = Instant::now();
    let reference = shortest_paths_serial(&graph, cli.source).expect("invalid input graph");
    let serial_time = timer.elapsed();
    print_times(0, "serial", init_time, serial_time);

    let timer = Instant::now();
    let dist = shortest_paths(&graph, cli.source, cli.workers).expect("invalid input graph");
    let solve_time = timer.elapsed();
    print_times(0, "threads", init_time, solve_time);

    assert_eq!(
        dist, reference,
        "threaded engine disagrees with the serial reference"
    );
    print_summary(0, &dist);
}
