use clap::Parser;

use crate::graph::CsrGraph;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct SsspCli {
    /// Number of vertices in the generated graph
    #[arg(short, long, default_value_t = 1000)]
    pub vertices: usize,

    /// Out-edges generated per vertex
    #[arg(short, long, default_value_t = 3)]
    pub edges_per_vertex: usize,

    /// Source vertex
    #[arg(short, long, default_value_t = 0)]
    pub source: usize,

    /// Worker threads (in-process engine; the lamellar variant uses one
    /// worker per PE instead)
    #[arg(short, long, default_value_t = 4)]
    pub workers: usize,

    /// Seed for random edge weights; omit to use the deterministic fixture
    /// weights
    #[arg(short, long)]
    pub random_seed: Option<u64>,

    /// Largest random edge weight
    #[arg(short, long, default_value_t = 20)]
    pub max_weight: i64,
}

impl SsspCli {
    /// The input graph for this run. Generation is seeded, so every worker
    /// or PE parsing the same arguments builds the identical graph.
    pub fn graph(&self) -> CsrGraph {
        match self.random_seed {
            Some(seed) => {
                CsrGraph::random(seed, self.vertices, self.edges_per_vertex, self.max_weight)
            }
            None => CsrGraph::deterministic(self.vertices, self.edges_per_vertex),
        }
    }

    pub fn describe(&self, num_workers: usize) {
        println!("vertices: {}", self.vertices);
        println!("edges per vertex: {}", self.edges_per_vertex);
        println!("source: {}", self.source);
        println!("workers: {}", num_workers);
        match self.random_seed {
            Some(seed) => println!("weights: random, seed {seed}, max {}", self.max_weight),
            None => println!("weights: deterministic fixture"),
        }
    }
}
