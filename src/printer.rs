use std::time::Duration;

use crate::graph::INF;

/// Timing line for one variant, printed on worker/PE 0 only.
pub fn print_times(my_pe: usize, variant: &str, init: Duration, solve: Duration) {
    if my_pe == 0 {
        println!(
            "{} init: {:<13} solve: {:<13}",
            format!("{variant:<10}"),
            format!("{init:<6.4?}"),
            format!("{solve:<6.4?}"),
        );
    }
}

/// Distance-vector summary, printed on worker/PE 0 only.
pub fn print_summary(my_pe: usize, dist: &[i64]) {
    if my_pe == 0 {
        let finite: Vec<i64> = dist.iter().copied().filter(|&d| d < INF / 2).collect();
        let longest = finite.iter().max().copied().unwrap_or(0);
        println!(
            "reached {} of {} vertices, longest shortest path: {}",
            finite.len(),
            dist.len(),
            longest,
        );
    }
}
