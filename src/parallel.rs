use log::debug;
use rayon::prelude::*;
use std::time::Instant;

use crate::graph::DistanceGraph;
use crate::matrix::DistanceMatrix;
use crate::utils::INFINITY;

/// Row-parallel Floyd-Warshall.
///
/// `k` stays the outer, sequential loop. For each `k` the rows are relaxed
/// in parallel against a copy of row `k` taken before the round. Row `k`
/// only changes during its own round when `dist[k][k] < 0`, so the result
/// matches [`DistanceGraph::shortest_distances`] on every graph without a
/// negative cycle.
pub fn shortest_distances_parallel(graph: &DistanceGraph) -> DistanceMatrix {
    let n = graph.vertex_count();
    let start = Instant::now();
    debug!(
        "parallel floyd-warshall: relaxing {} vertices on {} threads",
        n,
        rayon::current_num_threads()
    );

    let mut dist = graph.weights().to_vec();
    let mut row_k = vec![INFINITY; n];

    for k in 0..n {
        row_k.copy_from_slice(&dist[k * n..(k + 1) * n]);
        let row_k = &row_k;

        dist.par_chunks_mut(n).for_each(|row| {
            if row[k] == INFINITY {
                return;
            }
            for j in 0..n {
                let through_k = row[k] + row_k[j];
                if through_k < row[j] {
                    row[j] = through_k;
                }
            }
        });
    }

    debug!("parallel floyd-warshall: done in {:?}", start.elapsed());
    DistanceMatrix::from_raw(n, dist)
}
