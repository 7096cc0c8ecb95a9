use log::debug;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::DistanceGraph;
use crate::matrix::DistanceMatrix;
use crate::utils::INFINITY;

/// Relaxes a copy of the `n * n` row-major `weights` through every
/// intermediate vertex.
///
/// The loop order is `k`, then `i`, then `j`: when `k` is the intermediate,
/// every path through `0..k` is already folded into `dist`. IEEE arithmetic
/// keeps unreachable cells unreachable, since `inf + x` is `inf` and
/// `inf < inf` is false.
pub(crate) fn floyd_warshall(n: usize, weights: &[f64]) -> DistanceMatrix {
    let mut dist = weights.to_vec();

    for k in 0..n {
        for i in 0..n {
            // an unreachable k stays unreachable for the whole row
            if dist[i * n + k] == INFINITY {
                continue;
            }
            for j in 0..n {
                let through_k = dist[i * n + k] + dist[k * n + j];
                if through_k < dist[i * n + j] {
                    dist[i * n + j] = through_k;
                }
            }
        }
    }

    DistanceMatrix::from_raw(n, dist)
}

impl DistanceGraph {
    /// All-pairs shortest distances, recomputed from the current edges on
    /// every call. The graph itself is left untouched.
    ///
    /// Negative cycles are not detected; distances touching one are
    /// understated but deterministic.
    pub fn shortest_distances(&self) -> DistanceMatrix {
        let n = self.vertex_count();
        let start = Instant::now();
        debug!("floyd-warshall: relaxing {} vertices", n);

        let dist = floyd_warshall(n, self.weights());

        debug!("floyd-warshall: done in {:?}", start.elapsed());
        dist
    }

    /// Shortest distance from `start` to `end`.
    ///
    /// Returns [`INFINITY`] both when no path exists and when either index is
    /// out of range. Use [`try_shortest_distance`](Self::try_shortest_distance)
    /// to tell the two apart.
    pub fn shortest_distance(&self, start: usize, end: usize) -> f64 {
        self.try_shortest_distance(start, end).unwrap_or(INFINITY)
    }

    pub fn try_shortest_distance(&self, start: usize, end: usize) -> Result<f64> {
        let vertex_count = self.vertex_count();
        for vertex in [start, end] {
            if vertex >= vertex_count {
                return Err(GraphError::InvalidVertexIndex {
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(self.shortest_distances()[(start, end)])
    }
}
