pub mod error;
mod floyd_warshall;
pub mod graph;
pub mod matrix;
#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "petgraph")]
pub mod petgraph_utils;
pub mod utils;

pub use error::{GraphError, Result};
pub use graph::DistanceGraph;
pub use matrix::DistanceMatrix;
pub use utils::{INFINITY, VertexDistance};

#[cfg(feature = "parallel")]
pub use parallel::shortest_distances_parallel;
