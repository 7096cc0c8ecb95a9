use thiserror::Error;

/// Errors surfaced by the strict `try_*` operations and the loaders.
///
/// The lenient operations ([`DistanceGraph::add_edge`](crate::DistanceGraph::add_edge),
/// [`DistanceGraph::shortest_distance`](crate::DistanceGraph::shortest_distance))
/// never produce one of these.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("edge endpoint {vertex} out of range for graph with {vertex_count} vertices")]
    IndexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("vertex {vertex} is not a valid query index (graph has {vertex_count} vertices)")]
    InvalidVertexIndex { vertex: usize, vertex_count: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("weight matrix holds {found} cells, expected {expected}")]
    MalformedMatrix { expected: usize, found: usize },

    #[error("{vertices} vertices do not fit in a weight matrix")]
    TooManyVertices { vertices: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "bincode")]
    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),

    #[cfg(feature = "bincode")]
    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
