use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A vertex index at or beyond the graph's vertex count.
    #[error("Vertex {vertex} is out of bounds for a graph with {num_vertices} vertices.")]
    VertexOutOfBounds { vertex: usize, num_vertices: usize },

    /// A graph must have at least one vertex to hold a source.
    #[error("Graph must contain at least one vertex.")]
    EmptyGraph,

    /// Edge weights must be finite real numbers.
    #[error("Edge {from}->{to} has a non-finite weight.")]
    InvalidWeight { from: usize, to: usize },

    /// A negative cycle is reachable from the source, so distances are unbounded below.
    #[error("Shortest-path distance is undefined: a negative cycle is reachable from the source.")]
    UndefinedDistance,

    /// The vertex cannot be reached from the source.
    #[error("No path from the source to vertex {0}.")]
    NoPath(usize),

    /// The engine left the predecessor structure in a state it should never reach.
    #[error("Internal consistency violated: {0}")]
    InternalConsistency(String),

    /// The computed shortest-path tree fails its optimality certificate.
    #[error("Optimality check failed: {0}")]
    OptimalityViolation(String),
}
