use std::ops::Range;

use sssp_common::error::{Error, Result};
use sssp_common::types::{Edge, Vertex};

/// Immutable directed weighted graph in Compressed Sparse Row (CSR) format.
///
/// - `offsets[u]..offsets[u+1]` → indices of the edges leaving `u`
/// - `edges[i]` → the edge stored at arena index `i`
///
/// Outgoing edges of each vertex keep the order in which they were supplied,
/// which is what makes relaxation order (and so tie-breaking) deterministic.
/// Edge indices are stable for the life of the graph, so predecessor
/// structures can refer to edges by index instead of by reference.
#[derive(Debug, Clone)]
pub struct Graph {
    num_vertices: usize,
    offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph with `num_vertices` vertices from a list of edges.
    ///
    /// # Errors
    /// - `Error::EmptyGraph` if `num_vertices == 0`.
    /// - `Error::VertexOutOfBounds` if an endpoint is `>= num_vertices`.
    /// - `Error::InvalidWeight` if a weight is NaN or infinite.
    pub fn from_edges<I, E>(num_vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        if num_vertices == 0 {
            return Err(Error::EmptyGraph);
        }

        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        for edge in &edges {
            for vertex in [edge.from, edge.to] {
                if vertex >= num_vertices {
                    return Err(Error::VertexOutOfBounds {
                        vertex,
                        num_vertices,
                    });
                }
            }
            if !edge.weight.is_finite() {
                return Err(Error::InvalidWeight {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }

        let (offsets, edges) = Self::build_csr(num_vertices, &edges);

        Ok(Self {
            num_vertices,
            offsets,
            edges,
        })
    }

    /// Two-pass counting placement. Edges sharing a tail are written in input
    /// order, so the per-vertex order survives without a sort.
    fn build_csr(num_vertices: usize, edges: &[Edge]) -> (Vec<usize>, Vec<Edge>) {
        let mut offsets = vec![0; num_vertices + 1];

        for edge in edges {
            offsets[edge.from + 1] += 1;
        }

        for i in 1..=num_vertices {
            offsets[i] += offsets[i - 1];
        }

        let mut placed = vec![Edge::new(0, 0, 0.0); edges.len()];
        let mut cursor = offsets.clone();

        for &edge in edges {
            let pos = cursor[edge.from];
            placed[pos] = edge;
            cursor[edge.from] += 1;
        }

        (offsets, placed)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `Ok(())` if `vertex` names a vertex of this graph.
    pub fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(Error::VertexOutOfBounds {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    /// Arena indices of the edges leaving `u`.
    ///
    /// Panics if `u` is out of range; callers validate vertices first.
    pub fn edge_indices(&self, u: Vertex) -> Range<usize> {
        self.offsets[u]..self.offsets[u + 1]
    }

    /// Outgoing edges of `u` in insertion order.
    pub fn adj(&self, u: Vertex) -> &[Edge] {
        &self.edges[self.edge_indices(u)]
    }

    /// The edge stored at arena index `index`.
    ///
    /// # Errors
    /// Returns `Error::InternalConsistency` if `index` does not name an edge.
    pub fn edge(&self, index: usize) -> Result<Edge> {
        self.edges.get(index).copied().ok_or_else(|| {
            Error::InternalConsistency(format!("edge index {} is not in the graph", index))
        })
    }

    /// All edges, grouped by tail vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}
