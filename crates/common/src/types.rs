use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense vertex index in `0..V`.
pub type Vertex = usize;

/// A directed, weighted edge `from -> to`.
///
/// Weights may be negative, zero or positive. Self-loops and parallel edges
/// are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((from, to, weight): (usize, usize, f64)) -> Self {
        Edge::new(from, to, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}

/// A closed walk of edges whose weights sum to a negative value.
///
/// Edges are stored in forward traversal order: `edges[i].to == edges[i + 1].from`
/// and the last edge returns to the first edge's tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    edges: Vec<Edge>,
    total_weight: f64,
}

impl Cycle {
    pub fn new(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Cycle {
            edges,
            total_weight,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the edge weights along the cycle.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Tail vertices of each edge, in traversal order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.edges.iter().map(|e| e.from).collect()
    }

    /// True when the walk is non-empty, every edge starts where the previous
    /// one ended, and the last edge returns to the start.
    pub fn is_closed(&self) -> bool {
        let (Some(first), Some(last)) = (self.edges.first(), self.edges.last()) else {
            return false;
        };
        last.to == first.from && self.edges.windows(2).all(|w| w[0].to == w[1].from)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        write!(f, "total weight {:.2}", self.total_weight)
    }
}
