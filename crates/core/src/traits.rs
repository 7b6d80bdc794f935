use super::graph::Graph;
use super::relaxation::Relaxation;
use sssp_common::error::Result;

/// Trait for single-source shortest-path solvers that tolerate negative weights.
pub trait ShortestPathSolver {
    /// Computes distances and predecessors from `source`, or stops at the
    /// first negative cycle reachable from `source`.
    ///
    /// Returns `Ok(relaxation)` whether or not a cycle was found; inspect
    /// `Relaxation::negative_cycle`. `Err(e)` means a bad source vertex or an
    /// internal consistency failure.
    fn solve(&self, graph: &Graph, source: usize) -> Result<Relaxation>;
}
