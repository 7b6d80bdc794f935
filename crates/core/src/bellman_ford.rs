use sssp_common::error::Result;
use sssp_common::numeric::improves;
use tracing::{debug, warn};

use super::cycle::extract_cycle;
use super::graph::Graph;
use super::relaxation::Relaxation;
use super::traits::ShortestPathSolver;

/// Plain Bellman-Ford: up to `V - 1` passes over every edge, then one
/// checking pass.
///
/// Always `O(V·E)` in the worst case and independent of any queue discipline,
/// which makes it the reference that `MooreSolver` is measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordSolver;

impl BellmanFordSolver {
    /// One pass over all edges in vertex order. Returns the last vertex
    /// improved, if any.
    fn relax_all(
        graph: &Graph,
        dist: &mut [f64],
        edge_to: &mut [Option<usize>],
        relaxations: &mut usize,
    ) -> Result<Option<usize>> {
        let mut improved = None;

        for u in 0..graph.num_vertices() {
            if dist[u].is_infinite() {
                continue;
            }
            for edge_idx in graph.edge_indices(u) {
                let edge = graph.edge(edge_idx)?;
                let candidate = dist[u] + edge.weight;
                if improves(candidate, dist[edge.to]) {
                    dist[edge.to] = candidate;
                    edge_to[edge.to] = Some(edge_idx);
                    *relaxations += 1;
                    improved = Some(edge.to);
                }
            }
        }

        Ok(improved)
    }
}

impl ShortestPathSolver for BellmanFordSolver {
    fn solve(&self, graph: &Graph, source: usize) -> Result<Relaxation> {
        graph.check_vertex(source)?;

        let num_vertices = graph.num_vertices();
        let mut dist = vec![f64::INFINITY; num_vertices];
        let mut edge_to: Vec<Option<usize>> = vec![None; num_vertices];
        let mut relaxations = 0;
        let mut passes = 0;

        dist[source] = 0.0;

        for _ in 1..num_vertices {
            passes += 1;
            let improved = Self::relax_all(graph, &mut dist, &mut edge_to, &mut relaxations)?;
            if improved.is_none() {
                debug!(source, passes, relaxations, "bellman-ford converged early");
                return Ok(Relaxation {
                    dist,
                    edge_to,
                    negative_cycle: None,
                    phases: passes,
                    relaxations,
                });
            }
        }

        // Anything still improving after V - 1 passes sits downstream of a
        // negative cycle.
        passes += 1;
        let negative_cycle =
            match Self::relax_all(graph, &mut dist, &mut edge_to, &mut relaxations)? {
                Some(v) => {
                    let cycle = extract_cycle(graph, &edge_to, v)?;
                    warn!(source, cycle_len = cycle.len(), "negative cycle reachable from source");
                    Some(cycle)
                }
                None => None,
            };

        debug!(source, passes, relaxations, "bellman-ford finished");

        Ok(Relaxation {
            dist,
            edge_to,
            negative_cycle,
            phases: passes,
            relaxations,
        })
    }
}
