use std::collections::VecDeque;

use sssp_common::error::Result;
use sssp_common::numeric::improves;
use tracing::{debug, trace, warn};

use super::cycle::extract_cycle;
use super::graph::Graph;
use super::relaxation::Relaxation;
use super::traits::ShortestPathSolver;

/// Queue-based relaxation solver (Moore's algorithm, also known as SPFA)
/// with phase-bounded negative cycle detection.
///
/// Work proceeds in phases. A phase processes exactly the vertices that were
/// queued when it started (the frontier); vertices improved during the phase
/// are queued for the next one. After phase `k` every distance is at most the
/// weight of the best walk with `k` edges, so a shortest path needs at most
/// `V - 1` phases. An improvement during phase `V` therefore proves a
/// negative cycle reachable from the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MooreSolver;

impl ShortestPathSolver for MooreSolver {
    /// Runs Moore's algorithm from `source`.
    ///
    /// # Returns
    /// - `Ok(relaxation)` with `negative_cycle == None` → distances are final.
    /// - `Ok(relaxation)` with `negative_cycle == Some(_)` → the first reachable
    ///   negative cycle met in relaxation order; the computation stopped there.
    /// - `Err(e)` → `source` is out of range, or cycle extraction failed.
    fn solve(&self, graph: &Graph, source: usize) -> Result<Relaxation> {
        graph.check_vertex(source)?;

        let num_vertices = graph.num_vertices();
        let mut dist = vec![f64::INFINITY; num_vertices];
        let mut edge_to: Vec<Option<usize>> = vec![None; num_vertices];
        let mut in_queue = vec![false; num_vertices];
        let mut queue = VecDeque::with_capacity(num_vertices);

        dist[source] = 0.0;
        queue.push_back(source);
        in_queue[source] = true;

        let mut phase = 0;
        let mut relaxations = 0;

        while !queue.is_empty() {
            phase += 1;

            // Only the vertices queued before this phase began belong to it.
            let frontier = queue.len();
            trace!(phase, frontier, "starting relaxation phase");

            for _ in 0..frontier {
                let Some(u) = queue.pop_front() else {
                    break;
                };
                in_queue[u] = false;

                for edge_idx in graph.edge_indices(u) {
                    let edge = graph.edge(edge_idx)?;
                    let v = edge.to;
                    let candidate = dist[u] + edge.weight;

                    // Ties and rounding noise keep the first predecessor found.
                    if improves(candidate, dist[v]) {
                        dist[v] = candidate;
                        edge_to[v] = Some(edge_idx);
                        relaxations += 1;

                        if phase == num_vertices {
                            let cycle = extract_cycle(graph, &edge_to, v)?;
                            warn!(
                                source,
                                phase,
                                cycle_len = cycle.len(),
                                total_weight = cycle.total_weight(),
                                "negative cycle reachable from source"
                            );
                            return Ok(Relaxation {
                                dist,
                                edge_to,
                                negative_cycle: Some(cycle),
                                phases: phase,
                                relaxations,
                            });
                        }

                        if !in_queue[v] {
                            queue.push_back(v);
                            in_queue[v] = true;
                        }
                    }
                }
            }
        }

        debug!(source, phases = phase, relaxations, "shortest paths computed");

        Ok(Relaxation {
            dist,
            edge_to,
            negative_cycle: None,
            phases: phase,
            relaxations,
        })
    }
}
