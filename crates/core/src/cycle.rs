use sssp_common::error::{Error, Result};
use sssp_common::types::{Cycle, Edge};

use super::graph::Graph;

/// Isolates the cycle in a predecessor structure, starting from `start`.
///
/// `edge_to[v]` holds the arena index of the edge that last improved `v`.
/// The walk follows predecessors backwards from `start`, remembering the hop
/// at which each vertex was first seen. Only `V` distinct vertices exist, so
/// within `V` hops some vertex repeats; the edges walked between its two
/// visits form the cycle. They are reversed into forward traversal order
/// before being returned.
///
/// The caller must only invoke this right after an improvement that proves a
/// negative cycle (a relaxation in the `V`-th phase or pass), at the vertex
/// that was improved.
///
/// # Errors
/// Returns `Error::InternalConsistency` if the walk runs off the end of the
/// predecessor chain, finds no repeated vertex, or produces a cycle that is
/// not closed with strictly negative weight.
pub fn extract_cycle(graph: &Graph, edge_to: &[Option<usize>], start: usize) -> Result<Cycle> {
    let num_vertices = graph.num_vertices();
    graph.check_vertex(start)?;

    // first_seen[v] = number of edges walked when v was first reached.
    let mut first_seen: Vec<Option<usize>> = vec![None; num_vertices];
    let mut walked: Vec<Edge> = Vec::with_capacity(num_vertices);

    let mut current = start;
    first_seen[current] = Some(0);

    let repeat_at = loop {
        if walked.len() >= num_vertices {
            return Err(Error::InternalConsistency(format!(
                "no repeated vertex within {} predecessor hops from vertex {}",
                num_vertices, start
            )));
        }

        let edge_idx = edge_to[current].ok_or_else(|| {
            Error::InternalConsistency(format!(
                "predecessor chain from vertex {} ends at vertex {} without closing a cycle",
                start, current
            ))
        })?;
        let edge = graph.edge(edge_idx)?;
        walked.push(edge);
        current = edge.from;

        match first_seen[current] {
            Some(hop) => break hop,
            None => first_seen[current] = Some(walked.len()),
        }
    };

    let mut cycle_edges = walked.split_off(repeat_at);
    cycle_edges.reverse();
    let cycle = Cycle::new(cycle_edges);

    if !cycle.is_closed() {
        return Err(Error::InternalConsistency(format!(
            "extracted walk through vertex {} is not closed",
            current
        )));
    }
    if cycle.total_weight() >= 0.0 {
        return Err(Error::InternalConsistency(format!(
            "extracted cycle through vertex {} has non-negative weight {}",
            current,
            cycle.total_weight()
        )));
    }

    Ok(cycle)
}
