use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sssp_common::error::Result;
use sssp_common::types::Edge;
use sssp_core::{Graph, Relaxation, ShortestPathSolver};

pub const NUM_VERTICES: usize = 20_000;
pub const EDGES_PER_VERTEX: usize = 8;
pub const SEED: u64 = 0x5eed;

/// Builds a sparse graph with negative edges but no negative cycle.
///
/// Every weight is `p[to] - p[from] + slack` for random potentials `p` and a
/// non-negative slack, so each cycle weighs the sum of its slacks. The graph
/// also carries a spine `0 -> 1 -> ... -> V-1` so every vertex is reachable
/// from vertex 0.
pub fn generate_benchmark_graph(
    num_vertices: usize,
    edges_per_vertex: usize,
    seed: u64,
) -> Result<Graph> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let potentials: Vec<f64> = (0..num_vertices)
        .map(|_| rng.random_range(-50.0..50.0))
        .collect();

    let weighted = |from: usize, to: usize, rng: &mut SmallRng| {
        let slack: f64 = rng.random_range(0.0..10.0);
        Edge::new(from, to, potentials[to] - potentials[from] + slack)
    };

    let mut edges = Vec::with_capacity(num_vertices * (edges_per_vertex + 1));
    for from in 0..num_vertices {
        if from + 1 < num_vertices {
            edges.push(weighted(from, from + 1, &mut rng));
        }
        for _ in 0..edges_per_vertex {
            let to = rng.random_range(0..num_vertices);
            edges.push(weighted(from, to, &mut rng));
        }
    }

    Graph::from_edges(num_vertices, edges)
}

/// Runs `solver` from vertex 0 and reports how long it took.
pub fn time_solver<S: ShortestPathSolver>(
    solver: &S,
    graph: &Graph,
) -> Result<(Relaxation, Duration)> {
    let start_time = Instant::now();
    let relaxation = solver.solve(black_box(graph), 0)?;
    let elapsed_time = start_time.elapsed();

    Ok((relaxation, elapsed_time))
}

pub fn print_results(name: &str, graph: &Graph, relaxation: &Relaxation, elapsed: Duration) {
    let reachable = relaxation
        .distances()
        .iter()
        .filter(|d| d.is_finite())
        .count();
    let checksum: f64 = relaxation
        .distances()
        .iter()
        .filter(|d| d.is_finite())
        .sum();

    println!(
        "--- {} Benchmark Results ({} vertices, {} edges) ---",
        name,
        graph.num_vertices(),
        graph.num_edges()
    );
    println!("Negative cycle: {}", relaxation.negative_cycle().is_some());
    println!("Reachable: {}", reachable);
    println!("Checksum: {:.6}", black_box(checksum));
    println!("Phases: {}", relaxation.phases());
    println!("Relaxations: {}", relaxation.relaxations());
    println!("Elapsed Time: {:?}", elapsed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sssp_core::{BellmanFordSolver, MooreSolver};

    #[test]
    fn benchmark_graph_has_no_negative_cycle_and_solvers_agree() {
        let graph = generate_benchmark_graph(200, 4, 1).unwrap();

        let (moore, _) = time_solver(&MooreSolver, &graph).unwrap();
        let (reference, _) = time_solver(&BellmanFordSolver, &graph).unwrap();

        assert!(moore.negative_cycle().is_none());
        assert!(moore.distances().iter().all(|d| d.is_finite()));
        for (a, b) in moore.distances().iter().zip(reference.distances()) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
    }
}
