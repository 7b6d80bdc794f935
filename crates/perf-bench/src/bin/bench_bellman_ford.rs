use perf_bench::*;
use sssp_common::error::Error;
use sssp_core::BellmanFordSolver;

fn main() -> Result<(), Error> {
    let graph = generate_benchmark_graph(NUM_VERTICES, EDGES_PER_VERTEX, SEED)?;

    let (relaxation, elapsed) = time_solver(&BellmanFordSolver, &graph)?;

    print_results("Bellman-Ford", &graph, &relaxation, elapsed);
    Ok(())
}
