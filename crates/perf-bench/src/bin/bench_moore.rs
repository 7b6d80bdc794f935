use perf_bench::*;
use sssp_common::error::Error;
use sssp_core::MooreSolver;

fn main() -> Result<(), Error> {
    let graph = generate_benchmark_graph(NUM_VERTICES, EDGES_PER_VERTEX, SEED)?;

    let (relaxation, elapsed) = time_solver(&MooreSolver, &graph)?;

    print_results("Moore", &graph, &relaxation, elapsed);
    Ok(())
}
