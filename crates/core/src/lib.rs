//! Single-source shortest paths over directed graphs with negative weights.
//!
//! The default engine is Moore's queue-based relaxation with a phase bound:
//! an improvement in the `V`-th phase proves a negative cycle reachable from
//! the source, which is then extracted from the predecessor structure.
//! [`ShortestPaths`] runs it lazily and answers distance, path and cycle
//! queries from the cached result.

pub mod bellman_ford;
pub mod cycle;
pub mod graph;
pub mod relaxation;
pub mod solver;
pub mod sssp;
pub mod traits;

pub use bellman_ford::BellmanFordSolver;
pub use graph::Graph;
pub use relaxation::Relaxation;
pub use solver::MooreSolver;
pub use sssp::{ComputationState, Outcome, ShortestPaths};
pub use traits::ShortestPathSolver;
