use std::cell::OnceCell;

use sssp_common::error::{Error, Result};
use sssp_common::numeric::{approx_eq, improves};
use sssp_common::types::{Cycle, Edge, Vertex};
use tracing::{debug, error};

use super::graph::Graph;
use super::relaxation::Relaxation;
use super::solver::MooreSolver;
use super::traits::ShortestPathSolver;

/// Outcome of a finished computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoCycle,
    NegativeCycle,
}

/// Lifecycle of a `ShortestPaths` instance. Moves from `NotComputed` to
/// `Done` exactly once and stays there. `Failed` is equally terminal: the
/// solver hit an internal consistency error and every query repeats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationState {
    NotComputed,
    Done(Outcome),
    Failed,
}

/// Single-source shortest paths from a fixed source over an immutable graph.
///
/// Nothing is computed at construction. The first query runs the solver, the
/// result (or the solver's error) is cached, and every later query reads it. When a
/// negative cycle is reachable from the source, distance and path queries fail
/// with `Error::UndefinedDistance` and the cycle is available from
/// `negative_cycle`.
#[derive(Debug)]
pub struct ShortestPaths<'g, S = MooreSolver> {
    graph: &'g Graph,
    source: Vertex,
    solver: S,
    solution: OnceCell<Result<Relaxation>>,
}

impl<'g> ShortestPaths<'g, MooreSolver> {
    /// Shortest paths from `source` using Moore's algorithm.
    ///
    /// # Errors
    /// Returns `Error::VertexOutOfBounds` if `source` is not a vertex of `graph`.
    pub fn new(graph: &'g Graph, source: Vertex) -> Result<Self> {
        Self::with_solver(graph, source, MooreSolver)
    }
}

impl<'g, S: ShortestPathSolver> ShortestPaths<'g, S> {
    pub fn with_solver(graph: &'g Graph, source: Vertex, solver: S) -> Result<Self> {
        graph.check_vertex(source)?;
        Ok(Self {
            graph,
            source,
            solver,
            solution: OnceCell::new(),
        })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Current state, without triggering the computation.
    pub fn state(&self) -> ComputationState {
        match self.solution.get() {
            None => ComputationState::NotComputed,
            Some(Ok(solution)) => ComputationState::Done(Self::outcome_of(solution)),
            Some(Err(_)) => ComputationState::Failed,
        }
    }

    /// Runs the solver if it has not run yet. Repeated calls are no-ops that
    /// return the cached state, or the cached error after a failed run.
    pub fn compute(&self) -> Result<ComputationState> {
        let solution = self.solution()?;
        Ok(ComputationState::Done(Self::outcome_of(solution)))
    }

    /// Read-only access to the cached solver output.
    pub fn relaxation(&self) -> Result<&Relaxation> {
        self.solution()
    }

    pub fn has_negative_cycle(&self) -> Result<bool> {
        Ok(self.solution()?.negative_cycle.is_some())
    }

    /// The negative cycle reachable from the source, if there is one.
    pub fn negative_cycle(&self) -> Result<Option<&Cycle>> {
        Ok(self.solution()?.negative_cycle.as_ref())
    }

    /// Shortest-path distance to `v`, or `f64::INFINITY` when `v` is unreachable.
    ///
    /// # Errors
    /// - `Error::UndefinedDistance` if a negative cycle is reachable from the source.
    /// - `Error::VertexOutOfBounds` if `v` is not a vertex of the graph.
    pub fn distance_to(&self, v: Vertex) -> Result<f64> {
        let solution = self.valid_solution(v)?;
        Ok(solution.dist[v])
    }

    pub fn has_path_to(&self, v: Vertex) -> Result<bool> {
        Ok(self.distance_to(v)? < f64::INFINITY)
    }

    /// Edges of a shortest path from the source to `v`, in travel order.
    /// The path to the source itself is empty.
    ///
    /// # Errors
    /// - `Error::UndefinedDistance` if a negative cycle is reachable from the source.
    /// - `Error::NoPath` if `v` is unreachable.
    /// - `Error::VertexOutOfBounds` if `v` is not a vertex of the graph.
    pub fn path_to(&self, v: Vertex) -> Result<Vec<Edge>> {
        let solution = self.valid_solution(v)?;
        if solution.dist[v] == f64::INFINITY {
            return Err(Error::NoPath(v));
        }

        let mut path = Vec::new();
        let mut current = v;
        while let Some(edge_idx) = solution.edge_to[current] {
            if path.len() >= self.graph.num_vertices() {
                return Err(Error::InternalConsistency(format!(
                    "predecessor chain to vertex {} does not reach the source",
                    v
                )));
            }
            let edge = self.graph.edge(edge_idx)?;
            path.push(edge);
            current = edge.from;
        }
        path.reverse();

        Ok(path)
    }

    /// Verifies the cached result against the shortest-path optimality
    /// conditions.
    ///
    /// Without a negative cycle: the source has distance 0 and no predecessor,
    /// no edge can still be relaxed, and every predecessor edge is tight. With
    /// a negative cycle: the cycle is closed and its weight is negative.
    ///
    /// # Errors
    /// Returns `Error::OptimalityViolation` describing the first failed condition.
    pub fn check(&self) -> Result<()> {
        let solution = self.solution()?;

        if let Some(cycle) = &solution.negative_cycle {
            if !cycle.is_closed() {
                return Err(Error::OptimalityViolation(
                    "negative cycle is not a closed walk".to_string(),
                ));
            }
            if cycle.total_weight() >= 0.0 {
                return Err(Error::OptimalityViolation(format!(
                    "negative cycle has weight {}",
                    cycle.total_weight()
                )));
            }
            return Ok(());
        }

        let dist = &solution.dist;
        if dist[self.source] != 0.0 || solution.edge_to[self.source].is_some() {
            return Err(Error::OptimalityViolation(format!(
                "source {} has distance {} or a predecessor",
                self.source, dist[self.source]
            )));
        }

        for v in 0..self.graph.num_vertices() {
            if v != self.source && dist[v] == f64::INFINITY && solution.edge_to[v].is_some() {
                return Err(Error::OptimalityViolation(format!(
                    "unreachable vertex {} has a predecessor",
                    v
                )));
            }
        }

        for edge in self.graph.edges() {
            if improves(dist[edge.from] + edge.weight, dist[edge.to]) {
                return Err(Error::OptimalityViolation(format!(
                    "edge {} can still be relaxed",
                    edge
                )));
            }
        }

        for (v, edge_idx) in solution.edge_to.iter().enumerate() {
            let Some(edge_idx) = *edge_idx else {
                continue;
            };
            let edge = self.graph.edge(edge_idx)?;
            if edge.to != v || !approx_eq(dist[edge.from] + edge.weight, dist[v]) {
                return Err(Error::OptimalityViolation(format!(
                    "predecessor edge {} of vertex {} is not tight",
                    edge, v
                )));
            }
        }

        Ok(())
    }

    fn solution(&self) -> Result<&Relaxation> {
        let cached = self.solution.get_or_init(|| {
            debug!(source = self.source, "computing shortest paths");
            let result = self.solver.solve(self.graph, self.source);
            if let Err(e) = &result {
                error!(source = self.source, "shortest path computation failed: {}", e);
            }
            result
        });
        cached.as_ref().map_err(|e| e.clone())
    }

    /// Cached solution, provided `v` is valid and distances are defined.
    fn valid_solution(&self, v: Vertex) -> Result<&Relaxation> {
        self.graph.check_vertex(v)?;
        let solution = self.solution()?;
        if solution.negative_cycle.is_some() {
            return Err(Error::UndefinedDistance);
        }
        Ok(solution)
    }

    fn outcome_of(solution: &Relaxation) -> Outcome {
        if solution.negative_cycle.is_some() {
            Outcome::NegativeCycle
        } else {
            Outcome::NoCycle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bellman_ford::BellmanFordSolver;
    use std::cell::Cell;

    /// Counts how many times the wrapped solver runs.
    struct CountingSolver<'a> {
        runs: &'a Cell<usize>,
    }

    impl ShortestPathSolver for CountingSolver<'_> {
        fn solve(&self, graph: &Graph, source: usize) -> Result<Relaxation> {
            self.runs.set(self.runs.get() + 1);
            MooreSolver.solve(graph, source)
        }
    }

    /// Counts its runs and always fails.
    struct FailingSolver<'a> {
        runs: &'a Cell<usize>,
    }

    impl ShortestPathSolver for FailingSolver<'_> {
        fn solve(&self, _graph: &Graph, _source: usize) -> Result<Relaxation> {
            self.runs.set(self.runs.get() + 1);
            Err(Error::InternalConsistency("predecessor walk diverged".to_string()))
        }
    }

    fn diamond() -> Graph {
        Graph::from_edges(4, [(0, 1, 5.0), (0, 2, 2.0), (2, 1, 1.0), (1, 3, 4.0)]).unwrap()
    }

    fn triangle() -> Graph {
        Graph::from_edges(3, [(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]).unwrap()
    }

    #[test]
    fn diamond_distances_and_path() {
        let graph = diamond();
        let sp = ShortestPaths::new(&graph, 0).unwrap();

        assert!(!sp.has_negative_cycle().unwrap());
        assert!(sp.negative_cycle().unwrap().is_none());

        let dist: Vec<f64> = (0..4).map(|v| sp.distance_to(v).unwrap()).collect();
        assert_eq!(dist, vec![0.0, 3.0, 2.0, 7.0]);

        assert_eq!(
            sp.path_to(3).unwrap(),
            vec![
                Edge::new(0, 2, 2.0),
                Edge::new(2, 1, 1.0),
                Edge::new(1, 3, 4.0)
            ]
        );
        assert!(sp.path_to(0).unwrap().is_empty());
        assert!(sp.check().is_ok());
    }

    #[test]
    fn triangle_cycle_makes_distances_undefined() {
        let graph = triangle();
        let sp = ShortestPaths::new(&graph, 0).unwrap();

        assert!(sp.has_negative_cycle().unwrap());

        let cycle = sp.negative_cycle().unwrap().expect("cycle expected");
        assert_eq!(cycle.total_weight(), -1.0);
        for edge in graph.edges() {
            assert!(cycle.edges().contains(edge));
        }

        assert_eq!(sp.distance_to(1), Err(Error::UndefinedDistance));
        assert_eq!(sp.path_to(2), Err(Error::UndefinedDistance));
        assert_eq!(sp.has_path_to(0), Err(Error::UndefinedDistance));
        assert!(sp.check().is_ok());
    }

    #[test]
    fn unreachable_vertex_has_infinite_distance_and_no_path() {
        let graph = Graph::from_edges(3, [(0, 1, 1.0), (2, 1, -1.0)]).unwrap();
        let sp = ShortestPaths::new(&graph, 0).unwrap();

        assert_eq!(sp.distance_to(2).unwrap(), f64::INFINITY);
        assert!(!sp.has_path_to(2).unwrap());
        assert!(sp.has_path_to(1).unwrap());
        assert_eq!(sp.path_to(2), Err(Error::NoPath(2)));
    }

    #[test]
    fn source_without_edges() {
        let graph = Graph::from_edges(3, [(1, 2, 1.0)]).unwrap();
        let sp = ShortestPaths::new(&graph, 0).unwrap();

        assert_eq!(sp.distance_to(0).unwrap(), 0.0);
        assert_eq!(sp.distance_to(1).unwrap(), f64::INFINITY);
        assert_eq!(sp.distance_to(2).unwrap(), f64::INFINITY);
        assert!(
            sp.relaxation()
                .unwrap()
                .edge_to()
                .iter()
                .all(Option::is_none)
        );
    }

    #[test]
    fn reachable_negative_self_loop_is_the_whole_cycle() {
        let graph = Graph::from_edges(3, [(0, 1, 2.0), (1, 1, -0.5), (1, 2, 1.0)]).unwrap();
        let sp = ShortestPaths::new(&graph, 0).unwrap();

        let cycle = sp.negative_cycle().unwrap().expect("cycle expected");
        assert_eq!(cycle.edges(), &[Edge::new(1, 1, -0.5)]);
    }

    #[test]
    fn state_moves_to_done_once() {
        let graph = triangle();
        let runs = Cell::new(0);
        let sp = ShortestPaths::with_solver(&graph, 0, CountingSolver { runs: &runs }).unwrap();

        assert_eq!(sp.state(), ComputationState::NotComputed);
        assert_eq!(runs.get(), 0);

        assert_eq!(
            sp.compute().unwrap(),
            ComputationState::Done(Outcome::NegativeCycle)
        );
        assert_eq!(
            sp.compute().unwrap(),
            ComputationState::Done(Outcome::NegativeCycle)
        );
        let _ = sp.has_negative_cycle();
        let _ = sp.distance_to(0);
        let _ = sp.negative_cycle();

        assert_eq!(runs.get(), 1);
        assert_eq!(sp.state(), ComputationState::Done(Outcome::NegativeCycle));
    }

    #[test]
    fn queries_are_idempotent() {
        let graph = diamond();
        let sp = ShortestPaths::new(&graph, 0).unwrap();

        let first = sp.distance_to(3).unwrap();
        let second = sp.distance_to(3).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(sp.path_to(1).unwrap(), sp.path_to(1).unwrap());
        assert_eq!(sp.state(), ComputationState::Done(Outcome::NoCycle));

        let cyclic = triangle();
        let sp = ShortestPaths::new(&cyclic, 0).unwrap();
        let a = sp.negative_cycle().unwrap().cloned();
        let b = sp.negative_cycle().unwrap().cloned();
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let graph = diamond();

        assert!(matches!(
            ShortestPaths::new(&graph, 4),
            Err(Error::VertexOutOfBounds { vertex: 4, .. })
        ));

        let sp = ShortestPaths::new(&graph, 0).unwrap();
        assert!(matches!(
            sp.distance_to(9),
            Err(Error::VertexOutOfBounds { vertex: 9, .. })
        ));
        assert!(sp.path_to(9).is_err());
    }

    #[test]
    fn reference_solver_behind_the_same_facade() {
        let graph = diamond();
        let sp = ShortestPaths::with_solver(&graph, 0, BellmanFordSolver).unwrap();

        assert_eq!(sp.distance_to(3).unwrap(), 7.0);
        assert_eq!(sp.path_to(3).unwrap().len(), 3);
        assert!(sp.check().is_ok());
    }

    #[test]
    fn negative_edges_without_cycle() {
        let graph = Graph::from_edges(
            4,
            [(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0), (1, 3, 2.0), (3, 2, 1.0)],
        )
        .unwrap();
        let sp = ShortestPaths::new(&graph, 0).unwrap();

        assert!(!sp.has_negative_cycle().unwrap());
        assert_eq!(sp.distance_to(1).unwrap(), 2.0);
        assert_eq!(sp.distance_to(3).unwrap(), 4.0);
        assert!(sp.check().is_ok());
    }

    #[test]
    fn failed_computation_is_cached() {
        let graph = diamond();
        let runs = Cell::new(0);
        let sp = ShortestPaths::with_solver(&graph, 0, FailingSolver { runs: &runs }).unwrap();

        let expected = Error::InternalConsistency("predecessor walk diverged".to_string());
        assert_eq!(sp.has_negative_cycle(), Err(expected.clone()));
        assert_eq!(sp.distance_to(1), Err(expected.clone()));
        assert_eq!(sp.path_to(3), Err(expected.clone()));
        assert_eq!(sp.compute(), Err(expected.clone()));
        assert_eq!(sp.check(), Err(expected));

        assert_eq!(runs.get(), 1);
        assert_eq!(sp.state(), ComputationState::Failed);
    }

    #[test]
    fn zero_weight_cycle_keeps_distances_defined() {
        let graph = Graph::from_edges(
            5,
            [
                (3, 0, 0.19999999999999996),
                (1, 2, -3.3),
                (0, 1, -2.1),
                (2, 3, 5.2),
            ],
        )
        .unwrap();
        let runs = Cell::new(0);
        let sp = ShortestPaths::with_solver(&graph, 0, CountingSolver { runs: &runs }).unwrap();

        assert!(!sp.has_negative_cycle().unwrap());
        assert!((sp.distance_to(1).unwrap() + 2.1).abs() < 1e-12);
        assert_eq!(
            sp.path_to(3).unwrap(),
            vec![
                Edge::new(0, 1, -2.1),
                Edge::new(1, 2, -3.3),
                Edge::new(2, 3, 5.2)
            ]
        );
        assert!(!sp.has_path_to(4).unwrap());
        assert!(sp.check().is_ok());

        assert_eq!(runs.get(), 1);
        assert_eq!(sp.state(), ComputationState::Done(Outcome::NoCycle));

        let reference = ShortestPaths::with_solver(&graph, 0, BellmanFordSolver).unwrap();
        assert!(!reference.has_negative_cycle().unwrap());
        assert!(reference.check().is_ok());
    }
}
