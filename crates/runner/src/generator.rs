use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::GeneratorConfig;
use super::error::Error;
use sssp_common::types::Edge;
use sssp_core::Graph;

/// Produces reproducible random graphs for exercising the solver.
///
/// Endpoints are uniform over all vertices (self-loops and parallel edges
/// included) and weights are uniform in `[min_weight, max_weight)`. The same
/// seed always yields the same edge list in the same order.
pub struct RandomGraphGenerator {
    config: GeneratorConfig,
}

impl RandomGraphGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        RandomGraphGenerator { config }
    }

    pub fn edges(&self) -> Result<Vec<Edge>, Error> {
        let GeneratorConfig {
            vertices,
            edges,
            min_weight,
            max_weight,
            seed,
        } = self.config;

        if vertices == 0 {
            return Err(Error::InvalidGenerator(
                "vertex count must be at least 1".to_string(),
            ));
        }
        if !min_weight.is_finite() || !max_weight.is_finite() || min_weight >= max_weight {
            return Err(Error::InvalidGenerator(format!(
                "weight range [{}, {}) is empty or not finite",
                min_weight, max_weight
            )));
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let vertex_range = 0..vertices;
        let weight_range = min_weight..max_weight;

        Ok((0..edges)
            .map(|_| {
                let from = rng.random_range(vertex_range.clone());
                let to = rng.random_range(vertex_range.clone());
                let weight = rng.random_range(weight_range.clone());
                Edge::new(from, to, weight)
            })
            .collect())
    }

    pub fn generate(&self) -> Result<Graph, Error> {
        let edges = self.edges()?;
        info!(
            vertices = self.config.vertices,
            edges = edges.len(),
            seed = self.config.seed,
            "generated random graph"
        );
        Ok(Graph::from_edges(self.config.vertices, edges)?)
    }
}
