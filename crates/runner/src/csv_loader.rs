use csv::ReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::error::Error;
use sssp_common::types::Edge;
use sssp_core::Graph;

/// Reads a headered `from,to,weight` edge list into a graph.
pub struct CsvLoader {
    path: PathBuf,
    num_vertices: Option<usize>,
}

impl CsvLoader {
    /// `num_vertices` overrides the vertex count; otherwise it is one past
    /// the largest endpoint in the file.
    pub fn new(path: impl AsRef<Path>, num_vertices: Option<usize>) -> Self {
        CsvLoader {
            path: path.as_ref().to_path_buf(),
            num_vertices,
        }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), "failed to open edge list: {}", e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            // Header names match the `Edge` fields.
            let edge: Edge = result?;
            edges.push(edge);
        }
        Ok(edges)
    }

    pub fn load(&self) -> Result<Graph, Error> {
        let edges = self.parse_csv_to_edges()?;

        let inferred = edges
            .iter()
            .flat_map(|e| [e.from, e.to])
            .max()
            .map_or(1, |max_id| max_id + 1);
        let num_vertices = self.num_vertices.unwrap_or(inferred);

        info!(
            path = %self.path.display(),
            num_vertices,
            num_edges = edges.len(),
            "loaded edge list"
        );

        Ok(Graph::from_edges(num_vertices, edges)?)
    }
}
