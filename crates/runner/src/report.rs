use std::fmt::Write;

use super::error::Error;
use sssp_common::error::Error as SsspError;
use sssp_core::{ShortestPathSolver, ShortestPaths};

/// Renders either the negative cycle or one line per vertex, followed by the
/// optimality check verdict.
pub fn render<S: ShortestPathSolver>(sp: &ShortestPaths<'_, S>) -> Result<String, Error> {
    let mut out = String::new();

    if let Some(cycle) = sp.negative_cycle()? {
        writeln!(out, "negative cycle detected:")?;
        writeln!(out, "{}", cycle)?;
        return Ok(out);
    }

    let source = sp.source();
    for v in 0..sp.graph().num_vertices() {
        match sp.path_to(v) {
            Ok(path) => {
                write!(out, "{} to {} ({:.2}):", source, v, sp.distance_to(v)?)?;
                for edge in &path {
                    write!(out, " {} ", edge)?;
                }
                writeln!(out)?;
            }
            Err(SsspError::NoPath(_)) => writeln!(out, "{} to {}: no path", source, v)?,
            Err(e) => return Err(e.into()),
        }
    }

    match sp.check() {
        Ok(()) => writeln!(out, "optimality check: passed")?,
        Err(e) => writeln!(out, "{}", e)?,
    }

    Ok(out)
}
