use thiserror::Error;

use sssp_common::error::Error as SsspError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] SsspError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Report formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Invalid generator settings: {0}")]
    InvalidGenerator(String),
}
