pub mod error;
pub mod numeric;
pub mod types;

pub use error::{Error, Result};
pub use types::{Cycle, Edge, Vertex};
