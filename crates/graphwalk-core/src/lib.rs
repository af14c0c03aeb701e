pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod result;

pub use config::EngineConfig;
pub use engine::TraversalEngine;
pub use error::GraphError;
pub use graph::{AdjacencyList, DenseGraph, Edge, EdgeDirection, Neighbors, Path};
pub use result::GraphResult;
