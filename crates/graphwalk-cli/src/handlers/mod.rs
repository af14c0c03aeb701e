pub mod search;
pub mod traverse;

use graphwalk_core::{AdjacencyList, TraversalEngine};

/// Engine over a graph loaded from a document; node ids are strings
pub type DocumentEngine<'g> = TraversalEngine<'g, AdjacencyList<String>>;
