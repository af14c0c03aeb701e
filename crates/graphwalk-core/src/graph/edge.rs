use serde::{Deserialize, Serialize};

/// Direction of an edge in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// A -> B (source points to target, one-way relationship)
    Directed,
    /// A <-> B (each endpoint lists the other as a neighbor)
    Bidirectional,
}

/// An unweighted edge between two nodes, used to build adjacency
///
/// Generic over the node identifier `N` so the same edge list can feed
/// an [`AdjacencyList`](super::AdjacencyList) keyed by integers, strings, etc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Source node identifier
    pub source: N,
    /// Target node identifier
    pub target: N,
    /// Direction of the edge
    pub direction: EdgeDirection,
}

impl<N> Edge<N> {
    /// Create a new edge
    pub fn new(source: N, target: N, direction: EdgeDirection) -> Self {
        Self {
            source,
            target,
            direction,
        }
    }

    /// Create a one-way edge `source -> target`
    pub fn directed(source: N, target: N) -> Self {
        Self::new(source, target, EdgeDirection::Directed)
    }

    /// Create a two-way edge `source <-> target`
    pub fn bidirectional(source: N, target: N) -> Self {
        Self::new(source, target, EdgeDirection::Bidirectional)
    }
}
