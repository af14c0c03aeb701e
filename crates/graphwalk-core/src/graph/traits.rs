use std::fmt::Debug;
use std::hash::Hash;

use crate::GraphResult;

/// Read-only adjacency capability every traversal and search is written against
///
/// Implemented by [`AdjacencyList`](super::AdjacencyList) for arbitrary hashable
/// ids and by [`DenseGraph`](super::DenseGraph) for `0..n` integer ids.
#[cfg_attr(test, mockall::automock(type Node = u32;))]
pub trait Neighbors {
    /// Node identifier type
    type Node: Clone + Eq + Hash + Debug;

    /// Ordered neighbors of `node`
    ///
    /// Fails with [`GraphError::UnknownNode`](crate::GraphError::UnknownNode)
    /// when `node` is not part of the graph. A node without edges yields an
    /// empty list instead.
    fn neighbors(&self, node: &Self::Node) -> GraphResult<Vec<Self::Node>>;

    /// Check if `node` is part of the graph
    fn contains(&self, node: &Self::Node) -> bool;
}
