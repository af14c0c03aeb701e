use serde::{Deserialize, Serialize};

use super::edge::{Edge, EdgeDirection};
use super::traits::Neighbors;
use crate::{GraphError, GraphResult};

/// Vector backed adjacency for dense integer ids `0..node_count`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DenseGraph {
    adjacency: Vec<Vec<usize>>,
}

impl DenseGraph {
    /// Wrap an adjacency table where entry `i` lists the neighbors of node `i`
    pub fn new(adjacency: Vec<Vec<usize>>) -> Self {
        Self { adjacency }
    }

    /// Build a graph with `node_count` nodes from an edge list
    ///
    /// Fails with `UnknownNode` if an edge references an id `>= node_count`.
    pub fn from_edges<I>(node_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Edge<usize>>,
    {
        let mut adjacency = vec![Vec::new(); node_count];

        for edge in edges {
            for endpoint in [edge.source, edge.target] {
                if endpoint >= node_count {
                    return Err(GraphError::unknown_node(&endpoint));
                }
            }

            adjacency[edge.source].push(edge.target);
            if edge.direction == EdgeDirection::Bidirectional {
                adjacency[edge.target].push(edge.source);
            }
        }

        Ok(Self { adjacency })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn validate(&self) -> GraphResult<()> {
        for (node, neighbors) in self.adjacency.iter().enumerate() {
            if let Some(missing) = neighbors.iter().find(|&&n| n >= self.adjacency.len()) {
                return Err(GraphError::DanglingNeighbor {
                    node: node.to_string(),
                    neighbor: missing.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Neighbors for DenseGraph {
    type Node = usize;

    fn neighbors(&self, node: &usize) -> GraphResult<Vec<usize>> {
        self.adjacency
            .get(*node)
            .cloned()
            .ok_or_else(|| GraphError::unknown_node(node))
    }

    fn contains(&self, node: &usize) -> bool {
        *node < self.adjacency.len()
    }
}
