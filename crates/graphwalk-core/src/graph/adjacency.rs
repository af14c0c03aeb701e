use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::edge::{Edge, EdgeDirection};
use super::traits::Neighbors;
use crate::{GraphError, GraphResult};

/// Hash-map backed adjacency list
///
/// Maps each node to its ordered neighbor list. Serializes as a plain map,
/// e.g. `{"1": [2, 5], "6": []}`. Constructed once by the caller; queries
/// only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList<N: Eq + Hash> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Eq + Hash> Default for AdjacencyList<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<N> AdjacencyList<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with its ordered neighbor list, replacing any previous entry
    pub fn with_node(mut self, node: N, neighbors: impl IntoIterator<Item = N>) -> Self {
        self.adjacency.insert(node, neighbors.into_iter().collect());
        self
    }

    /// Give every node in `nodes` an entry, keeping neighbors already listed
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        for node in nodes {
            self.adjacency.entry(node).or_default();
        }
        self
    }

    /// Build adjacency from an edge list
    ///
    /// Neighbor order follows edge order. Both endpoints of every edge get an
    /// entry, so the result never holds a dangling neighbor. Duplicate edges
    /// are kept as parallel adjacency entries.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<N>>,
    {
        let mut adjacency: HashMap<N, Vec<N>> = HashMap::new();

        for edge in edges {
            adjacency
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());

            match edge.direction {
                EdgeDirection::Bidirectional => {
                    adjacency.entry(edge.target).or_default().push(edge.source);
                }
                EdgeDirection::Directed => {
                    adjacency.entry(edge.target).or_default();
                }
            }
        }

        Self { adjacency }
    }

    /// Get the ordered neighbor list of a node, if the node exists
    pub fn get(&self, node: &N) -> Option<&[N]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Iterate over all nodes (unspecified order)
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Count of adjacency entries (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Check that every listed neighbor is itself a node of the graph
    pub fn validate(&self) -> GraphResult<()> {
        for (node, neighbors) in &self.adjacency {
            if let Some(missing) = neighbors.iter().find(|n| !self.adjacency.contains_key(*n)) {
                return Err(GraphError::DanglingNeighbor {
                    node: format!("{:?}", node),
                    neighbor: format!("{:?}", missing),
                });
            }
        }
        Ok(())
    }
}

impl<N> Neighbors for AdjacencyList<N>
where
    N: Clone + Eq + Hash + Debug,
{
    type Node = N;

    fn neighbors(&self, node: &N) -> GraphResult<Vec<N>> {
        self.adjacency
            .get(node)
            .cloned()
            .ok_or_else(|| GraphError::unknown_node(node))
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}

impl<N: Eq + Hash> From<HashMap<N, Vec<N>>> for AdjacencyList<N> {
    fn from(adjacency: HashMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for AdjacencyList<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> AdjacencyList<u32> {
        AdjacencyList::new()
            .with_node(1, [2, 5])
            .with_node(2, [1, 3, 5])
            .with_node(3, [2, 4])
            .with_node(4, [3, 5])
            .with_node(5, [1, 2, 4])
            .with_node(6, [])
    }

    #[test]
    fn test_graph_creation() {
        let graph: AdjacencyList<u32> = AdjacencyList::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_neighbors_keep_order() {
        let graph = fixture();
        assert_eq!(graph.neighbors(&2).unwrap(), vec![1, 3, 5]);
        assert_eq!(graph.neighbors(&5).unwrap(), vec![1, 2, 4]);
    }

    #[test]
    fn test_isolated_node_has_no_neighbors() {
        let graph = fixture();
        assert!(graph.contains(&6));
        assert!(graph.neighbors(&6).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_node_fails() {
        let graph = fixture();
        let err = graph.neighbors(&7).unwrap_err();
        assert!(err.is_unknown_node());
        assert!(!graph.contains(&7));
    }

    #[test]
    fn test_counts() {
        let graph = fixture();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 12);
    }

    #[test]
    fn test_from_edges_directed() {
        let graph = AdjacencyList::from_edges([Edge::directed("a", "b"), Edge::directed("a", "c")]);

        assert_eq!(graph.neighbors(&"a").unwrap(), vec!["b", "c"]);
        assert!(graph.neighbors(&"b").unwrap().is_empty());
        assert!(graph.contains(&"c"));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_from_edges_bidirectional() {
        let graph = AdjacencyList::from_edges([Edge::bidirectional(1, 2), Edge::bidirectional(2, 3)]);

        assert_eq!(graph.neighbors(&1).unwrap(), vec![2]);
        assert_eq!(graph.neighbors(&2).unwrap(), vec![1, 3]);
        assert_eq!(graph.neighbors(&3).unwrap(), vec![2]);
    }

    #[test]
    fn test_from_edges_keeps_parallel_edges() {
        let graph = AdjacencyList::from_edges([Edge::directed(1, 2), Edge::directed(1, 2)]);
        assert_eq!(graph.neighbors(&1).unwrap(), vec![2, 2]);
    }

    #[test]
    fn test_with_nodes_adds_isolated_nodes_only() {
        let graph = AdjacencyList::from_edges([Edge::directed(1, 2)]).with_nodes([1, 6]);

        assert_eq!(graph.neighbors(&1).unwrap(), vec![2]);
        assert!(graph.neighbors(&6).unwrap().is_empty());
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_validate_reports_dangling_neighbor() {
        let graph = AdjacencyList::new().with_node(1, [2]);

        match graph.validate() {
            Err(GraphError::DanglingNeighbor { node, neighbor }) => {
                assert_eq!(node, "1");
                assert_eq!(neighbor, "2");
            }
            other => panic!("expected dangling neighbor, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_from_json_map() {
        let graph: AdjacencyList<u32> =
            serde_json::from_str(r#"{"1": [2, 5], "2": [1], "5": [1]}"#).unwrap();

        assert_eq!(graph.get(&1), Some(&[2, 5][..]));
        assert!(graph.validate().is_ok());
    }
}
