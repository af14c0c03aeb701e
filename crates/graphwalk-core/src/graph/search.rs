use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::frontier::{require_node, Discipline, Frontier, Visited};
use super::traits::Neighbors;
use crate::GraphResult;

/// How shortest paths are materialized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStrategy {
    /// Node-level BFS recording each node's predecessor, path rebuilt by
    /// backtracking from the end node
    #[default]
    Predecessor,
    /// BFS over whole partial paths, each extension copying its parent path
    PathCopy,
}

/// Progress of a breadth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Frontier still holds nodes to expand
    Pending,
    /// The end node was dequeued
    Found,
    /// The frontier emptied without reaching the end node
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Pending)
    }
}

/// A walk from a search's start node to its end node
///
/// Never empty; the first node is always the start node and every
/// consecutive pair is an adjacency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    fn single(node: N) -> Self {
        Self { nodes: vec![node] }
    }

    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    pub fn end(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes on the path, endpoints included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges on the path (degrees of separation)
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N: Clone> Path<N> {
    fn extended(&self, node: N) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        Self { nodes }
    }
}

/// Breadth-first search from `start` toward `end`, one dequeue per step
///
/// Starts [`Pending`](SearchState::Pending) with the frontier seeded by
/// `start` and moves to `Found` or `Exhausted`; both are terminal and further
/// steps leave the state unchanged. Predecessors are recorded as nodes are
/// discovered so the path can be rebuilt once the end node is found.
pub struct BreadthFirstSearch<'g, G: Neighbors> {
    graph: &'g G,
    start: G::Node,
    end: G::Node,
    frontier: Frontier<G::Node>,
    visited: Visited<G::Node>,
    predecessors: HashMap<G::Node, G::Node>,
    state: SearchState,
}

impl<'g, G: Neighbors> BreadthFirstSearch<'g, G> {
    /// Prepare a search; fails with `UnknownNode` if either endpoint is missing
    pub fn new(graph: &'g G, start: &G::Node, end: &G::Node) -> GraphResult<Self> {
        require_node(graph, start)?;
        require_node(graph, end)?;

        Ok(Self {
            graph,
            start: start.clone(),
            end: end.clone(),
            frontier: Frontier::seeded(start.clone(), Discipline::Fifo),
            visited: Visited::starting_at(start),
            predecessors: HashMap::new(),
            state: SearchState::Pending,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Dequeue and expand one node
    pub fn step(&mut self) -> GraphResult<SearchState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        match self.frontier.pop() {
            None => self.state = SearchState::Exhausted,
            Some(node) if node == self.end => self.state = SearchState::Found,
            Some(node) => {
                for neighbor in self.graph.neighbors(&node)? {
                    if self.visited.mark(&neighbor) {
                        self.predecessors.insert(neighbor.clone(), node.clone());
                        self.frontier.push(neighbor);
                    }
                }
            }
        }

        if self.state.is_terminal() {
            tracing::debug!(
                "Search {:?} -> {:?} finished as {:?} after discovering {} nodes",
                self.start,
                self.end,
                self.state,
                self.visited.len()
            );
        }

        Ok(self.state)
    }

    /// Step until the search reaches a terminal state
    pub fn run(&mut self) -> GraphResult<SearchState> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.state)
    }

    /// Rebuild the path to the end node; `None` unless the search is `Found`
    pub fn path(&self) -> Option<Path<G::Node>> {
        if self.state != SearchState::Found {
            return None;
        }

        let mut nodes = vec![self.end.clone()];
        let mut current = &self.end;
        while *current != self.start {
            current = self.predecessors.get(current)?;
            nodes.push(current.clone());
        }
        nodes.reverse();

        Some(Path { nodes })
    }
}

/// Check if `end` can be reached from `start` by following zero or more edges
pub fn reachable<G: Neighbors>(graph: &G, start: &G::Node, end: &G::Node) -> GraphResult<bool> {
    let mut search = BreadthFirstSearch::new(graph, start, end)?;
    Ok(search.run()? == SearchState::Found)
}

/// Find a shortest path (by edge count) from `start` to `end`
///
/// Returns `Ok(None)` when `end` is unreachable. Among several shortest paths
/// the one found first in adjacency order wins.
pub fn shortest_path<G: Neighbors>(
    graph: &G,
    start: &G::Node,
    end: &G::Node,
) -> GraphResult<Option<Path<G::Node>>> {
    shortest_path_with(graph, start, end, PathStrategy::default())
}

pub fn shortest_path_with<G: Neighbors>(
    graph: &G,
    start: &G::Node,
    end: &G::Node,
    strategy: PathStrategy,
) -> GraphResult<Option<Path<G::Node>>> {
    match strategy {
        PathStrategy::Predecessor => {
            let mut search = BreadthFirstSearch::new(graph, start, end)?;
            search.run()?;
            Ok(search.path())
        }
        PathStrategy::PathCopy => shortest_path_by_copy(graph, start, end),
    }
}

/// Degrees of separation between `start` and `end`, `None` if unreachable
pub fn distance<G: Neighbors>(
    graph: &G,
    start: &G::Node,
    end: &G::Node,
) -> GraphResult<Option<usize>> {
    distance_with(graph, start, end, PathStrategy::default())
}

pub fn distance_with<G: Neighbors>(
    graph: &G,
    start: &G::Node,
    end: &G::Node,
    strategy: PathStrategy,
) -> GraphResult<Option<usize>> {
    Ok(shortest_path_with(graph, start, end, strategy)?.map(|path| path.hops()))
}

fn shortest_path_by_copy<G: Neighbors>(
    graph: &G,
    start: &G::Node,
    end: &G::Node,
) -> GraphResult<Option<Path<G::Node>>> {
    require_node(graph, start)?;
    require_node(graph, end)?;

    let mut frontier = Frontier::seeded(Path::single(start.clone()), Discipline::Fifo);
    let mut visited = Visited::starting_at(start);

    while let Some(path) = frontier.pop() {
        if path.end() == end {
            tracing::debug!("Path copy search found {} hops", path.hops());
            return Ok(Some(path));
        }

        for neighbor in graph.neighbors(path.end())? {
            if visited.mark(&neighbor) {
                frontier.push(path.extended(neighbor));
            }
        }
    }

    tracing::debug!(
        "Path copy search {:?} -> {:?} exhausted after {} nodes",
        start,
        end,
        visited.len()
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traits::MockNeighbors;
    use crate::graph::{AdjacencyList, Edge};
    use mockall::predicate::eq;

    fn fixture() -> AdjacencyList<u32> {
        AdjacencyList::new()
            .with_node(1, [2, 5])
            .with_node(2, [1, 3, 5])
            .with_node(3, [2, 4])
            .with_node(4, [3, 5])
            .with_node(5, [1, 2, 4])
            .with_node(6, [])
    }

    const STRATEGIES: [PathStrategy; 2] = [PathStrategy::Predecessor, PathStrategy::PathCopy];

    #[test]
    fn test_reachable() {
        let graph = fixture();

        assert!(reachable(&graph, &1, &3).unwrap());
        assert!(reachable(&graph, &4, &1).unwrap());
        assert!(!reachable(&graph, &6, &1).unwrap());
        assert!(!reachable(&graph, &1, &6).unwrap());
    }

    #[test]
    fn test_reachable_self() {
        let graph = fixture();

        for node in 1..=6 {
            assert!(reachable(&graph, &node, &node).unwrap());
        }
    }

    #[test]
    fn test_shortest_path_examples() {
        let graph = fixture();

        for strategy in STRATEGIES {
            let path = shortest_path_with(&graph, &1, &3, strategy).unwrap().unwrap();
            assert_eq!(path.nodes(), &[1, 2, 3]);
            assert_eq!(path.node_count(), 3);

            let path = shortest_path_with(&graph, &4, &1, strategy).unwrap().unwrap();
            assert_eq!(path.nodes(), &[4, 5, 1]);
            assert_eq!(path.start(), &4);
            assert_eq!(path.end(), &1);
        }
    }

    #[test]
    fn test_no_path() {
        let graph = fixture();

        for strategy in STRATEGIES {
            assert!(shortest_path_with(&graph, &6, &1, strategy).unwrap().is_none());
            assert_eq!(distance_with(&graph, &6, &1, strategy).unwrap(), None);
        }
    }

    #[test]
    fn test_distance() {
        let graph = fixture();

        assert_eq!(distance(&graph, &1, &3).unwrap(), Some(2));
        assert_eq!(distance(&graph, &4, &1).unwrap(), Some(2));
        assert_eq!(distance(&graph, &1, &4).unwrap(), Some(2));
        assert_eq!(distance(&graph, &1, &2).unwrap(), Some(1));
        assert_eq!(distance(&graph, &3, &3).unwrap(), Some(0));
    }

    #[test]
    fn test_path_to_self_is_single_node() {
        let graph = fixture();

        for strategy in STRATEGIES {
            let path = shortest_path_with(&graph, &6, &6, strategy).unwrap().unwrap();
            assert_eq!(path.into_nodes(), vec![6]);
        }
    }

    #[test]
    fn test_directed_reachability_is_one_way() {
        let graph = AdjacencyList::from_edges([
            Edge::directed("a", "b"),
            Edge::directed("b", "c"),
        ]);

        assert!(reachable(&graph, &"a", &"c").unwrap());
        assert!(!reachable(&graph, &"c", &"a").unwrap());
        assert_eq!(distance(&graph, &"a", &"c").unwrap(), Some(2));
    }

    #[test]
    fn test_unknown_endpoints_fail() {
        let graph = fixture();

        assert!(reachable(&graph, &9, &1).unwrap_err().is_unknown_node());
        assert!(reachable(&graph, &1, &9).unwrap_err().is_unknown_node());
        assert!(reachable(&graph, &9, &9).unwrap_err().is_unknown_node());
        for strategy in STRATEGIES {
            assert!(shortest_path_with(&graph, &1, &9, strategy)
                .unwrap_err()
                .is_unknown_node());
        }
    }

    #[test]
    fn test_dangling_neighbor_surfaces_during_search() {
        let graph = AdjacencyList::new().with_node(1, [2]).with_node(3, []);

        assert!(reachable(&graph, &1, &3).unwrap_err().is_unknown_node());
    }

    #[test]
    fn test_state_machine_steps() {
        let graph = AdjacencyList::new()
            .with_node(1, [2])
            .with_node(2, [3])
            .with_node(3, []);
        let mut search = BreadthFirstSearch::new(&graph, &1, &3).unwrap();

        assert_eq!(search.state(), SearchState::Pending);
        assert_eq!(search.step().unwrap(), SearchState::Pending);
        assert!(search.path().is_none());
        assert_eq!(search.step().unwrap(), SearchState::Pending);
        assert_eq!(search.step().unwrap(), SearchState::Found);
        assert_eq!(search.step().unwrap(), SearchState::Found);
        assert_eq!(search.path().unwrap().nodes(), &[1, 2, 3]);
    }

    #[test]
    fn test_state_machine_exhausts() {
        let graph = AdjacencyList::new().with_node(1, [2]).with_node(2, []).with_node(3, []);
        let mut search = BreadthFirstSearch::new(&graph, &1, &3).unwrap();

        assert_eq!(search.run().unwrap(), SearchState::Exhausted);
        assert_eq!(search.step().unwrap(), SearchState::Exhausted);
        assert!(search.path().is_none());
    }

    #[test]
    fn test_same_endpoints_skip_expansion() {
        let mut graph = MockNeighbors::new();
        graph.expect_contains().with(eq(4)).returning(|_| true);
        graph.expect_neighbors().never();

        assert!(reachable(&graph, &4, &4).unwrap());
        assert_eq!(distance(&graph, &4, &4).unwrap(), Some(0));
    }

    #[test]
    fn test_search_stops_at_end() {
        let mut graph = MockNeighbors::new();
        graph.expect_contains().returning(|_| true);
        graph
            .expect_neighbors()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![2, 3]));
        graph
            .expect_neighbors()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(vec![4]));
        graph.expect_neighbors().with(eq(3)).never();

        let path = shortest_path(&graph, &1, &3).unwrap().unwrap();
        assert_eq!(path.hops(), 1);
    }
}
