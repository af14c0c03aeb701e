use crate::config::EngineConfig;
use crate::graph::search::{self, Path};
use crate::graph::traversal;
use crate::graph::Neighbors;
use crate::GraphResult;

/// All traversal and search queries over one borrowed graph
///
/// Holds no per-query state: every call allocates its own frontier, so a
/// single engine can answer queries from several threads when `G: Sync`.
#[derive(Debug)]
pub struct TraversalEngine<'g, G> {
    graph: &'g G,
    config: EngineConfig,
}

impl<G> Clone for TraversalEngine<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for TraversalEngine<'_, G> {}

impl<'g, G: Neighbors> TraversalEngine<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, EngineConfig::default())
    }

    pub fn with_config(graph: &'g G, config: EngineConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn breadth_first(&self, start: &G::Node) -> GraphResult<Vec<G::Node>> {
        traversal::breadth_first(self.graph, start)
    }

    /// Depth-first enumeration in the configured [`DfsOrder`](crate::graph::DfsOrder)
    pub fn depth_first(&self, start: &G::Node) -> GraphResult<Vec<G::Node>> {
        traversal::depth_first_with(self.graph, start, self.config.dfs_order)
    }

    pub fn is_reachable(&self, start: &G::Node, end: &G::Node) -> GraphResult<bool> {
        search::reachable(self.graph, start, end)
    }

    /// Shortest path using the configured [`PathStrategy`](crate::graph::PathStrategy)
    pub fn shortest_path(
        &self,
        start: &G::Node,
        end: &G::Node,
    ) -> GraphResult<Option<Path<G::Node>>> {
        search::shortest_path_with(self.graph, start, end, self.config.path_strategy)
    }

    pub fn distance(&self, start: &G::Node, end: &G::Node) -> GraphResult<Option<usize>> {
        search::distance_with(self.graph, start, end, self.config.path_strategy)
    }
}
