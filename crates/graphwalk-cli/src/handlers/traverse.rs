use crate::cli::OrderArg;
use crate::output;
use graphwalk_core::TraversalEngine;
use serde::Serialize;

use super::DocumentEngine;

#[derive(Serialize)]
pub struct TraversalOutput {
    pub start: String,
    pub order: Vec<String>,
    pub count: usize,
}

impl TraversalOutput {
    fn new(start: String, order: Vec<String>) -> Self {
        let count = order.len();
        Self {
            start,
            order,
            count,
        }
    }
}

#[derive(Serialize)]
pub struct ValidationOutput {
    pub nodes: usize,
    pub edges: usize,
    pub valid: bool,
}

pub fn handle_bfs(engine: &DocumentEngine<'_>, start: String) -> anyhow::Result<()> {
    let order = engine.breadth_first(&start)?;
    output::output_success(TraversalOutput::new(start, order))
}

pub fn handle_dfs(
    engine: &DocumentEngine<'_>,
    start: String,
    order: Option<OrderArg>,
) -> anyhow::Result<()> {
    let engine = match order {
        Some(order) => TraversalEngine::with_config(
            engine.graph(),
            engine.config().with_dfs_order(order.into()),
        ),
        None => *engine,
    };
    let visited = engine.depth_first(&start)?;
    output::output_success(TraversalOutput::new(start, visited))
}

pub fn handle_validate(engine: &DocumentEngine<'_>) -> anyhow::Result<()> {
    let graph = engine.graph();
    graph.validate()?;
    output::output_success(ValidationOutput {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        valid: true,
    })
}
