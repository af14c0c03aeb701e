use serde::{Deserialize, Serialize};

use super::frontier::{require_node, Discipline, Frontier, Visited};
use super::traits::Neighbors;
use crate::GraphResult;

/// Which depth-first order [`depth_first_with`] produces
///
/// Both visit every reachable node exactly once; they only differ in which
/// branch is explored first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DfsOrder {
    /// Plain stack expansion: neighbors are pushed in adjacency order and
    /// popped from the top, so the last-listed neighbor's subtree comes first
    #[default]
    Stack,
    /// Recursive-style preorder: the first-listed neighbor's subtree comes first
    Preorder,
}

/// Enumerate every node reachable from `start` in breadth-first order
///
/// Nodes come out in non-decreasing hop distance from `start`; ties follow
/// adjacency order and discovery order.
pub fn breadth_first<G: Neighbors>(graph: &G, start: &G::Node) -> GraphResult<Vec<G::Node>> {
    let order = enumerate(graph, start, Discipline::Fifo)?;
    tracing::debug!(
        "Breadth-first enumeration from {:?} reached {} nodes",
        start,
        order.len()
    );
    Ok(order)
}

/// Enumerate every node reachable from `start` in depth-first order
///
/// Uses [`DfsOrder::Stack`]. The exact order is only guaranteed to be a valid
/// depth-first order.
pub fn depth_first<G: Neighbors>(graph: &G, start: &G::Node) -> GraphResult<Vec<G::Node>> {
    depth_first_with(graph, start, DfsOrder::default())
}

pub fn depth_first_with<G: Neighbors>(
    graph: &G,
    start: &G::Node,
    order: DfsOrder,
) -> GraphResult<Vec<G::Node>> {
    let visited = match order {
        DfsOrder::Stack => enumerate(graph, start, Discipline::Lifo)?,
        DfsOrder::Preorder => preorder(graph, start)?,
    };
    tracing::debug!(
        "Depth-first ({:?}) enumeration from {:?} reached {} nodes",
        order,
        start,
        visited.len()
    );
    Ok(visited)
}

fn enumerate<G: Neighbors>(
    graph: &G,
    start: &G::Node,
    discipline: Discipline,
) -> GraphResult<Vec<G::Node>> {
    require_node(graph, start)?;

    let mut frontier = Frontier::seeded(start.clone(), discipline);
    let mut visited = Visited::starting_at(start);
    let mut order = Vec::new();

    while let Some(node) = frontier.pop() {
        let neighbors = graph.neighbors(&node)?;
        tracing::trace!("Expanding {:?} (frontier: {})", node, frontier.len());
        order.push(node);

        for neighbor in neighbors {
            if visited.mark(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }

    Ok(order)
}

/// Depth-first preorder driven by a stack of neighbor cursors
///
/// A node is marked and emitted when its cursor is pushed, so no node is
/// ever pushed twice.
fn preorder<G: Neighbors>(graph: &G, start: &G::Node) -> GraphResult<Vec<G::Node>> {
    require_node(graph, start)?;

    let mut visited = Visited::starting_at(start);
    let mut order = vec![start.clone()];
    let mut stack = vec![graph.neighbors(start)?.into_iter()];

    while let Some(cursor) = stack.last_mut() {
        match cursor.find(|n| !visited.contains(n)) {
            Some(node) => {
                visited.mark(&node);
                let children = graph.neighbors(&node)?;
                order.push(node);
                stack.push(children.into_iter());
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(order)
}
