//! Per-call frontier and visited-set bookkeeping shared by traversals and searches.
//!
//! Every call allocates its own [`Frontier`] and [`Visited`], so queries never
//! share state even when they run against the same graph.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::traits::Neighbors;
use crate::{GraphError, GraphResult};

/// Order in which pending items leave the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Discipline {
    /// Queue: oldest item first (breadth-first)
    Fifo,
    /// Stack: newest item first (depth-first)
    Lifo,
}

/// Items pending expansion
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    pending: VecDeque<T>,
    discipline: Discipline,
}

impl<T> Frontier<T> {
    /// Create a frontier holding only `seed`
    pub(crate) fn seeded(seed: T, discipline: Discipline) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(seed);
        Self {
            pending,
            discipline,
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.pending.push_back(item);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        match self.discipline {
            Discipline::Fifo => self.pending.pop_front(),
            Discipline::Lifo => self.pending.pop_back(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

/// Nodes already pushed onto the frontier
#[derive(Debug)]
pub(crate) struct Visited<N> {
    seen: HashSet<N>,
}

impl<N: Clone + Eq + Hash> Visited<N> {
    /// Create a visited set with `start` already marked
    pub(crate) fn starting_at(start: &N) -> Self {
        let mut seen = HashSet::new();
        seen.insert(start.clone());
        Self { seen }
    }

    /// Mark `node` as visited; returns false if it already was
    pub(crate) fn mark(&mut self, node: &N) -> bool {
        self.seen.insert(node.clone())
    }

    pub(crate) fn contains(&self, node: &N) -> bool {
        self.seen.contains(node)
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}

/// Fail with `UnknownNode` unless `node` belongs to `graph`
///
/// Queries check their endpoints up front so a missing node is never
/// mistaken for an isolated one.
pub(crate) fn require_node<G: Neighbors>(graph: &G, node: &G::Node) -> GraphResult<()> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(GraphError::unknown_node(node))
    }
}
