use graphwalk_core::{AdjacencyList, Edge, EdgeDirection, GraphError, GraphResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Node reference as written in a graph document: `1` and `"1"` name the same node
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Number(i64),
    Text(String),
}

impl NodeRef {
    pub fn into_id(self) -> String {
        match self {
            NodeRef::Number(n) => n.to_string(),
            NodeRef::Text(s) => s,
        }
    }
}

/// Edge-list form of a graph document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeList {
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    nodes: Vec<NodeRef>,
    edges: Vec<(NodeRef, NodeRef)>,
}

const EDGE_LIST_KEYS: [&str; 3] = ["directed", "nodes", "edges"];

/// On-disk graph description
///
/// Either an edge list
/// `{"directed": false, "nodes": [6], "edges": [[1, 2], [2, 3]]}`
/// or a plain adjacency map `{"1": [2, 5], "6": []}`.
#[derive(Debug)]
pub enum GraphDocument {
    Edges(EdgeList),
    Adjacency(HashMap<String, Vec<NodeRef>>),
}

impl GraphDocument {
    /// Parse a document, picking the form from its top-level keys
    ///
    /// Only an object whose keys are all edge-list keys (with `edges` among
    /// them) is an edge list; an adjacency map may name a node `edges`.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let is_edge_list = value.as_object().is_some_and(|object| {
            object.contains_key("edges")
                && object
                    .keys()
                    .all(|key| EDGE_LIST_KEYS.contains(&key.as_str()))
        });

        // Re-read the text rather than the value so errors keep line and column
        if is_edge_list {
            serde_json::from_str(content).map(GraphDocument::Edges)
        } else {
            serde_json::from_str(content).map(GraphDocument::Adjacency)
        }
    }

    pub fn into_graph(self) -> AdjacencyList<String> {
        match self {
            GraphDocument::Edges(EdgeList {
                directed,
                nodes,
                edges,
            }) => {
                let direction = if directed {
                    EdgeDirection::Directed
                } else {
                    EdgeDirection::Bidirectional
                };
                AdjacencyList::from_edges(edges.into_iter().map(|(source, target)| {
                    Edge::new(source.into_id(), target.into_id(), direction)
                }))
                .with_nodes(nodes.into_iter().map(NodeRef::into_id))
            }
            GraphDocument::Adjacency(adjacency) => adjacency
                .into_iter()
                .map(|(node, neighbors)| {
                    let neighbors = neighbors.into_iter().map(NodeRef::into_id).collect::<Vec<_>>();
                    (node, neighbors)
                })
                .collect(),
        }
    }
}

pub fn load(path: &Path) -> GraphResult<AdjacencyList<String>> {
    let content = std::fs::read_to_string(path)?;
    let document = GraphDocument::from_json(&content).map_err(|e| {
        GraphError::Serialization(format!("{}: {}", path.display(), e))
    })?;
    let graph = document.into_graph();
    tracing::debug!(
        "Loaded graph from {} ({} nodes, {} adjacency entries)",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
