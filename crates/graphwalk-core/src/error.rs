use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Dangling neighbor: {node} lists {neighbor}, which is not a node of the graph")]
    DanglingNeighbor { node: String, neighbor: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GraphError {
    /// Build an `UnknownNode` error from any debuggable node id
    pub fn unknown_node<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::UnknownNode(format!("{:?}", node))
    }

    pub fn is_unknown_node(&self) -> bool {
        matches!(self, GraphError::UnknownNode(_))
    }
}
