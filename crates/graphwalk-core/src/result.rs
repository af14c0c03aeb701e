use crate::error::GraphError;

pub type GraphResult<T> = Result<T, GraphError>;
