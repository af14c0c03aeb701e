pub mod adjacency;
pub mod dense;
pub mod edge;
mod frontier;
pub mod search;
pub mod traits;
pub mod traversal;

pub use adjacency::AdjacencyList;
pub use dense::DenseGraph;
pub use edge::{Edge, EdgeDirection};
pub use search::{
    distance, distance_with, reachable, shortest_path, shortest_path_with, BreadthFirstSearch,
    Path, PathStrategy, SearchState,
};
pub use traits::Neighbors;
pub use traversal::{breadth_first, depth_first, depth_first_with, DfsOrder};
