//! Re-exports of the most commonly used items in `sp_core`.
pub use crate::graph_builder::{BuildParams, GraphBuilder};
pub use crate::search_params::{FrontierStrategy, SearchParams};

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::ShortestPathResult;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
