use crate::constants::{Weight, INFINITY};
use crate::graph::{Graph, NodeIndex};

use self::dijkstra::Dijkstra;
use self::shortest_path::ShortestPathResult;

pub mod dijkstra;
pub mod frontier;
pub mod shortest_path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("source node `{0}` not found")]
    SourceNotFound(String),
    #[error("target node `{0}` not found")]
    TargetNotFound(String),
}

/// Progress of a node within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Not discovered yet
    Unseen,
    /// In the frontier, cost may still improve
    Unvisited,
    /// Settled, cost and path are final
    Visited,
}

/// Per-search label of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub cost: Weight,
    pub predecessor: Option<NodeIndex>,
    pub state: NodeState,
}

impl Default for Label {
    fn default() -> Self {
        Label {
            cost: INFINITY,
            predecessor: None,
            state: NodeState::Unseen,
        }
    }
}

/// Follows the predecessors of `target` back to the source. The returned path
/// starts at the source and does not contain `target`.
pub fn reconstruct_path(target: NodeIndex, labels: &[Label]) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut previous_node = labels[target.index()].predecessor;

    while let Some(prev_node) = previous_node {
        path.push(prev_node);
        previous_node = labels[prev_node.index()].predecessor;
    }
    path.reverse();
    path
}

/// Computes the shortest path between the nodes named `source` and `target`.
///
/// Returns `None` if either name is unknown to `g`.
pub fn run(g: &Graph, source: &str, target: &str) -> Option<ShortestPathResult> {
    Dijkstra::new(g).search_by_name(source, target).ok()
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: &str,
    expected_cost: Weight,
    result: Option<ShortestPathResult>,
) {
    let result = result.expect("Expected a result");
    approx::assert_abs_diff_eq!(expected_cost, result.total_cost(), epsilon = 1e-9);
    assert_eq!(expected_path, result.rendered_path());
}

#[cfg(test)]
pub(crate) fn assert_no_path(result: Option<ShortestPathResult>) {
    let result = result.expect("Expected a result");
    assert_eq!(INFINITY, result.total_cost());
    assert!(result.shortest_path().is_empty());
}
