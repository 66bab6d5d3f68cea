use std::fmt;

use serde::Serialize;

use crate::{
    constants::{Weight, INFINITY},
    graph::{Graph, Node, NodeIndex},
};

use super::{Label, NodeState};

/// Outcome of a single (source, target) query.
///
/// `shortest_path` runs from the source up to, but not including, the target.
/// If the target cannot be reached, `total_cost` is [`INFINITY`] and the path
/// is empty.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ShortestPathResult {
    source_node_name: String,
    target_node_name: String,
    total_cost: Weight,
    shortest_path: Vec<Node>,
}

impl ShortestPathResult {
    pub fn new(
        source_node_name: impl Into<String>,
        target_node_name: impl Into<String>,
        total_cost: Weight,
        shortest_path: Vec<Node>,
    ) -> Self {
        ShortestPathResult {
            source_node_name: source_node_name.into(),
            target_node_name: target_node_name.into(),
            total_cost,
            shortest_path,
        }
    }

    pub fn source_node_name(&self) -> &str {
        &self.source_node_name
    }

    pub fn target_node_name(&self) -> &str {
        &self.target_node_name
    }

    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    pub fn shortest_path(&self) -> &[Node] {
        &self.shortest_path
    }

    pub fn is_reachable(&self) -> bool {
        self.total_cost != INFINITY
    }

    /// Node names of the path including the target, e.g. `a -> b -> c`.
    pub fn rendered_path(&self) -> String {
        self.shortest_path
            .iter()
            .map(|node| node.name.as_str())
            .chain(std::iter::once(self.target_node_name.as_str()))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for ShortestPathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{} (cost {})", self.rendered_path(), self.total_cost)
        } else {
            write!(
                f,
                "No path from {} to {}",
                self.source_node_name, self.target_node_name
            )
        }
    }
}

/// Final labels of a single source search over the whole graph.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeIndex,
    labels: Vec<Label>,
    settled: Vec<NodeIndex>,
}

impl ShortestPathTree {
    pub(crate) fn new(source: NodeIndex, labels: Vec<Label>, settled: Vec<NodeIndex>) -> Self {
        ShortestPathTree {
            source,
            labels,
            settled,
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Nodes in the order they were settled.
    pub fn settle_order(&self) -> &[NodeIndex] {
        &self.settled
    }

    pub fn cost(&self, node: NodeIndex) -> Weight {
        self.labels[node.index()].cost
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.labels[node.index()].state == NodeState::Visited
    }

    /// Path from the source up to, but not including, `node`.
    pub fn path(&self, node: NodeIndex) -> Vec<NodeIndex> {
        super::reconstruct_path(node, &self.labels)
    }

    pub fn result(&self, g: &Graph, target: NodeIndex) -> ShortestPathResult {
        let shortest_path = self
            .path(target)
            .into_iter()
            .map(|n| g.nodes[n.index()].clone())
            .collect();

        ShortestPathResult::new(
            g.nodes[self.source.index()].name.clone(),
            g.nodes[target.index()].name.clone(),
            self.cost(target),
            shortest_path,
        )
    }
}
