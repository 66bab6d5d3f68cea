//! Frontier implementations: the nodes that have been discovered but are not
//! settled yet.
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::constants::Weight;
use crate::graph::NodeIndex;

use super::{Label, NodeState};

pub trait Frontier {
    /// Makes `node` eligible for selection with the tentative `cost` it was
    /// just given. Inserting a node that is already present only records the
    /// new cost.
    fn insert(&mut self, node: NodeIndex, cost: Weight);

    /// Removes and returns the unsettled node with the smallest cost in `labels`.
    fn pop_min(&mut self, labels: &[Label]) -> Option<NodeIndex>;

    fn is_empty(&self) -> bool;
}

/// Set-based frontier selected by a linear scan.
///
/// Of several nodes with the same cost the one that entered the frontier
/// first is returned.
#[derive(Debug, Default)]
pub struct LinearFrontier {
    members: Vec<NodeIndex>,
    contained: FxHashSet<NodeIndex>,
}

impl LinearFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

impl Frontier for LinearFrontier {
    fn insert(&mut self, node: NodeIndex, _cost: Weight) {
        if self.contained.insert(node) {
            self.members.push(node);
        }
    }

    fn pop_min(&mut self, labels: &[Label]) -> Option<NodeIndex> {
        let mut min: Option<(usize, Weight)> = None;

        for (pos, node) in self.members.iter().enumerate() {
            let cost = labels[node.index()].cost;
            match min {
                Some((_, min_cost)) if cost >= min_cost => {}
                _ => min = Some((pos, cost)),
            }
        }

        let (pos, _) = min?;
        let node = self.members.remove(pos);
        self.contained.remove(&node);
        Some(node)
    }

    fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug)]
struct Candidate {
    node_idx: NodeIndex,
    weight: Weight,
    seq: usize,
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // Reversed so that the max-heap yields the smallest weight, then the
    // oldest entry.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Binary heap frontier. Outdated entries stay in the heap and are dropped
/// when they surface.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Candidate>,
    seq: usize,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, node: NodeIndex, cost: Weight) {
        self.heap.push(Candidate {
            node_idx: node,
            weight: cost,
            seq: self.seq,
        });
        self.seq += 1;
    }

    fn pop_min(&mut self, labels: &[Label]) -> Option<NodeIndex> {
        while let Some(Candidate {
            node_idx, weight, ..
        }) = self.heap.pop()
        {
            let label = &labels[node_idx.index()];
            if label.state == NodeState::Visited || weight > label.cost {
                continue;
            }
            return Some(node_idx);
        }
        None
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
