//! Maps parsed payload records onto a [`Graph`].
//!
//! Node ids are the positions of the node records. Every edge record `(u, v, c)`
//! becomes the two directed edges `u -> v` and `v -> u` with cost `c`.
//!
//! Records carrying sentinel values (`-1` ids, `-1.0` costs) or otherwise
//! unusable data, including costs above [`MAX_WEIGHT`], never reach the
//! graph: in lenient mode (the default) they are skipped with a warning, in
//! strict mode the build fails.
use graph_reader::{EdgeRecord, GraphPayload};
use log::{info, warn};

use crate::{
    constants::{Weight, MAX_WEIGHT},
    graph::{node_index, Edge, Graph},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("edge record {record} references unknown node id {id}")]
    UnknownNode { record: usize, id: i64 },
    #[error("edge record {record} has invalid cost {cost}")]
    InvalidCost { record: usize, cost: Weight },
}

/// Parameters for the graph builder
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildParams {
    pub(crate) strict: bool,
}

impl BuildParams {
    pub fn new() -> Self {
        Default::default()
    }

    /// Fail on the first invalid edge record instead of skipping it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

pub struct GraphBuilder {
    params: BuildParams,
    skipped: Vec<BuildError>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::with_params(BuildParams::default())
    }

    pub fn with_params(params: BuildParams) -> Self {
        GraphBuilder {
            params,
            skipped: Vec::new(),
        }
    }

    /// Edge records ignored by the last [`GraphBuilder::build`] call.
    pub fn skipped(&self) -> &[BuildError] {
        &self.skipped
    }

    pub fn build(&mut self, payload: &GraphPayload) -> Result<Graph, BuildError> {
        self.skipped.clear();

        let mut g = Graph::with_capacity(payload.nodes.len(), payload.edges.len() * 2);

        for (i, node) in payload.nodes.iter().enumerate() {
            if node.label.is_empty() {
                warn!("Node {} has no label", i);
            }
            g.add_node(node.label.clone());
        }

        for (i, record) in payload.edges.iter().enumerate() {
            match validate(i, record, g.num_nodes()) {
                Ok(edge) => {
                    g.add_edge(edge);
                }
                Err(e) if self.params.strict => return Err(e),
                Err(e) => {
                    warn!("Skipping {}", e);
                    self.skipped.push(e);
                }
            }
        }

        info!(
            "Built graph with {} nodes and {} edges ({} edge records skipped)",
            g.num_nodes(),
            g.num_edges(),
            self.skipped.len()
        );
        Ok(g)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(record: usize, edge: &EdgeRecord, num_nodes: usize) -> Result<Edge, BuildError> {
    let resolve = |id: i64| {
        if id >= 0 && (id as usize) < num_nodes {
            Ok(node_index(id as usize))
        } else {
            Err(BuildError::UnknownNode { record, id })
        }
    };

    let source = resolve(edge.source)?;
    let target = resolve(edge.target)?;

    // Covers the -1.0 sentinel as well as NaN and infinity
    if !(edge.cost.is_finite() && (0.0..=MAX_WEIGHT).contains(&edge.cost)) {
        return Err(BuildError::InvalidCost {
            record,
            cost: edge.cost,
        });
    }

    Ok(Edge::new(source, target, edge.cost))
}
