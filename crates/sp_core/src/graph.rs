use crate::constants::Weight;
use crate::graph_builder::{BuildParams, GraphBuilder};
use anyhow::Context;
use graph_reader::{EdgeRecord, GraphPayload, NodeRecord, MISSING_INT};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

/// Node identifier. Equals the position of the node in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(u32::MAX)
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(u32::MAX)
    }
}

/// Structural part of a node. Search labels are kept outside of the graph.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    pub id: NodeIndex,
    pub name: String,
}

impl Node {
    pub fn new(id: NodeIndex, name: impl Into<String>) -> Self {
        Node {
            id,
            name: name.into(),
        }
    }
}

/// One direction of an undirected connection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Directional name of the edge, e.g. `3To5`.
    pub fn name(&self) -> String {
        edge_name(self.source, self.target)
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// Builds the directional name `"{source}To{target}"`.
pub fn edge_name(source: NodeIndex, target: NodeIndex) -> String {
    format!("{}To{}", source, target)
}

fn parse_edge_name(name: &str) -> Option<(NodeIndex, NodeIndex)> {
    let (source, target) = name.split_once("To")?;
    Some((
        NodeIndex(source.parse().ok()?),
        NodeIndex(target.parse().ok()?),
    ))
}

/// Undirected, weighted graph.
///
/// Every connection is stored as two directed [`Edge`]s with the same weight.
/// The graph is immutable for the search algorithms; all per-query state lives
/// in the search itself.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    // Neighbors in insertion order together with the edge leading to them
    adjacency: Vec<Vec<(NodeIndex, EdgeIndex)>>,
    edge_lookup: FxHashMap<(NodeIndex, NodeIndex), EdgeIndex>,
    name_lookup: FxHashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            adjacency: Vec::with_capacity(num_nodes),
            edge_lookup: FxHashMap::with_capacity_and_hasher(num_edges, Default::default()),
            name_lookup: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Adds a new node to the graph. Its id is its position.
    ///
    /// If another node already carries the same name, lookups by name keep
    /// returning the earlier one.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeIndex {
        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes exceeded"
        );

        let name = name.into();
        if self.name_lookup.contains_key(&name) {
            warn!("Duplicate node name {:?} for node {}", name, node_idx);
        } else {
            self.name_lookup.insert(name.clone(), node_idx);
        }

        self.adjacency.push(Vec::new());
        self.nodes.push(Node::new(node_idx, name));

        node_idx
    }

    /// Adds an undirected connection, i.e. `edge` and its reverse.
    ///
    /// Each endpoint is added to the neighbors of the other at most once. If
    /// the connection already exists its weight is replaced.
    ///
    /// **Panics** if the source or target node does not exist
    ///
    /// Returns the index of the edge from `edge.source` to `edge.target`.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );

        let reverse = edge.reverse();
        let edge_idx = self.insert_directed(edge);
        self.insert_directed(reverse);
        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    fn insert_directed(&mut self, edge: Edge) -> EdgeIndex {
        let key = (edge.source, edge.target);

        if let Some(&edge_idx) = self.edge_lookup.get(&key) {
            debug!(
                "Replacing weight of {}: {} -> {}",
                edge.name(),
                self.edges[edge_idx.index()].weight,
                edge.weight
            );
            self.edges[edge_idx.index()].weight = edge.weight;
            return edge_idx;
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges exceeded"
        );

        self.adjacency[edge.source.index()].push((edge.target, edge_idx));
        self.edge_lookup.insert(key, edge_idx);
        self.edges.push(edge);

        edge_idx
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    /// Looks up a node by its name.
    pub fn node_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_lookup.get(name).copied()
    }

    /// Returns the edge with the given directional name (`"{source}To{target}"`).
    pub fn edge_by_name(&self, name: &str) -> Option<&Edge> {
        let (source, target) = parse_edge_name(name)?;
        self.edge(source, target)
    }

    pub fn edge(&self, source: NodeIndex, target: NodeIndex) -> Option<&Edge> {
        self.edge_lookup
            .get(&(source, target))
            .map(|edge_idx| &self.edges[edge_idx.index()])
    }

    pub fn edge_weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        self.edge(source, target).map(|edge| edge.weight)
    }

    /// Neighbors of `node_idx` in insertion order, with the edge leading to each.
    pub fn neighbors(&self, node_idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, &Edge)> + '_ {
        self.adjacency[node_idx.index()]
            .iter()
            .map(move |(target, edge_idx)| (*target, &self.edges[edge_idx.index()]))
    }

    pub fn degree(&self, node_idx: NodeIndex) -> usize {
        self.adjacency[node_idx.index()].len()
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all directed edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges, i.e. twice the number of connections.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.num_nodes(),
            self.num_edges()
        );
    }

    /// Builds a graph from parsed payload records with default [`BuildParams`].
    pub fn from_payload(payload: &GraphPayload) -> anyhow::Result<Self> {
        Ok(GraphBuilder::new().build(payload)?)
    }

    /// Loads the payload at `location` (URL or path) and builds the graph.
    pub fn from_location(location: &str, params: BuildParams) -> anyhow::Result<Self> {
        info!("Loading graph from {}", location);

        let payload = graph_reader::read_payload(location)
            .with_context(|| format!("Could not read graph payload from {}", location))?;

        let g = GraphBuilder::with_params(params)
            .build(&payload)
            .context("Could not build graph")?;

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Reads `id,label` and `source,target,cost` files. Ids in the node file
    /// are arbitrary and get remapped to positions.
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        #[derive(Deserialize)]
        struct CsvNode {
            id: i64,
            label: String,
        }

        let mut nodes = Vec::new();
        let mut node_index: FxHashMap<i64, i64> = FxHashMap::default();

        let mut reader = csv::Reader::from_path(path_to_nodes)?;
        for (i, result) in reader.deserialize().enumerate() {
            let node: CsvNode = result.context("Failed to parse Node")?;
            node_index.insert(node.id, i as i64);
            nodes.push(NodeRecord { label: node.label });
        }

        let mut edges = Vec::new();
        let mut reader = csv::Reader::from_path(path_to_edges)?;
        for result in reader.deserialize() {
            let edge: EdgeRecord = result.context("Failed to parse Edge")?;
            let lookup = |id: i64| node_index.get(&id).copied().unwrap_or(MISSING_INT);
            edges.push(EdgeRecord::new(
                lookup(edge.source),
                lookup(edge.target),
                edge.cost,
            ));
        }

        Graph::from_payload(&GraphPayload::new(nodes, edges))
    }

    /// Writes `nodes.csv` and `edges.csv` into `dir`, one line per connection.
    pub fn export_csv(&self, dir: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(dir.join("nodes.csv"))?;
        wtr.write_record(["id", "label"])?;

        debug!("BEGIN writing nodes");
        for node in self.nodes() {
            wtr.write_record(&[node.id.to_string(), node.name.clone()])?;
        }

        wtr.flush()?;
        debug!("FINISHED writing nodes");

        let mut wtr = csv::Writer::from_path(dir.join("edges.csv"))?;
        wtr.write_record(["source", "target", "cost"])?;
        debug!("BEGIN writing edges");
        for edge in self.edges().filter(|edge| edge.source <= edge.target) {
            wtr.write_record(&[
                edge.source.to_string(),
                edge.target.to_string(),
                edge.weight.to_string(),
            ])?;
        }

        wtr.flush()?;
        debug!("FINISHED writing edges");
        Ok(())
    }
}

/// Macro to create an edge between source and target with a weight.
/// [`Graph::add_edge`] stores it in both directions.
///
/// edge!(0, 1, 3.0)
#[macro_export]
macro_rules! edge {
    ($source:expr, $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
}
