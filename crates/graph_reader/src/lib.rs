//! Retrieval and decoding of graph payloads.
//!
//! A payload is a JSON object with a `nodes` array (objects with a `label`)
//! and an `edges` array (objects with `source`, `target` and `cost`). Node ids
//! referenced by edges are positions in the `nodes` array.
//!
//! # Basic usage
//! ```no_run
//! use graph_reader::{load_graph_payload, parse_graph_payload};
//!
//! let text = load_graph_payload("path/to/graph.json").expect("Failed to load payload");
//! let payload = parse_graph_payload(&text).expect("Malformed payload");
//! println!("{} nodes, {} edges", payload.nodes.len(), payload.edges.len());
//! ```
mod error;
mod fetch;
mod payload;

pub use error::{ReaderError, Result};
pub use fetch::{fetch_graph_payload, load_graph_payload, read_graph_payload};
pub use payload::{
    parse_graph_payload, EdgeRecord, GraphPayload, NodeRecord, MISSING_FLOAT, MISSING_INT,
    MISSING_STRING,
};

/// Loads and parses the payload at `location` in one step.
pub fn read_payload(location: &str) -> Result<GraphPayload> {
    let text = load_graph_payload(location)?;
    parse_graph_payload(&text)
}
