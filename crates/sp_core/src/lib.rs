//! Crate to compute least-cost paths in undirected, weighted graphs.
//!
//! # Basic usage
//! ```no_run
//! use sp_core::prelude::*;
//!
//! // Location of a JSON graph payload (URL or path)
//! let location = "path/to/graph.json";
//!
//! // Create a new graph
//! let g = Graph::from_location(location, BuildParams::default())
//!     .expect("Failed to create graph");
//!
//! // Run the search
//! let result = search::run(&g, "node_0", "node_5").expect("Unknown node");
//! println!("{}", result);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod graph;
pub mod graph_builder;
pub mod prelude;
pub mod search;
pub mod search_params;
pub mod statistics;
pub mod util;
