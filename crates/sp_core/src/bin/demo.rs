//! Minimal example
use sp_core::{prelude::*, util::test_graphs::reference_payload};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Build the graph from in-memory records
    let g = GraphBuilder::new().build(&reference_payload())?;

    // Search
    let mut dijkstra = Dijkstra::new(&g);
    let result = dijkstra.search_by_name("node_0", "node_5")?;

    println!("{}", result);
    println!("{}", dijkstra.stats);
    Ok(())
}
