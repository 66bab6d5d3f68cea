use std::path::Path;

use graph_reader::read_payload;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let now = std::time::Instant::now();
    // Read location of the payload from command line
    let location = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("No URL or path to a graph payload given"))?;

    let payload = read_payload(&location)?;
    payload.write_csv(Path::new("."))?;

    let elapsed = now.elapsed();

    println!(
        "Finished reading payload in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    println!(
        "Graph has {} nodes and {} edges",
        payload.nodes.len(),
        payload.edges.len()
    );
    Ok(())
}
