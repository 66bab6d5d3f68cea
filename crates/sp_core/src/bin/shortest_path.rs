use sp_core::{graph::Graph, search::dijkstra::Dijkstra, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g = Graph::from_location(&cfg.location, cfg.build_params)?;
    g.print_info();

    let mut dijkstra = Dijkstra::with_params(&g, cfg.search_params);
    let (source, target) = dijkstra.resolve_names(&cfg.source, &cfg.target)?;
    let tree = dijkstra.search_all(source);

    println!("{}", tree.result(&g, target));
    println!("{}", dijkstra.stats);

    if cfg.print_tree {
        for node in tree.settle_order() {
            println!("{:>12}\t{}", tree.cost(*node), g.nodes[node.index()].name);
        }
    }

    Ok(())
}
