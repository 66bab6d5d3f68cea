//! Interactive shell to query shortest paths on a loaded graph
use std::path::PathBuf;

use log::warn;
use reedline_repl_rs::clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use sp_core::{
    graph::NodeIndex,
    prelude::*,
    statistics::{average_degree, degree_hist},
};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let mut out = format!(
        "Graph has {} nodes and {} edges (avg. degree {:.2})\n",
        g.num_nodes(),
        g.num_edges(),
        average_degree(g)
    );
    for bucket in degree_hist(g).into_iter().filter(|b| b.count() > 0) {
        out.push_str(&format!(
            "[{}-{}]: {}\n",
            bucket.low(),
            bucket.high(),
            bucket.count()
        ));
    }
    Ok(Some(out))
}

fn params(args: &ArgMatches) -> SearchParams {
    if args.get_flag("heap") {
        SearchParams::new().strategy(FrontierStrategy::Heap)
    } else {
        SearchParams::new()
    }
}

fn run_search(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = args.get_one::<String>("src").unwrap();
    let dst = args.get_one::<String>("dst").unwrap();

    let mut dijkstra = Dijkstra::with_params(&context.graph, params(&args));
    match dijkstra.search_by_name(src, dst) {
        Ok(result) => Ok(Some(format!(
            "{}\nTook: {:?}",
            result, dijkstra.stats.duration
        ))),
        Err(e) => Ok(Some(e.to_string())),
    }
}

fn run_tree(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = args.get_one::<String>("src").unwrap();
    let g = &context.graph;

    let Some(source) = g.node_by_name(src) else {
        return Ok(Some(format!("source node `{}` not found", src)));
    };

    let tree = Dijkstra::with_params(g, params(&args)).search_all(source);
    let mut out = String::new();
    for node in tree.settle_order() {
        out.push_str(&format!("{:>12}\t{}\n", tree.cost(*node), g.nodes[node.index()].name));
    }
    let unreachable = g.num_nodes() - tree.settle_order().len();
    out.push_str(&format!("{} nodes unreachable", unreachable));
    Ok(Some(out))
}

fn measure_search(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let g = &context.graph;

    if g.num_nodes() == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let pairs: Vec<(NodeIndex, NodeIndex)> = (0..n)
        .map(|_| {
            (
                node_index(rng.gen_range(0..g.num_nodes())),
                node_index(rng.gen_range(0..g.num_nodes())),
            )
        })
        .collect();

    let pb = indicatif::ProgressBar::new(n as u64);
    let mut res = String::new();
    // Run both frontiers for each pair of nodes
    for (src, dst) in pairs {
        let mut linear = Dijkstra::new(g);
        let mut heap = Dijkstra::with_params(g, SearchParams::new().strategy(FrontierStrategy::Heap));
        let (Some(a), Some(b)) = (linear.search(src, dst), heap.search(src, dst)) else {
            continue;
        };
        if a.total_cost() != b.total_cost() {
            warn!("Frontiers disagree for {} -> {}", src, dst);
        }
        res.push_str(&format!(
            "{} -> {}: cost {} linear {:?} heap {:?}\n",
            a.source_node_name(),
            a.target_node_name(),
            a.total_cost(),
            linear.stats.duration,
            heap.stats.duration
        ));
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Some(res))
}

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn heap_flag() -> Arg {
    Arg::new("heap")
        .long("heap")
        .action(ArgAction::SetTrue)
        .help("Use the binary heap frontier")
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let Some(location) = std::env::args().nth(1) else {
        eprintln!("No URL or path to a graph payload given");
        std::process::exit(1);
    };
    let graph = match Graph::from_location(&location, BuildParams::default()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query shortest paths")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("path")
                .arg(Arg::new("src").required(true).help("Name of source node"))
                .arg(Arg::new("dst").required(true).help("Name of target node"))
                .arg(heap_flag())
                .about("Calculate the shortest path between two nodes"),
            run_search,
        )
        .with_command(
            Command::new("tree")
                .arg(Arg::new("src").required(true).help("Name of source node"))
                .arg(heap_flag())
                .about("Print the cost of every node reachable from a source"),
            run_tree,
        )
        .with_command(
            Command::new("pathm")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest path calculations with both frontiers"),
            measure_search,
        );

    repl.run()
}
