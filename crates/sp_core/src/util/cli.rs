use clap::Parser;

use crate::{
    graph_builder::BuildParams,
    search_params::{FrontierStrategy, SearchParams},
};

#[derive(Parser, Debug)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// URL or path of the JSON graph payload
    location: String,

    /// Name of the source node
    #[arg(short, long)]
    source: String,

    /// Name of the target node
    #[arg(short, long)]
    target: String,

    /// Frontier used by the search. Possible values are "linear" and "heap"
    #[arg(long, value_name = "strategy", default_value = "linear")]
    strategy: FrontierStrategy,

    /// Abort if the payload contains invalid edge records instead of skipping them
    #[arg(long, default_value = "false")]
    strict: bool,

    /// Print the cost of every node reachable from the source
    #[arg(short, long, default_value = "false")]
    all: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub location: String,
    pub source: String,
    pub target: String,
    pub search_params: SearchParams,
    pub build_params: BuildParams,
    pub print_tree: bool,
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            location: cli.location,
            source: cli.source,
            target: cli.target,
            search_params: SearchParams::new().strategy(cli.strategy),
            build_params: BuildParams::new().strict(cli.strict),
            print_tree: cli.all,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}
