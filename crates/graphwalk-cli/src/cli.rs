use clap::{Args, Parser, Subcommand, ValueEnum};
use graphwalk_core::graph::{DfsOrder, PathStrategy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(about = "Traverse and search graphs described in JSON files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the graph document (or set GRAPHWALK_GRAPH env var)
    #[arg(long, short, value_name = "FILE", env = "GRAPHWALK_GRAPH", global = true)]
    pub graph: Option<PathBuf>,

    /// Engine config file (defaults to the user config directory)
    #[arg(long, value_name = "FILE", env = "GRAPHWALK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// How shortest paths are built (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub strategy: Option<StrategyArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every node reachable from a start node, breadth-first
    Bfs {
        #[arg(long)]
        start: String,
    },
    /// List every node reachable from a start node, depth-first
    Dfs {
        #[arg(long)]
        start: String,
        /// Depth-first order (overrides the config file)
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },
    /// Check whether one node can reach another
    Reachable(EndpointArgs),
    /// Find a shortest path between two nodes
    Path(EndpointArgs),
    /// Degrees of separation between two nodes (-1 when unreachable)
    Distance(EndpointArgs),
    /// Check that every neighbor reference names a node of the graph
    Validate,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct EndpointArgs {
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Predecessor,
    PathCopy,
}

impl From<StrategyArg> for PathStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Predecessor => PathStrategy::Predecessor,
            StrategyArg::PathCopy => PathStrategy::PathCopy,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Stack,
    Preorder,
}

impl From<OrderArg> for DfsOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Stack => DfsOrder::Stack,
            OrderArg::Preorder => DfsOrder::Preorder,
        }
    }
}
