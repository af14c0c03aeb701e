mod cli;
mod document;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use graphwalk_core::{EngineConfig, TraversalEngine};

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("GRAPHWALK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "graphwalk", &mut std::io::stdout());
        return Ok(());
    }

    let graph_path = cli
        .graph
        .ok_or_else(|| anyhow::anyhow!("--graph is required for graph queries"))?;

    let graph = match document::load(&graph_path) {
        Ok(graph) => graph,
        Err(e) => output::output_error(&e.to_string()),
    };

    let mut config = match cli.config {
        Some(ref config_path) => match EngineConfig::load_from(config_path) {
            Ok(config) => config,
            Err(e) => output::output_error(&e.to_string()),
        },
        None => EngineConfig::load(),
    };
    if let Some(strategy) = cli.strategy {
        config = config.with_path_strategy(strategy.into());
    }
    tracing::info!("Querying {} with {:?}", graph_path.display(), config);

    let engine = TraversalEngine::with_config(&graph, config);

    let result = match cli.command {
        Commands::Bfs { start } => handlers::traverse::handle_bfs(&engine, start),
        Commands::Dfs { start, order } => handlers::traverse::handle_dfs(&engine, start, order),
        Commands::Reachable(args) => handlers::search::handle_reachable(&engine, args),
        Commands::Path(args) => handlers::search::handle_path(&engine, args),
        Commands::Distance(args) => handlers::search::handle_distance(&engine, args),
        Commands::Validate => handlers::traverse::handle_validate(&engine),
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(e) = result {
        output::output_error(&e.to_string());
    }

    Ok(())
}
