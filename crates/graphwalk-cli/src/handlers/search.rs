use crate::cli::EndpointArgs;
use crate::output;
use serde::Serialize;

use super::DocumentEngine;

/// Rendering of an unreachable pair's distance
const UNREACHABLE: i64 = -1;

#[derive(Serialize)]
pub struct ReachableOutput {
    pub from: String,
    pub to: String,
    pub reachable: bool,
}

#[derive(Serialize)]
pub struct PathOutput {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub path: Option<Vec<String>>,
    pub hops: i64,
}

#[derive(Serialize)]
pub struct DistanceOutput {
    pub from: String,
    pub to: String,
    pub distance: i64,
}

fn separation(hops: Option<usize>) -> i64 {
    hops.map_or(UNREACHABLE, |h| h as i64)
}

pub fn handle_reachable(engine: &DocumentEngine<'_>, args: EndpointArgs) -> anyhow::Result<()> {
    let reachable = engine.is_reachable(&args.from, &args.to)?;
    output::output_success(ReachableOutput {
        from: args.from,
        to: args.to,
        reachable,
    })
}

pub fn handle_path(engine: &DocumentEngine<'_>, args: EndpointArgs) -> anyhow::Result<()> {
    let path = engine.shortest_path(&args.from, &args.to)?;
    let hops = separation(path.as_ref().map(|p| p.hops()));
    output::output_success(PathOutput {
        from: args.from,
        to: args.to,
        found: path.is_some(),
        path: path.map(|p| p.into_nodes()),
        hops,
    })
}

pub fn handle_distance(engine: &DocumentEngine<'_>, args: EndpointArgs) -> anyhow::Result<()> {
    let distance = separation(engine.distance(&args.from, &args.to)?);
    output::output_success(DistanceOutput {
        from: args.from,
        to: args.to,
        distance,
    })
}
