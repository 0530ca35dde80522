//! Graph summary command

use clap::Args;

use crate::output::{format_info, InfoReport, ReachReport};
use crate::AppContext;
use reelpath_core::PathFinder;

#[derive(Args)]
pub struct InfoArgs {
    /// Report reachability from this actor (or movie, if no actor matches)
    pub name: Option<String>,
}

pub fn run(args: &InfoArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = &ctx.graph;

    let node = match &args.name {
        Some(name) => match graph.node(name) {
            Some(node) => Some(node),
            None => anyhow::bail!("No actor or movie named '{}'", name),
        },
        None => None,
    };

    let reach = node.map(|node| {
        let dist = PathFinder::new().bfs_distances(&node);
        let reachable_actors = dist.keys().filter(|n| n.is_actor() && **n != node).count();
        let reachable_movies = dist.keys().filter(|n| n.is_movie() && **n != node).count();

        ReachReport {
            name: node.name().to_string(),
            kind: node.kind(),
            degree: node.degree(),
            reachable_actors,
            reachable_movies,
            eccentricity: dist.values().copied().max().unwrap_or_default(),
        }
    });

    let report = InfoReport {
        actors: graph.actor_count(),
        movies: graph.movie_count(),
        links: graph.edge_count(),
        node: reach,
    };

    println!("{}", format_info(&report, ctx.format));
    Ok(())
}
