//! Shortest path command

use clap::Args;

use crate::output::{format_path, PathReport};
use crate::AppContext;
use reelpath_core::PathFinder;
use reelpath_imdb::{MovieGraph, NodeRef};

#[derive(Args)]
pub struct PathArgs {
    /// Starting actor (or movie with --from-movie)
    pub from: String,
    /// Target actor (or movie with --to-movie)
    pub to: String,
    /// Resolve FROM as a movie title
    #[arg(long)]
    pub from_movie: bool,
    /// Resolve TO as a movie title
    #[arg(long)]
    pub to_movie: bool,
    /// Include search statistics
    #[arg(long)]
    pub stats: bool,
}

fn resolve<'g>(graph: &'g MovieGraph, name: &str, movie: bool) -> Option<NodeRef<'g>> {
    let node = if movie { graph.movie(name) } else { graph.actor(name) };
    if node.is_none() {
        tracing::warn!("{} '{}' not found", if movie { "Movie" } else { "Actor" }, name);
    }
    node
}

pub fn run(args: &PathArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let from = resolve(&ctx.graph, &args.from, args.from_movie);
    let to = resolve(&ctx.graph, &args.to, args.to_movie);

    tracing::info!("Finding path from {} to {}", args.from, args.to);

    let outcome = PathFinder::new().search(from.as_ref(), to.as_ref());

    let mut report = PathReport::new(&args.from, &args.to, outcome.path.as_ref());
    if args.stats {
        report = report.with_stats(outcome.stats);
    }

    println!("{}", format_path(&report, ctx.format));
    Ok(())
}
