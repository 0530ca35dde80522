//! Reelpath CLI - Shortest paths between actors and movies

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, info, path};
use config::Config;
use output::OutputFormat;
use reelpath_imdb::{GraphLoader, MovieGraph};

#[derive(Parser)]
#[command(name = "reelpath")]
#[command(author, version, about = "Find the shortest chain of movies linking two actors")]
pub struct Cli {
    /// Actors file (name.basics TSV)
    #[arg(short, long, global = true, env = "REELPATH_ACTORS")]
    pub actors: Option<PathBuf>,

    /// Movies file (title.basics TSV)
    #[arg(short, long, global = true, env = "REELPATH_MOVIES")]
    pub movies: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the shortest path between two names
    Path(path::PathArgs),
    /// Show graph size, or reachability from one node
    Info(info::InfoArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded graph
pub struct AppContext {
    pub graph: MovieGraph,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let actors = cli
            .actors
            .clone()
            .or_else(|| config.actors_file.clone())
            .context("No actors file given. Pass --actors or run `reelpath config set actors_file <PATH>`")?;
        let movies = cli
            .movies
            .clone()
            .or_else(|| config.movies_file.clone())
            .context("No movies file given. Pass --movies or run `reelpath config set movies_file <PATH>`")?;

        tracing::debug!("Using actors file {:?} and movies file {:?}", actors, movies);

        let graph = GraphLoader::with_options(config.load_options())
            .load(&actors, &movies)
            .with_context(|| {
                format!("Failed to load graph from {} and {}", actors.display(), movies.display())
            })?;

        let format = cli
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(OutputFormat::from)
            .unwrap_or(OutputFormat::Table);

        Ok(Self { graph, format })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting reelpath CLI");

    match &cli.command {
        Commands::Path(args) => {
            let ctx = AppContext::new(&cli, &Config::load()?)?;
            path::run(args, &ctx)?
        }
        Commands::Info(args) => {
            let ctx = AppContext::new(&cli, &Config::load()?)?;
            info::run(args, &ctx)?
        }
        Commands::Config(args) => commands::config::run(args)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
