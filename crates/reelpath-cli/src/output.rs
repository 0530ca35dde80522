//! Output formatting utilities

use reelpath_core::{Path, SearchStats};
use reelpath_imdb::{NodeKind, NodeRef};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// One node of a reported path
#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    pub name: String,
    pub kind: NodeKind,
}

impl From<&NodeRef<'_>> for NodeReport {
    fn from(node: &NodeRef<'_>) -> Self {
        Self {
            name: node.name().to_string(),
            kind: node.kind(),
        }
    }
}

/// Result of a `path` command
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    pub nodes: Vec<NodeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl PathReport {
    pub fn new(from: &str, to: &str, path: Option<&Path<NodeRef<'_>>>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: path.is_some(),
            hops: path.map(Path::hops),
            nodes: path
                .map(|p| p.iter().map(NodeReport::from).collect())
                .unwrap_or_default(),
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Result of an `info` command
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub actors: usize,
    pub movies: usize,
    pub links: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<ReachReport>,
}

/// Reachability from one node
#[derive(Debug, Clone, Serialize)]
pub struct ReachReport {
    pub name: String,
    pub kind: NodeKind,
    pub degree: usize,
    pub reachable_actors: usize,
    pub reachable_movies: usize,
    /// Largest hop count to any reachable node
    pub eccentricity: usize,
}

pub fn format_path(report: &PathReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            if !report.found {
                return format!("No path found from '{}' to '{}'", report.from, report.to);
            }

            let mut out = format!(
                "Path from '{}' to '{}' ({} hops):",
                report.from,
                report.to,
                report.hops.unwrap_or_default()
            );
            for (i, node) in report.nodes.iter().enumerate() {
                out.push_str(&format!("\n  {}. {} [{}]", i + 1, node.name, node.kind));
            }
            if let Some(stats) = &report.stats {
                out.push_str(&format!(
                    "\n\n  Stats: expanded {} nodes, examined {} edges",
                    stats.nodes_expanded, stats.edges_examined
                ));
            }
            out
        }
    }
}

pub fn format_info(report: &InfoReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let mut out = format!(
                "Graph: {} actors, {} movies, {} links",
                report.actors, report.movies, report.links
            );
            if let Some(node) = &report.node {
                out.push_str(&format!(
                    "\n{} [{}]: degree {}, reaches {} actors and {} movies, eccentricity {}",
                    node.name,
                    node.kind,
                    node.degree,
                    node.reachable_actors,
                    node.reachable_movies,
                    node.eccentricity
                ));
            }
            out
        }
    }
}

fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}
