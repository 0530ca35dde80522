//! Breadth-first shortest path search

use crate::node::Node;
use crate::path::Path;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};

/// Maps each discovered node to the node it was first reached from.
///
/// The search root never appears as a key: it has no predecessor.
pub type VisitedMap<N> = HashMap<N, N>;

/// Counters collected during a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose neighbors were enqueued (the root included)
    pub nodes_expanded: usize,
    /// Adjacency entries inspected
    pub edges_examined: usize,
    /// Nodes added to the frontier
    pub nodes_discovered: usize,
    pub path_found: bool,
}

/// Result of [`PathFinder::search`]
#[derive(Debug, Clone)]
pub struct SearchOutcome<N> {
    pub path: Option<Path<N>>,
    pub stats: SearchStats,
}

impl<N> SearchOutcome<N> {
    fn not_found(stats: SearchStats) -> Self {
        Self { path: None, stats }
    }

    fn found(path: Path<N>, mut stats: SearchStats) -> Self {
        stats.path_found = true;
        Self {
            path: Some(path),
            stats,
        }
    }
}

/// Unweighted shortest path search.
///
/// The finder holds no traversal state: every call allocates its own
/// visited map and frontier, so one instance can serve any number of
/// searches, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> Self {
        Self
    }

    /// Find a shortest path from `start` to `end`.
    ///
    /// Returns `None` when either endpoint is absent or when `end` cannot be
    /// reached. Among equally short paths, the one discovered first through
    /// the graph's neighbor order wins.
    pub fn find_shortest_path<N: Node>(&self, start: Option<&N>, end: Option<&N>) -> Option<Path<N>> {
        self.search(start, end).path
    }

    /// Same as [`find_shortest_path`](Self::find_shortest_path), also
    /// reporting traversal statistics.
    pub fn search<N: Node>(&self, start: Option<&N>, end: Option<&N>) -> SearchOutcome<N> {
        let mut stats = SearchStats::default();

        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                tracing::debug!("Search skipped: missing start or end node");
                return SearchOutcome::not_found(stats);
            }
        };

        tracing::debug!("Searching shortest path: start={}, end={}", start.name(), end.name());

        if start == end {
            return SearchOutcome::found(Path::single(start.clone()), stats);
        }

        let mut visited: VisitedMap<N> = HashMap::new();
        let mut frontier: VecDeque<N> = VecDeque::new();

        Self::expand(start, start, &mut visited, &mut frontier, &mut stats);

        while let Some(current) = frontier.pop_front() {
            if current == *end {
                let path = reconstruct_path(&visited, end, start);
                tracing::debug!(
                    "BFS found path with {} hops ({} nodes expanded, {} edges examined)",
                    path.hops(),
                    stats.nodes_expanded,
                    stats.edges_examined
                );
                return SearchOutcome::found(path, stats);
            }

            Self::expand(&current, start, &mut visited, &mut frontier, &mut stats);
        }

        tracing::debug!(
            "No path from {} to {} ({} nodes expanded, {} edges examined)",
            start.name(),
            end.name(),
            stats.nodes_expanded,
            stats.edges_examined
        );

        SearchOutcome::not_found(stats)
    }

    /// Hop count from `start` to every node reachable from it, `start`
    /// included at distance zero.
    pub fn bfs_distances<N: Node>(&self, start: &N) -> HashMap<N, usize> {
        let mut dist: HashMap<N, usize> = HashMap::new();
        let mut queue: VecDeque<N> = VecDeque::new();

        dist.insert(start.clone(), 0);
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            let depth = dist.get(&current).copied().unwrap_or_default();
            for next in current.neighbors() {
                if !dist.contains_key(&next) {
                    dist.insert(next.clone(), depth + 1);
                    queue.push_back(next);
                }
            }
        }

        dist
    }

    /// Enqueue the undiscovered neighbors of `node`, recording `node` as
    /// their predecessor.
    fn expand<N: Node>(
        node: &N,
        root: &N,
        visited: &mut VisitedMap<N>,
        frontier: &mut VecDeque<N>,
        stats: &mut SearchStats,
    ) {
        stats.nodes_expanded += 1;

        for neighbor in node.neighbors() {
            stats.edges_examined += 1;

            if neighbor == *root || visited.contains_key(&neighbor) {
                continue;
            }

            visited.insert(neighbor.clone(), node.clone());
            frontier.push_back(neighbor);
            stats.nodes_discovered += 1;
        }
    }
}

/// Rebuild the route to `end` by following predecessor links back to
/// `start`.
///
/// Expects `end` to be `start` or a key of `visited` whose chain ends at
/// `start`. A broken chain yields the partial route walked so far.
pub fn reconstruct_path<N: Node>(visited: &VisitedMap<N>, end: &N, start: &N) -> Path<N> {
    let mut nodes = vec![end.clone()];
    let mut current = end;

    while current != start {
        // A predecessor tree never has more links than entries.
        if nodes.len() > visited.len() {
            tracing::warn!("Predecessor chain from {} does not terminate", end.name());
            break;
        }

        match visited.get(current) {
            Some(prev) => {
                nodes.push(prev.clone());
                current = prev;
            }
            None => {
                tracing::warn!(
                    "Predecessor chain broken at {} before reaching {}",
                    current.name(),
                    start.name()
                );
                break;
            }
        }
    }

    nodes.reverse();
    Path::from_nodes(nodes)
}
