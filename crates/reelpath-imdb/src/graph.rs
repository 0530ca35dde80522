//! Bipartite actor/movie graph

use crate::limits::{validate_key, validate_name, validate_node_count, ValidationError};
use reelpath_core::Node;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of a node inside its [`MovieGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the bipartite graph a node sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Actor,
    Movie,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Movie => "movie",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    key: String,
    name: String,
    neighbors: Vec<NodeId>,
}

/// Immutable actor/movie graph.
///
/// Actors are only adjacent to movies and vice versa. Each node lists its
/// neighbors in the order the links were added, which for loaded graphs is
/// file order; that order decides ties between equally short paths.
#[derive(Debug, Clone, Default)]
pub struct MovieGraph {
    nodes: Vec<NodeData>,
    actors_by_name: HashMap<String, NodeId>,
    movies_by_name: HashMap<String, NodeId>,
    by_key: HashMap<String, NodeId>,
    edge_count: usize,
}

impl MovieGraph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Look up an actor by name. Repeated names resolve to the first one added.
    pub fn actor(&self, name: &str) -> Option<NodeRef<'_>> {
        self.actors_by_name.get(name).map(|&id| self.node_ref(id))
    }

    /// Look up a movie by name. Repeated names resolve to the first one added.
    pub fn movie(&self, name: &str) -> Option<NodeRef<'_>> {
        self.movies_by_name.get(name).map(|&id| self.node_ref(id))
    }

    /// Look up an actor by name, falling back to a movie
    pub fn node(&self, name: &str) -> Option<NodeRef<'_>> {
        self.actor(name).or_else(|| self.movie(name))
    }

    /// Look up a node by its IMDb key (`nm…` or `tt…`)
    pub fn by_key(&self, key: &str) -> Option<NodeRef<'_>> {
        self.by_key.get(key).map(|&id| self.node_ref(id))
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        ((id.0 as usize) < self.nodes.len()).then(|| self.node_ref(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| self.node_ref(NodeId(i as u32)))
    }

    pub fn actors(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.nodes().filter(NodeRef::is_actor)
    }

    pub fn movies(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.nodes().filter(NodeRef::is_movie)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn actor_count(&self) -> usize {
        self.actors().count()
    }

    pub fn movie_count(&self) -> usize {
        self.movies().count()
    }

    /// Number of actor-movie links
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { graph: self, id }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }
}

/// Incremental construction of a [`MovieGraph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: MovieGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor node
    pub fn add_actor(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<NodeId, ValidationError> {
        self.add_node(NodeKind::Actor, key.into(), name.into())
    }

    /// Add a movie node
    pub fn add_movie(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<NodeId, ValidationError> {
        self.add_node(NodeKind::Movie, key.into(), name.into())
    }

    /// Id of a previously added node with this key
    pub fn id_for_key(&self, key: &str) -> Option<NodeId> {
        self.graph.by_key.get(key).copied()
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.graph.nodes.get(id.0 as usize).map(|n| n.kind)
    }

    /// Connect an actor and a movie in both directions.
    ///
    /// Returns `false` if the pair was already linked, or if the ids do not
    /// name one actor and one movie.
    pub fn link(&mut self, actor: NodeId, movie: NodeId) -> bool {
        if self.kind(actor) != Some(NodeKind::Actor) || self.kind(movie) != Some(NodeKind::Movie) {
            tracing::warn!("Refusing to link {} and {}: not an actor/movie pair", actor, movie);
            return false;
        }

        let nodes = &mut self.graph.nodes;
        if nodes[actor.0 as usize].neighbors.contains(&movie) {
            return false;
        }

        nodes[actor.0 as usize].neighbors.push(movie);
        nodes[movie.0 as usize].neighbors.push(actor);
        self.graph.edge_count += 1;
        true
    }

    pub fn node_count(&self) -> usize {
        self.graph.nodes.len()
    }

    pub fn build(self) -> MovieGraph {
        tracing::debug!(
            "Built graph with {} nodes and {} links",
            self.graph.nodes.len(),
            self.graph.edge_count
        );
        self.graph
    }

    fn add_node(&mut self, kind: NodeKind, key: String, name: String) -> Result<NodeId, ValidationError> {
        validate_key(&key)?;
        validate_name(&name)?;
        validate_node_count(self.graph.nodes.len())?;

        let id = NodeId(self.graph.nodes.len() as u32);

        let by_name = match kind {
            NodeKind::Actor => &mut self.graph.actors_by_name,
            NodeKind::Movie => &mut self.graph.movies_by_name,
        };
        if by_name.contains_key(&name) {
            tracing::debug!("Duplicate {} name '{}': lookups keep the first", kind, name);
        } else {
            by_name.insert(name.clone(), id);
        }
        self.graph.by_key.entry(key.clone()).or_insert(id);

        self.graph.nodes.push(NodeData {
            kind,
            key,
            name,
            neighbors: Vec::new(),
        });

        Ok(id)
    }
}

/// Borrowed handle to a node of a [`MovieGraph`].
///
/// Identity is the node id within its graph, so two actors sharing a name
/// are still distinct nodes.
#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g MovieGraph,
    id: NodeId,
}

impl<'g> NodeRef<'g> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.graph.data(self.id).kind
    }

    pub fn key(&self) -> &'g str {
        &self.graph.data(self.id).key
    }

    pub fn name(&self) -> &'g str {
        &self.graph.data(self.id).name
    }

    pub fn is_actor(&self) -> bool {
        self.kind() == NodeKind::Actor
    }

    pub fn is_movie(&self) -> bool {
        self.kind() == NodeKind::Movie
    }

    pub fn degree(&self) -> usize {
        self.graph.data(self.id).neighbors.len()
    }

    /// Neighbors, in link order
    pub fn neighbors(&self) -> impl Iterator<Item = NodeRef<'g>> + 'g {
        let graph = self.graph;
        graph
            .data(self.id)
            .neighbors
            .iter()
            .map(move |&id| NodeRef { graph, id })
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.graph, other.graph)
    }
}

impl Eq for NodeRef<'_> {}

impl Hash for NodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node for NodeRef<'_> {
    fn name(&self) -> &str {
        NodeRef::name(self)
    }

    fn neighbors(&self) -> impl Iterator<Item = Self> + '_ {
        NodeRef::neighbors(self)
    }
}
