//! Path types

use crate::node::Node;
use serde::Serialize;
use std::fmt;

/// An ordered route through the graph, from start to end inclusive.
///
/// A path always holds at least one node: a search from a node to itself
/// yields a single-element path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    /// Single-node path
    pub fn single(node: N) -> Self {
        Self { nodes: vec![node] }
    }

    /// Callers guarantee `nodes` is non-empty.
    pub(crate) fn from_nodes(nodes: Vec<N>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes }
    }

    /// Nodes in traversal order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes in the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges in the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// First node
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    /// Last node
    pub fn end(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N: Node> Path<N> {
    /// Display names of the nodes, in order
    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(Node::name).collect()
    }

    /// Check that every consecutive pair is adjacent
    pub fn is_connected(&self) -> bool {
        self.nodes
            .windows(2)
            .all(|pair| pair[0].neighbors().any(|n| n == pair[1]))
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<N: Node> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_path() {
        let path = Path::single("A");

        assert_eq!(path.len(), 1);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.start(), &"A");
        assert_eq!(path.end(), &"A");
    }

    #[test]
    fn test_path_accessors() {
        let path = Path::from_nodes(vec!["A", "B", "C"]);

        assert_eq!(path.len(), 3);
        assert_eq!(path.hops(), 2);
        assert_eq!(path.start(), &"A");
        assert_eq!(path.end(), &"C");
        assert_eq!(path.iter().copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(path.into_nodes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_path_serializes_as_list() {
        let path = Path::from_nodes(vec!["A", "B"]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
    }
}
