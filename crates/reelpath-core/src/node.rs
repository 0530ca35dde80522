//! Node (vertex) abstraction

use std::hash::Hash;

/// A vertex the path finder can walk.
///
/// Equality and hashing must follow the node's stable identity; two handles
/// to the same vertex compare equal. `neighbors` yields adjacent nodes in the
/// order the backing graph defines, and that order decides which of several
/// equally short paths a search returns.
pub trait Node: Clone + Eq + Hash {
    /// Human-readable name
    fn name(&self) -> &str;

    /// Adjacent nodes, in graph order
    fn neighbors(&self) -> impl Iterator<Item = Self> + '_;
}
