//! Reelpath IMDb - Actor/movie graph built from IMDb-style TSV files
//!
//! This crate loads `name.basics`/`title.basics` shaped files into an
//! immutable bipartite [`MovieGraph`] whose [`NodeRef`] handles plug into
//! the `reelpath-core` path finder.

pub mod error;
pub mod graph;
pub mod limits;
pub mod loader;

pub use error::{LoadError, LoadResult};
pub use graph::{GraphBuilder, MovieGraph, NodeId, NodeKind, NodeRef};
pub use limits::ValidationError;
pub use loader::{GraphLoader, LoadOptions, LoadStats};
