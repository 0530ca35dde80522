//! Reelpath Core - Shortest path search over actor/movie graphs
//!
//! This crate provides the [`Node`] abstraction the search runs against and
//! the breadth-first [`PathFinder`]. Graph loading lives in `reelpath-imdb`.

pub mod finder;
pub mod node;
pub mod path;

pub use finder::{reconstruct_path, PathFinder, SearchOutcome, SearchStats, VisitedMap};
pub use node::Node;
pub use path::Path;
