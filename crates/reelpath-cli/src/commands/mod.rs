//! CLI command implementations

pub mod completions;
pub mod config;
pub mod info;
pub mod path;
