//! Input validation limits for graph construction

use thiserror::Error;

/// Maximum length for actor and movie names (1024 bytes)
pub const MAX_NAME_LEN: usize = 1024;

/// Maximum nodes in one graph (node ids are `u32`)
pub const MAX_NODES: usize = u32::MAX as usize;

/// Validation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long: {len} bytes (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Too many nodes: {count} (max {max})")]
    TooManyNodes { count: usize, max: usize },
}

/// Validate an actor or movie name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len: name.len(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate an IMDb-style key (`nm…`, `tt…`)
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    if key.trim().is_empty() {
        return Err(ValidationError::EmptyKey);
    }
    Ok(())
}

/// Validate that one more node fits
pub fn validate_node_count(count: usize) -> Result<(), ValidationError> {
    if count >= MAX_NODES {
        return Err(ValidationError::TooManyNodes {
            count: count + 1,
            max: MAX_NODES,
        });
    }
    Ok(())
}
