//! Error types for LedgerChain

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The chain holds no blocks. Construction always seals a genesis block,
    /// so seeing this means an internal invariant was broken.
    EmptyChain,
    BlockNotFound(u64),
    InvalidBlock(String),
    InvalidBlockLinkage { index: u64 },
    SerializationError(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::EmptyChain => write!(f, "Illegal state: the chain has no genesis block"),
            ChainError::BlockNotFound(index) => write!(f, "Block not found: index {}", index),
            ChainError::InvalidBlock(msg) => write!(f, "Invalid block: {}", msg),
            ChainError::InvalidBlockLinkage { index } => {
                write!(f, "Invalid block linkage at index {}", index)
            }
            ChainError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ChainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChainError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
