// Thin re-export module: implementation is in `blockchain/core.rs`, split into
// chain management, canonical hashing, validation and the shared handle.

pub mod core;
pub use self::core::*;
