//! LedgerChain - an in-process append-only ledger of hash-linked blocks
//!
//! # Architecture
//!
//! ## Core Ledger
//! - [`blockchain`] - Blocks, the ledger, canonical hashing and chain validation
//! - [`transaction`] - Transaction records
//! - [`mempool`] - Pending-transaction buffer
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management for the CLI
//! - [`error`] - Error types
//!
//! Networking, consensus, proof-of-work checks and persistence live outside
//! this crate and build on [`blockchain::Ledger`].

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod blockchain;
pub mod mempool;
pub mod transaction;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
