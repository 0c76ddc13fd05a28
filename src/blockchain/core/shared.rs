//! Thread-safe handle to a [`Ledger`]
//!
//! Enqueue and seal take the write lock for their whole duration, so a seal
//! never observes a half-updated pending buffer. Queries share the read lock.
//! Every method returns owned data; no guard leaves this module.

use crate::blockchain::core::chain::{Block, Ledger};
use crate::error::Result;
use crate::transaction::Transaction;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    pub fn new_transaction(
        &self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: i64,
    ) -> u64 {
        self.inner.write().new_transaction(sender, recipient, amount)
    }

    pub fn new_block(&self, proof: u64, previous_hash: Option<String>) -> Block {
        self.inner.write().new_block(proof, previous_hash).clone()
    }

    pub fn seal_block(&self, proof: u64) -> Block {
        self.inner.write().seal_block(proof).clone()
    }

    pub fn last_block(&self) -> Block {
        self.inner.read().last_block().clone()
    }

    pub fn block(&self, index: u64) -> Result<Block> {
        self.inner.read().block(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn chain(&self) -> Vec<Block> {
        self.inner.read().chain().to_vec()
    }

    pub fn pending_transactions(&self) -> Vec<Transaction> {
        self.inner.read().pending_transactions().to_vec()
    }

    pub fn validate(&self) -> Result<()> {
        self.inner.read().validate()
    }

    /// Run `f` against the ledger under the read lock.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&*self.inner.read())
    }
}
