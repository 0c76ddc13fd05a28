//! Pending-transaction buffer
//!
//! Holds transactions queued for the next block. Sealing moves the whole
//! batch out and leaves a freshly allocated empty buffer behind, so a sealed
//! block never shares storage with the buffer that keeps accepting work.

use crate::transaction::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mempool {
    transactions: Vec<Transaction>,
}

impl Mempool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    /// Queued transactions in arrival order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Move the current batch out, replacing it with a new empty buffer.
    pub fn take_batch(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.transactions)
    }
}
