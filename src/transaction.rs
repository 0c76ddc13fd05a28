//! Transaction records awaiting inclusion in a block

use serde_json::{json, Value};

/// A single transfer of `amount` from `sender` to `recipient`.
///
/// Fields are taken as given: the ledger performs no balance, sign or
/// address checks. Wrap [`crate::blockchain::Ledger::new_transaction`] if
/// validation is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: i64) -> Self {
        Transaction {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }

    /// JSON value fed into the canonical block encoding.
    pub fn canonical_value(&self) -> Value {
        json!({
            "sender": self.sender,
            "recipient": self.recipient,
            "amount": self.amount,
        })
    }
}
