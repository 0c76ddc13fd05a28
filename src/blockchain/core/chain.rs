use crate::blockchain::core::canonical::{sha256_hex, to_canonical_string};
use crate::blockchain::core::validation::validate_chain;
use crate::error::{ChainError, Result};
use crate::mempool::Mempool;
use crate::transaction::Transaction;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// `previous_hash` of the genesis block. Never a valid digest: real hashes
/// are always 64 hex characters.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Proof value recorded in the genesis block.
pub const GENESIS_PROOF: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub transactions: Vec<Transaction>,
    /// Opaque value supplied by the caller; never checked here.
    pub proof: u64,
    /// Hex digest of the preceding block, or [`GENESIS_PREVIOUS_HASH`].
    pub previous_hash: String,
}

impl Block {
    pub fn new(
        index: u64,
        previous_hash: String,
        proof: u64,
        transactions: Vec<Transaction>,
    ) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis() as u64;

        Block {
            index,
            timestamp,
            transactions,
            proof,
            previous_hash,
        }
    }

    pub fn canonical_value(&self) -> Value {
        let transactions: Vec<Value> = self
            .transactions
            .iter()
            .map(Transaction::canonical_value)
            .collect();

        json!({
            "index": self.index,
            "timestamp": self.timestamp,
            "transactions": transactions,
            "proof": self.proof,
            "previous_hash": self.previous_hash,
        })
    }

    /// Key-sorted JSON text of this block. This is the exact hashing input
    /// and is also suitable for handing to other processes.
    pub fn canonical_json(&self) -> String {
        to_canonical_string(&self.canonical_value())
    }

    /// SHA-256 of [`Block::canonical_json`], as 64 lowercase hex characters.
    pub fn hash(&self) -> String {
        sha256_hex(self.canonical_json().as_bytes())
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 1
    }
}

/// Append-only chain of blocks plus the buffer of transactions waiting for
/// the next one.
#[derive(Debug, Clone)]
pub struct Ledger {
    chain: Vec<Block>,
    mempool: Mempool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create a ledger holding only the genesis block.
    pub fn new() -> Self {
        let mut ledger = Ledger {
            chain: Vec::new(),
            mempool: Mempool::new(),
        };

        ledger.new_block(GENESIS_PROOF, Some(GENESIS_PREVIOUS_HASH.to_string()));
        info!(hash = %ledger.last_block().hash(), "Created ledger with genesis block");
        ledger
    }

    /// Queue a transaction for the next block.
    ///
    /// Returns the index of the block that will contain it.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: i64,
    ) -> u64 {
        let tx = Transaction::new(sender, recipient, amount);
        debug!(sender = %tx.sender, recipient = %tx.recipient, amount = tx.amount, "Queued transaction");
        self.mempool.add_transaction(tx);

        self.last_block().index + 1
    }

    /// Seal every pending transaction into a new block and append it.
    ///
    /// `previous_hash` is used verbatim when given; otherwise it is the hash
    /// of the current last block. Mining code should call [`Ledger::seal_block`],
    /// which always takes the computed path.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash = match previous_hash {
            Some(hash) => {
                if let Some(last) = self.chain.last() {
                    let expected = last.hash();
                    if hash != expected {
                        warn!(
                            index = last.index + 1,
                            %expected,
                            supplied = %hash,
                            "Explicit previous hash does not match the last block"
                        );
                    }
                }
                hash
            }
            None => self.last_block().hash(),
        };

        let index = self.chain.len() as u64 + 1;
        let block = Block::new(index, previous_hash, proof, self.mempool.take_batch());

        info!(
            index = block.index,
            proof = block.proof,
            transactions = block.transactions.len(),
            "Sealed block"
        );

        self.chain.push(block);
        self.last_block()
    }

    /// Seal the pending batch, linking the new block to the current last block.
    pub fn seal_block(&mut self, proof: u64) -> &Block {
        self.new_block(proof, None)
    }

    /// Canonical hash of any block, appended or not.
    pub fn hash(block: &Block) -> String {
        block.hash()
    }

    /// Most recently appended block.
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty, which can only follow from a bug inside
    /// this type: every constructor seals a genesis block.
    pub fn last_block(&self) -> &Block {
        match self.chain.last() {
            Some(block) => block,
            None => panic!("{}", ChainError::EmptyChain),
        }
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Look up a block by its 1-based index.
    pub fn block(&self, index: u64) -> Result<&Block> {
        index
            .checked_sub(1)
            .and_then(|pos| self.chain.get(pos as usize))
            .ok_or(ChainError::BlockNotFound(index))
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        self.mempool.transactions()
    }

    pub fn mempool(&self) -> &Mempool {
        &self.mempool
    }

    /// Re-check genesis, index sequence and hash linkage across the chain.
    pub fn validate(&self) -> Result<()> {
        validate_chain(&self.chain)
    }
}
