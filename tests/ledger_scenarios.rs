//! Integration tests for the ledger's public API
//!
//! These walk full enqueue/seal cycles and check the chain invariants from
//! the outside, the way an embedding service would use the crate.

use ledgerchain::blockchain::{
    validate_chain, Block, Ledger, SharedLedger, GENESIS_PREVIOUS_HASH,
};
use ledgerchain::error::ChainError;
use ledgerchain::transaction::Transaction;

#[test]
fn test_end_to_end_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.len(), 1);

    ledger.new_transaction("A", "B", 5);
    ledger.new_transaction("B", "C", 3);
    ledger.seal_block(100);

    assert_eq!(ledger.len(), 2);
    let chain = ledger.chain();
    assert_eq!(
        chain[1].transactions,
        vec![Transaction::new("A", "B", 5), Transaction::new("B", "C", 3)]
    );
    assert_eq!(chain[1].previous_hash, Ledger::hash(&chain[0]));
    assert!(ledger.pending_transactions().is_empty());
    assert_eq!(ledger.new_transaction("C", "A", 1), 3);

    ledger.validate()?;
    Ok(())
}

#[test]
fn test_genesis_invariant() {
    let ledger = Ledger::default();
    assert_eq!(ledger.chain().len(), 1);
    assert_eq!(ledger.chain()[0].previous_hash, GENESIS_PREVIOUS_HASH);
    assert_eq!(ledger.chain()[0].index, 1);
}

#[test]
fn test_return_index_matches_sealed_block() {
    let mut ledger = Ledger::new();
    for _ in 0..3 {
        let promised = ledger.new_transaction("A", "B", 1);
        let sealed = ledger.seal_block(0).index;
        assert_eq!(promised, sealed);
    }
}

#[test]
fn test_independent_ledgers_do_not_share_pending() {
    let mut first = Ledger::new();
    let second = Ledger::new();

    first.new_transaction("A", "B", 5);
    assert_eq!(first.pending_transactions().len(), 1);
    assert!(second.pending_transactions().is_empty());
}

#[test]
fn test_mutating_pending_after_seal_leaves_block_intact() {
    let mut ledger = Ledger::new();
    ledger.new_transaction("A", "B", 5);
    let sealed_hash = ledger.seal_block(100).hash();

    for amount in 0..10 {
        ledger.new_transaction("X", "Y", amount);
    }

    let sealed = ledger.block(2).unwrap();
    assert_eq!(sealed.transactions.len(), 1);
    assert_eq!(sealed.hash(), sealed_hash);
    assert_eq!(ledger.pending_transactions().len(), 10);
}

#[test]
fn test_hash_of_unappended_block() {
    let ledger = Ledger::new();
    let candidate = Block::new(
        2,
        ledger.last_block().hash(),
        42,
        vec![Transaction::new("A", "B", 5)],
    );

    let hash = Ledger::hash(&candidate);
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, Ledger::hash(&candidate));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_block_json_round_trip_keeps_hash() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();
    ledger.new_transaction("A", "B", 5);
    let block = ledger.seal_block(100).clone();

    let parsed: Block = serde_json::from_str(&block.canonical_json())?;
    assert_eq!(parsed, block);
    assert_eq!(parsed.hash(), block.hash());
    Ok(())
}

#[test]
fn test_broken_override_is_detected() {
    let mut ledger = Ledger::new();
    ledger.seal_block(1);
    ledger.new_block(2, Some("0".repeat(64)));

    assert_eq!(
        validate_chain(ledger.chain()),
        Err(ChainError::InvalidBlockLinkage { index: 3 })
    );
}

#[test]
fn test_shared_ledger_across_threads() {
    let ledger = SharedLedger::new();
    let writer = ledger.clone();

    let handle = std::thread::spawn(move || {
        for i in 0..50 {
            writer.new_transaction("A", "B", i);
        }
        writer.seal_block(7)
    });
    let block = handle.join().unwrap();

    assert_eq!(block.index, 2);
    assert_eq!(block.transactions.len(), 50);
    assert_eq!(ledger.last_block(), block);
    assert!(ledger.validate().is_ok());
}
