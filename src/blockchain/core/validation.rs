use crate::blockchain::core::chain::{Block, GENESIS_PREVIOUS_HASH};
use crate::error::ChainError;

/// Check the structural invariants of a chain: a genesis block at index 1
/// carrying the sentinel previous hash, then indices increasing by one with
/// each block pointing at the hash of its predecessor.
///
/// Proof values are not inspected.
pub fn validate_chain(blocks: &[Block]) -> Result<(), ChainError> {
    let genesis = blocks.first().ok_or(ChainError::EmptyChain)?;

    if genesis.index != 1 {
        return Err(ChainError::InvalidBlock(format!(
            "Genesis block must have index 1, but got {}.",
            genesis.index
        )));
    }

    if genesis.previous_hash != GENESIS_PREVIOUS_HASH {
        return Err(ChainError::InvalidBlock(format!(
            "Genesis previous hash must be {:?}, but got {:?}.",
            GENESIS_PREVIOUS_HASH, genesis.previous_hash
        )));
    }

    for pair in blocks.windows(2) {
        validate_successor(&pair[0], &pair[1])?;
    }
    Ok(())
}

/// Check that `block` may directly follow `previous`.
pub fn validate_successor(previous: &Block, block: &Block) -> Result<(), ChainError> {
    if block.index != previous.index + 1 {
        return Err(ChainError::InvalidBlock(format!(
            "Invalid block index. Expected {}, but got {}.",
            previous.index + 1,
            block.index
        )));
    }

    if block.previous_hash != previous.hash() {
        return Err(ChainError::InvalidBlockLinkage { index: block.index });
    }
    Ok(())
}
