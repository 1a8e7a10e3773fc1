//! Genesis block construction and verification
//!
//! A genesis block is fully determined by its descriptor: one coinbase
//! carrying the timestamp message, paying the reward to a fixed script,
//! under a header with no previous block. Networks that pin their genesis
//! refuse to start if the rebuilt block does not hash to the pinned values.

use thiserror::Error;
use tracing::info;

use crate::consensus::{Amount, Block, BlockHeader, Script, Transaction};
use crate::crypto::{Hash, HeaderHasher};
use crate::params::Network;

/// Value pushed first in the genesis coinbase script (Bitcoin's genesis
/// difficulty bits)
const COINBASE_SCRIPT_TAG: i64 = 486604799;

/// Extra nonce pushed after the tag
const COINBASE_EXTRA_NONCE: i64 = 4;

/// Genesis construction errors
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
    #[error("Invalid pinned genesis constant: {0}")]
    InvalidConstant(#[from] hex::FromHexError),
}

/// Everything a genesis block is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisDescriptor {
    pub timestamp_message: &'static str,
    pub reward_script: Script,
    pub reward: Amount,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Pinned genesis hash and merkle root, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedGenesis {
    pub hash: &'static str,
    pub merkle_root: &'static str,
}

/// Build the genesis block described by `descriptor`.
///
/// Deterministic: the same descriptor always yields the same block.
pub fn build_genesis_block(descriptor: &GenesisDescriptor) -> Block {
    let script_sig = Script::new()
        .push_int(COINBASE_SCRIPT_TAG)
        .push_num(COINBASE_EXTRA_NONCE)
        .push_slice(descriptor.timestamp_message.as_bytes());

    let coinbase = Transaction::coinbase(
        script_sig,
        descriptor.reward,
        descriptor.reward_script.clone(),
    );

    let header = BlockHeader {
        version: descriptor.version,
        prev_hash: Hash::zero(),
        merkle_root: Hash::zero(),
        time: descriptor.time,
        bits: descriptor.bits,
        nonce: descriptor.nonce,
    };

    let mut block = Block::new(header, vec![coinbase]);
    block.header.merkle_root = block.compute_merkle_root();
    block
}

/// Check a built genesis block against its pinned constants.
///
/// Returns the block hash on success.
pub fn verify_genesis(
    network: Network,
    block: &Block,
    hasher: &dyn HeaderHasher,
    pinned: &PinnedGenesis,
) -> Result<Hash, GenesisError> {
    let expected_hash = Hash::from_hex(pinned.hash)?;
    let expected_merkle_root = Hash::from_hex(pinned.merkle_root)?;

    let computed = block.header.hash_with(hasher);
    if computed != expected_hash {
        return Err(GenesisError::HashMismatch {
            network,
            expected: expected_hash,
            computed,
        });
    }

    if block.header.merkle_root != expected_merkle_root {
        return Err(GenesisError::MerkleRootMismatch {
            network,
            expected: expected_merkle_root,
            computed: block.header.merkle_root,
        });
    }

    info!(%network, hash = %computed, "genesis block verified");
    Ok(computed)
}
