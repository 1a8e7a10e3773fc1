//! Checkpoint table
//!
//! Pinned (height, hash) pairs plus the statistics consumers use to estimate
//! sync progress past the last checkpoint. The table only stores data;
//! rejecting forks below a checkpoint is the validation layer's job.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::crypto::Hash;

/// Checkpoint construction errors
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint heights must be strictly increasing: {height} follows {previous}")]
    NotIncreasing { previous: u32, height: u32 },
    #[error("Invalid checkpoint hash at height {height}: {source}")]
    InvalidHash {
        height: u32,
        source: hex::FromHexError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<u32, Hash>,
    /// UNIX timestamp of the last checkpoint block
    last_checkpoint_time: i64,
    /// Total transactions between genesis and the last checkpoint
    transactions_at_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    transactions_per_day: f64,
}

impl CheckpointTable {
    /// Build a table from literal entries, which must be listed in strictly
    /// increasing height order.
    pub fn new(
        entries: &[(u32, &str)],
        last_checkpoint_time: i64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, CheckpointError> {
        let mut checkpoints = BTreeMap::new();
        let mut previous: Option<u32> = None;

        for &(height, hash) in entries {
            if let Some(previous) = previous {
                if height <= previous {
                    return Err(CheckpointError::NotIncreasing { previous, height });
                }
            }
            let hash = Hash::from_hex(hash)
                .map_err(|source| CheckpointError::InvalidHash { height, source })?;
            checkpoints.insert(height, hash);
            previous = Some(height);
        }

        Ok(Self {
            checkpoints,
            last_checkpoint_time,
            transactions_at_last_checkpoint,
            transactions_per_day,
        })
    }

    /// Expected hash at `height`, if it is checkpointed
    pub fn get(&self, height: u32) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    /// Checkpoints in height order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash)> + '_ {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn heights(&self) -> Vec<u32> {
        self.checkpoints.keys().copied().collect()
    }

    /// Highest checkpoint
    pub fn last_checkpoint(&self) -> Option<(u32, &Hash)> {
        self.checkpoints.iter().next_back().map(|(height, hash)| (*height, hash))
    }

    /// Height of the highest checkpoint, the lower bound on the chain height
    /// a syncing node can expect.
    pub fn total_blocks_estimate(&self) -> u32 {
        self.last_checkpoint().map(|(height, _)| height).unwrap_or(0)
    }

    pub fn last_checkpoint_time(&self) -> i64 {
        self.last_checkpoint_time
    }

    pub fn transactions_at_last_checkpoint(&self) -> u64 {
        self.transactions_at_last_checkpoint
    }

    pub fn transactions_per_day(&self) -> f64 {
        self.transactions_per_day
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
