//! The per-network parameter record
//!
//! Every field is read through an accessor. Records are immutable once
//! built; the only write path is `UnitTestParams`, which the node context
//! hands out for the unit-test network alone.

use primitive_types::U256;
use std::sync::Arc;

use crate::consensus::{Amount, Block, CheckpointTable};
use crate::crypto::Hash;
use crate::p2p::{AddressRecord, DnsSeed};
use crate::params::Network;

/// Kinds of Base58 prefix a network defines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

/// Address-encoding version bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    pub ext_coin_type: [u8; 4],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => std::slice::from_ref(&self.pubkey_address),
            Base58Type::ScriptAddress => std::slice::from_ref(&self.script_address),
            Base58Type::SecretKey => std::slice::from_ref(&self.secret_key),
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }
}

/// Consensus and protocol constants for one network
#[derive(Debug, Clone, PartialEq)]
pub struct ChainParams {
    pub(crate) network: Network,
    pub(crate) message_start: [u8; 4],
    pub(crate) alert_pubkey: Vec<u8>,
    pub(crate) default_port: u16,
    pub(crate) proof_of_work_limit: U256,
    pub(crate) subsidy_halving_interval: u32,
    pub(crate) max_reorganization_depth: u32,
    pub(crate) enforce_block_upgrade_majority: u32,
    pub(crate) reject_block_outdated_majority: u32,
    pub(crate) to_check_block_upgrade_majority: u32,
    pub(crate) miner_threads: u32,
    pub(crate) target_timespan: i64,
    pub(crate) target_spacing: i64,
    pub(crate) last_pow_block: u32,
    pub(crate) maturity: u32,
    pub(crate) masternode_count_drift: u32,
    pub(crate) masternode_collateral_limit: u64,
    pub(crate) modifier_update_block: u32,
    pub(crate) max_money_out: Amount,
    pub(crate) genesis: Arc<Block>,
    pub(crate) genesis_hash: Hash,
    pub(crate) checkpoints: Arc<CheckpointTable>,
    pub(crate) base58_prefixes: Base58Prefixes,
    pub(crate) fixed_seeds: Vec<AddressRecord>,
    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) require_rpc_password: bool,
    pub(crate) mining_requires_peers: bool,
    pub(crate) allow_min_difficulty_blocks: bool,
    pub(crate) default_consistency_checks: bool,
    pub(crate) require_standard: bool,
    pub(crate) mine_blocks_on_demand: bool,
    pub(crate) skip_proof_of_work_check: bool,
    pub(crate) testnet_to_be_deprecated_field_rpc: bool,
    pub(crate) headers_first_syncing_active: bool,
    pub(crate) pool_max_transactions: u32,
    pub(crate) spork_key: &'static str,
    pub(crate) obfuscation_pool_dummy_address: &'static str,
    pub(crate) start_masternode_payments: i64,
}

impl ChainParams {
    pub fn network(&self) -> Network {
        self.network
    }

    /// Network identifier string (`main`, `test`, `regtest`, `unittest`)
    pub fn network_id(&self) -> &'static str {
        self.network.name()
    }

    /// Message-start bytes that prefix every P2P message
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Easiest target a block may have
    pub fn proof_of_work_limit(&self) -> U256 {
        self.proof_of_work_limit
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    pub fn max_reorganization_depth(&self) -> u32 {
        self.max_reorganization_depth
    }

    /// Used to check majorities for block version upgrade
    pub fn enforce_block_upgrade_majority(&self) -> u32 {
        self.enforce_block_upgrade_majority
    }

    pub fn reject_block_outdated_majority(&self) -> u32 {
        self.reject_block_outdated_majority
    }

    pub fn to_check_block_upgrade_majority(&self) -> u32 {
        self.to_check_block_upgrade_majority
    }

    /// Default miner threads (0 means one per core)
    pub fn miner_threads(&self) -> u32 {
        self.miner_threads
    }

    pub fn target_timespan(&self) -> i64 {
        self.target_timespan
    }

    pub fn target_spacing(&self) -> i64 {
        self.target_spacing
    }

    /// Blocks per retarget window
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn coinbase_maturity(&self) -> u32 {
        self.maturity
    }

    pub fn masternode_count_drift(&self) -> u32 {
        self.masternode_count_drift
    }

    /// Collateral limit, in whole coins
    pub fn masternode_collateral_limit(&self) -> u64 {
        self.masternode_collateral_limit
    }

    pub fn modifier_update_block(&self) -> u32 {
        self.modifier_update_block
    }

    pub fn max_money_out(&self) -> Amount {
        self.max_money_out
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn fixed_seeds(&self) -> &[AddressRecord] {
        &self.fixed_seeds
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// Whether the miner waits for peers before mining
    pub fn mining_requires_peers(&self) -> bool {
        self.mining_requires_peers
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.allow_min_difficulty_blocks
    }

    /// Whether expensive internal consistency checks run by default
    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    /// Blocks are mined on request rather than continuously
    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }

    pub fn skip_proof_of_work_check(&self) -> bool {
        self.skip_proof_of_work_check
    }

    /// Whether RPC responses still carry the deprecated `testnet` field
    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.testnet_to_be_deprecated_field_rpc
    }

    pub fn headers_first_syncing_active(&self) -> bool {
        self.headers_first_syncing_active
    }

    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    /// Hex-encoded spork public key
    pub fn spork_key(&self) -> &'static str {
        self.spork_key
    }

    pub fn obfuscation_pool_dummy_address(&self) -> &'static str {
        self.obfuscation_pool_dummy_address
    }

    /// UNIX time masternode payments start
    pub fn start_masternode_payments(&self) -> i64 {
        self.start_masternode_payments
    }
}
