//! Per-network values
//!
//! Main is the complete template. Test, RegTest and UnitTest are each written
//! as the list of fields they change, applied with struct update syntax on
//! top of their parent (Test and UnitTest on Main, RegTest on Test), so every
//! field not listed is inherited unchanged.

use primitive_types::U256;
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::COIN;
use crate::consensus::{compact_to_target, CheckpointError, CheckpointTable, Script, OP_CHECKSIG};
use crate::crypto::{check_address_version, decode_public_key, HeaderHasher, KeyError};
use crate::node::{build_genesis_block, verify_genesis, GenesisDescriptor, GenesisError, PinnedGenesis};
use crate::p2p::{
    convert_seeds, AddressRecord, SeedSpec, MAIN_DNS_SEEDS, MAIN_FIXED_SEEDS, TEST_DNS_SEEDS,
    TEST_FIXED_SEEDS,
};
use crate::params::{Base58Prefixes, ChainParams, Network};

/// Parameter construction errors
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error(transparent)]
    Genesis(#[from] GenesisError),
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error("{network} genesis target exceeds the proof-of-work limit")]
    GenesisTargetAbovePowLimit { network: Network },
}

const GENESIS_MESSAGE: &str =
    "When the Internet first came, I thought it was just the beacon of freedom - 2018";
const GENESIS_OUTPUT_KEY: &str = "049c4bf0b18b4b968c1136fa1fed29a02192eb4f7d249975e71dd955d6672c3b883e3f60442846747039b1065fb56c89177df6b09b46f71c8f8a02b7807aa42e42";

pub(crate) const MAIN_GENESIS_PINNED: PinnedGenesis = PinnedGenesis {
    hash: "0x000001c4cc44c869aa98776e0802a274716661a54c16fedde8b7c509ef46e5a1",
    merkle_root: "0x15e4c6108db65fcfe9a92603d445c9ed90062d3b213706e386d4808b9acc6710",
};

pub(crate) const TEST_GENESIS_PINNED: PinnedGenesis = PinnedGenesis {
    hash: "0x0000fba7e26b7f3d40dc6d726dc87a3fd94bfc26e6c57fa5c000a47300675e25",
    merkle_root: "0x15e4c6108db65fcfe9a92603d445c9ed90062d3b213706e386d4808b9acc6710",
};

const MAIN_ALERT_KEY: &str = "0438d21f5d5e1677c2805e2b623faf4c530214efeaafec04802aafe1895936a12741794eeb06d964196ab84bac40b7885b7b2c1b5824fb157591a84b13835d23ad";
const TEST_ALERT_KEY: &str = "043e8760d1c9ef3af5a5e49796afe4389a5cb53c6028b54b9af0a152f34762e453615a1aab9260a31045b85f87d4de36bbe6fd04478fcc103fd47c8e1b813c3d3c";

const MAIN_SPORK_KEY: &str = "042CE3703CAEA046C467265B8C47AD53DBE91FA5CABB31C4E7A34FEBADEA33E8D1B5025260EB26B18D5E3F9EFABB8C773A5CC64D09683228EE5C96A7AA487CB2D7";
const TEST_SPORK_KEY: &str = "04d32fcf0e8ca12ae8cbed1e8fba544b995901a7fb259acc545fec89d2f65a05b3d280fc7b4eb032f7e8618aba98d6ba56b02857ed322eb7d228f9d0450b278144";

//   What makes a good checkpoint block?
// + Is surrounded by blocks with reasonable timestamps
//   (no blocks before with a timestamp after, none after with
//    timestamp before)
// + Contains no strange transactions
const MAIN_CHECKPOINTS: &[(u32, &str)] = &[
    (0, "0x000001c4cc44c869aa98776e0802a274716661a54c16fedde8b7c509ef46e5a1"),
    (42139, "0xabd6db4cfad725450ebf6657b96efd245cc6aa8f49025a10f43c02e66a830bf6"),
    (69281, "0x821d5dc10299970ab4ef47d9525fc74b0203217fb6ab3bddf432ca73cf134e3d"),
    (72027, "0x2cb9695dfefa1307688c0c8949bb584ce7b7892eb493fb58b3da3f033fda5891"),
    (79265, "0x01bad27b39a61ae444ca48f822381554975322c2a54a6e4ac464936035e9c296"),
    (104151, "0x21f716b8560aa6ca7eb15607a733bf893156461c012f5182542b6b823b03335a"),
    (108186, "0xe8bf22c59957cfe1bb28173a65733bee4405f4d0068eab1121deafd36d2bcc54"),
];

const TEST_CHECKPOINTS: &[(u32, &str)] = &[(
    0,
    "0x3ff088781f162dd56e9e773bc697d31fb20ffba091aa6cb68d611c2af0040735",
)];

const REGTEST_CHECKPOINTS: &[(u32, &str)] = &[(0, "0x001")];

pub(crate) fn main_genesis() -> Result<GenesisDescriptor, KeyError> {
    let output_key = decode_public_key(GENESIS_OUTPUT_KEY)?;
    Ok(GenesisDescriptor {
        timestamp_message: GENESIS_MESSAGE,
        reward_script: Script::new().push_slice(&output_key).push_opcode(OP_CHECKSIG),
        reward: COIN,
        version: 1,
        time: 1539514947,
        bits: 0x1e0ffff0,
        nonce: 6474599,
    })
}

/// Main's genesis moved to a later start
pub(crate) fn test_genesis() -> Result<GenesisDescriptor, KeyError> {
    Ok(GenesisDescriptor {
        time: 1548384672,
        nonce: 519,
        ..main_genesis()?
    })
}

pub(crate) fn regtest_genesis() -> Result<GenesisDescriptor, KeyError> {
    Ok(GenesisDescriptor {
        time: 1524873600,
        bits: 0x207fffff,
        nonce: 906460,
        ..test_genesis()?
    })
}

fn seeds<R: Rng + ?Sized>(network: Network, specs: &[SeedSpec], now: i64, rng: &mut R) -> Vec<AddressRecord> {
    let records = convert_seeds(specs, now, rng);
    debug!(%network, count = records.len(), "converted fixed seeds");
    records
}

pub(crate) fn main_params<R: Rng + ?Sized>(
    hasher: &dyn HeaderHasher,
    now: i64,
    rng: &mut R,
) -> Result<ChainParams, ParamsError> {
    let genesis = build_genesis_block(&main_genesis()?);
    let genesis_hash = verify_genesis(Network::Main, &genesis, hasher, &MAIN_GENESIS_PINNED)?;

    Ok(ChainParams {
        network: Network::Main,
        message_start: [0xee, 0xff, 0x00, 0x06],
        alert_pubkey: decode_public_key(MAIN_ALERT_KEY)?,
        default_port: 11115,
        // Starting difficulty is 1 / 2^12
        proof_of_work_limit: U256::MAX >> 20usize,
        subsidy_halving_interval: 9999999,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 0,
        target_timespan: 70,
        target_spacing: 70,
        last_pow_block: 200,
        maturity: 15,
        masternode_count_drift: 20,
        masternode_collateral_limit: 10000,
        // Fake stake update
        modifier_update_block: 106000,
        max_money_out: 84_000_000 * COIN,
        genesis: Arc::new(genesis),
        genesis_hash,
        checkpoints: Arc::new(CheckpointTable::new(MAIN_CHECKPOINTS, 1548592815, 297530, 2000.0)?),
        base58_prefixes: Base58Prefixes {
            pubkey_address: 85,
            script_address: 33,
            secret_key: 28,
            ext_public_key: [0x02, 0x2d, 0x25, 0x33],
            ext_secret_key: [0x02, 0x21, 0x31, 0x2b],
            ext_coin_type: [0x80, 0x00, 0x00, 0x77],
        },
        fixed_seeds: seeds(Network::Main, MAIN_FIXED_SEEDS, now, rng),
        dns_seeds: MAIN_DNS_SEEDS.to_vec(),
        require_rpc_password: true,
        mining_requires_peers: false,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: true,
        testnet_to_be_deprecated_field_rpc: false,
        headers_first_syncing_active: false,
        pool_max_transactions: 3,
        spork_key: MAIN_SPORK_KEY,
        obfuscation_pool_dummy_address: "bJQHboDZUH8GmxpcQHHt7it3uwwahV2zs3",
        start_masternode_payments: 1539514947,
    })
}

pub(crate) fn test_params<R: Rng + ?Sized>(
    main: &ChainParams,
    hasher: &dyn HeaderHasher,
    now: i64,
    rng: &mut R,
) -> Result<ChainParams, ParamsError> {
    let genesis = build_genesis_block(&test_genesis()?);
    let genesis_hash = verify_genesis(Network::Test, &genesis, hasher, &TEST_GENESIS_PINNED)?;

    Ok(ChainParams {
        network: Network::Test,
        message_start: [0x41, 0x4d, 0x5e, 0x78],
        alert_pubkey: decode_public_key(TEST_ALERT_KEY)?,
        default_port: 39795,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 51,
        reject_block_outdated_majority: 75,
        to_check_block_upgrade_majority: 100,
        miner_threads: 0,
        target_timespan: 60,
        target_spacing: 60,
        last_pow_block: 200,
        maturity: 15,
        masternode_count_drift: 4,
        masternode_collateral_limit: 10000,
        modifier_update_block: 500,
        max_money_out: 43_199_500 * COIN,
        genesis: Arc::new(genesis),
        genesis_hash,
        checkpoints: Arc::new(CheckpointTable::new(TEST_CHECKPOINTS, 1546854438, 79227, 5000.0)?),
        base58_prefixes: Base58Prefixes {
            pubkey_address: 139,
            script_address: 19,
            secret_key: 239,
            ext_public_key: [0x3a, 0x80, 0x61, 0xa0],
            ext_secret_key: [0x3a, 0x80, 0x58, 0x37],
            ext_coin_type: [0x80, 0x00, 0x00, 0x01],
        },
        fixed_seeds: seeds(Network::Test, TEST_FIXED_SEEDS, now, rng),
        dns_seeds: TEST_DNS_SEEDS.to_vec(),
        require_rpc_password: true,
        mining_requires_peers: false,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: true,
        testnet_to_be_deprecated_field_rpc: true,
        pool_max_transactions: 2,
        spork_key: TEST_SPORK_KEY,
        obfuscation_pool_dummy_address: "xxVKdbxVogrXrPLMo2qEEyCm1GRv2KZCLy",
        start_masternode_payments: 1524873600,
        ..main.clone()
    })
}

/// RegTest's genesis is not pinned, so it can be regenerated while
/// developing; whatever the hasher yields is accepted.
pub(crate) fn regtest_params(test: &ChainParams, hasher: &dyn HeaderHasher) -> Result<ChainParams, ParamsError> {
    let genesis = build_genesis_block(&regtest_genesis()?);
    let genesis_hash = genesis.header.hash_with(hasher);
    warn!(network = %Network::RegTest, hash = %genesis_hash, "genesis block accepted unverified");

    Ok(ChainParams {
        network: Network::RegTest,
        message_start: [0x2d, 0x53, 0x6f, 0x40],
        subsidy_halving_interval: 150,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 1,
        target_timespan: 24 * 60 * 60,
        target_spacing: 60,
        proof_of_work_limit: U256::MAX >> 1usize,
        genesis: Arc::new(genesis),
        genesis_hash,
        default_port: 39793,
        checkpoints: Arc::new(CheckpointTable::new(REGTEST_CHECKPOINTS, 1524873600, 0, 100.0)?),
        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),
        require_rpc_password: false,
        mining_requires_peers: false,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,
        ..test.clone()
    })
}

/// Main with seeds cleared and developer-friendly flags. Shares Main's
/// genesis block and checkpoints.
pub(crate) fn unit_test_params(main: &ChainParams) -> ChainParams {
    ChainParams {
        network: Network::UnitTest,
        default_port: 39791,
        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),
        require_rpc_password: false,
        mining_requires_peers: false,
        default_consistency_checks: true,
        allow_min_difficulty_blocks: false,
        mine_blocks_on_demand: true,
        ..main.clone()
    }
}

/// Cross-field checks every record must pass before it is handed out
pub(crate) fn check_consistency(params: &ChainParams) -> Result<(), ParamsError> {
    decode_public_key(params.spork_key)?;
    check_address_version(
        params.obfuscation_pool_dummy_address,
        params.base58_prefixes.pubkey_address,
    )?;

    match compact_to_target(params.genesis.header.bits) {
        Some(target) if target <= params.proof_of_work_limit => Ok(()),
        _ => Err(ParamsError::GenesisTargetAbovePowLimit {
            network: params.network,
        }),
    }
}
