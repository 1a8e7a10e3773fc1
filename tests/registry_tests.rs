//! Registry, selection and unit-test mutation behaviour

mod common;

use beacon_params::consensus::CheckpointTable;
use beacon_params::crypto::{DoubleSha256, Hash};
use beacon_params::node::GenesisError;
use beacon_params::p2p::ONE_WEEK;
use beacon_params::params::Base58Type;
use beacon_params::{ChainParamsRegistry, Network, NetworkFlags, ParamsError, SelectionError};
use common::{context, registry, KnownHeaders, GENESIS_MERKLE_ROOT, MAIN_GENESIS_HASH, NOW, TEST_GENESIS_HASH};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PUBLIC_NETWORKS: [Network; 3] = [Network::Main, Network::Test, Network::RegTest];

fn checkpoint_heights(table: &CheckpointTable) -> Vec<u32> {
    table.iter().map(|(height, _)| height).collect()
}

#[test]
fn test_magic_ports_and_prefixes_are_distinct() {
    let registry = registry();

    for (i, a) in PUBLIC_NETWORKS.iter().enumerate() {
        for b in &PUBLIC_NETWORKS[i + 1..] {
            let (pa, pb) = (registry.params_for(*a), registry.params_for(*b));
            assert_ne!(pa.message_start(), pb.message_start(), "{a} / {b} magic");
            assert_ne!(pa.default_port(), pb.default_port(), "{a} / {b} port");
            if (*a, *b) != (Network::Test, Network::RegTest) {
                assert_ne!(pa.base58_prefixes(), pb.base58_prefixes(), "{a} / {b} prefixes");
            }
        }
    }
}

#[test]
fn test_main_and_test_base58_tables_differ_per_kind() {
    let registry = registry();
    let main = registry.params_for(Network::Main);
    let test = registry.params_for(Network::Test);

    for kind in Base58Type::ALL {
        assert_ne!(main.base58_prefix(kind), test.base58_prefix(kind), "{kind:?}");
    }
}

#[test]
fn test_genesis_matches_pinned_constants() {
    let registry = registry();
    let merkle_root = Hash::from_hex(GENESIS_MERKLE_ROOT).unwrap();

    let main = registry.params_for(Network::Main);
    assert_eq!(main.genesis_hash().to_hex(), MAIN_GENESIS_HASH);
    assert_eq!(main.genesis_block().header.merkle_root, merkle_root);

    let test = registry.params_for(Network::Test);
    assert_eq!(test.genesis_hash().to_hex(), TEST_GENESIS_HASH);
    assert_eq!(test.genesis_block().header.merkle_root, merkle_root);
    assert_eq!(test.genesis_block().header.nonce, 519);

    let unit_test = registry.params_for(Network::UnitTest);
    assert_eq!(unit_test.genesis_hash(), main.genesis_hash());
}

#[test]
fn test_regtest_genesis_is_accepted_unverified() {
    let registry = registry();
    let regtest = registry.params_for(Network::RegTest);

    let header = &regtest.genesis_block().header;
    assert_eq!((header.time, header.bits, header.nonce), (1524873600, 0x207fffff, 906460));
    assert_eq!(regtest.genesis_hash(), header.hash_with(&KnownHeaders::new()));
}

#[test]
fn test_build_fails_with_wrong_header_hash() {
    let err = ChainParamsRegistry::build(&DoubleSha256).unwrap_err();
    assert!(matches!(
        err,
        ParamsError::Genesis(GenesisError::HashMismatch { network: Network::Main, .. })
    ));
}

#[test]
fn test_checkpoints_strictly_increasing() {
    let registry = registry();

    for network in Network::ALL {
        let heights = checkpoint_heights(registry.params_for(network).checkpoints());
        assert!(!heights.is_empty(), "{network} has no checkpoints");
        assert!(heights.windows(2).all(|w| w[0] < w[1]), "{network}: {heights:?}");
    }
}

#[test]
fn test_checkpoint_tables() {
    let registry = registry();

    let main = registry.params_for(Network::Main).checkpoints();
    assert_eq!(main.len(), 7);
    assert_eq!(main.get(0).unwrap().to_hex(), MAIN_GENESIS_HASH);
    assert_eq!(main.total_blocks_estimate(), 108186);
    assert_eq!(main.last_checkpoint_time(), 1548592815);
    assert_eq!(main.transactions_at_last_checkpoint(), 297530);

    let regtest = registry.params_for(Network::RegTest).checkpoints();
    assert_eq!(regtest.get(0), Some(&Hash::from_hex("0x001").unwrap()));
    assert_eq!(regtest.transactions_per_day(), 100.0);

    assert_eq!(registry.params_for(Network::UnitTest).checkpoints(), main);
}

#[test]
fn test_test_inherits_from_main() {
    let registry = registry();
    let main = registry.params_for(Network::Main);
    let test = registry.params_for(Network::Test);

    assert_eq!(test.proof_of_work_limit(), main.proof_of_work_limit());
    assert_eq!(test.subsidy_halving_interval(), main.subsidy_halving_interval());
    assert_eq!(test.headers_first_syncing_active(), main.headers_first_syncing_active());
    assert_eq!(test.skip_proof_of_work_check(), main.skip_proof_of_work_check());
    assert_eq!(test.max_reorganization_depth(), main.max_reorganization_depth());
    assert_eq!(test.last_pow_block(), main.last_pow_block());
    assert_eq!(test.coinbase_maturity(), main.coinbase_maturity());
    assert_eq!(test.masternode_collateral_limit(), main.masternode_collateral_limit());

    assert_eq!(test.enforce_block_upgrade_majority(), 51);
    assert_eq!(test.interval(), 1);
    assert_eq!(test.max_money_out(), 43_199_500 * beacon_params::constants::COIN);
}

#[test]
fn test_regtest_inherits_from_test() {
    let registry = registry();
    let test = registry.params_for(Network::Test);
    let regtest = registry.params_for(Network::RegTest);

    assert_eq!(regtest.alert_pubkey(), test.alert_pubkey());
    assert_eq!(regtest.base58_prefixes(), test.base58_prefixes());
    assert_eq!(regtest.max_money_out(), test.max_money_out());
    assert_eq!(regtest.modifier_update_block(), test.modifier_update_block());
    assert_eq!(regtest.masternode_count_drift(), test.masternode_count_drift());
    assert_eq!(regtest.pool_max_transactions(), test.pool_max_transactions());
    assert_eq!(regtest.spork_key(), test.spork_key());
    assert_eq!(regtest.obfuscation_pool_dummy_address(), test.obfuscation_pool_dummy_address());
    assert_eq!(regtest.start_masternode_payments(), test.start_masternode_payments());

    assert_eq!(regtest.subsidy_halving_interval(), 150);
    assert_eq!(regtest.miner_threads(), 1);
    assert_eq!(regtest.interval(), 1440);
    assert!(regtest.fixed_seeds().is_empty());
    assert!(regtest.dns_seeds().is_empty());
    assert!(regtest.mine_blocks_on_demand());
    assert!(!regtest.require_rpc_password());
}

#[test]
fn test_unit_test_inherits_from_main() {
    let registry = registry();
    let main = registry.params_for(Network::Main);
    let unit_test = registry.params_for(Network::UnitTest);

    assert_eq!(unit_test.network_id(), "unittest");
    assert_eq!(unit_test.message_start(), main.message_start());
    assert_eq!(unit_test.base58_prefixes(), main.base58_prefixes());
    assert_eq!(unit_test.subsidy_halving_interval(), main.subsidy_halving_interval());
    assert_eq!(unit_test.default_port(), 39791);
    assert!(unit_test.fixed_seeds().is_empty());
    assert!(unit_test.default_consistency_checks());
    assert!(unit_test.mine_blocks_on_demand());
}

#[test]
fn test_main_seeds() {
    let registry = registry();
    let main = registry.params_for(Network::Main);

    assert_eq!(main.fixed_seeds().len(), 7);
    assert!(main.fixed_seeds().iter().all(|seed| seed.addr.port() == 11115 && seed.addr.is_ipv4()));
    assert_eq!(main.dns_seeds().len(), 7);
    assert_eq!(registry.params_for(Network::Test).fixed_seeds().len(), 1);
}

#[test]
fn test_seed_ages_are_between_one_and_two_weeks() {
    let mut rng = StdRng::seed_from_u64(7);
    let registry = ChainParamsRegistry::build_at(&KnownHeaders::new(), NOW, &mut rng).unwrap();

    for network in Network::ALL {
        for seed in registry.params_for(network).fixed_seeds() {
            let age = NOW - seed.last_seen;
            assert!((ONE_WEEK..=2 * ONE_WEEK).contains(&age), "{network}: age {age}");
        }
    }
}

#[test]
fn test_params_for_is_idempotent() {
    let registry = registry();
    for network in Network::ALL {
        assert_eq!(registry.params_for(network), registry.params_for(network));
    }
}

#[test]
fn test_current_requires_selection() {
    let mut ctx = context();
    assert_eq!(ctx.active(), None);
    assert_eq!(ctx.current().unwrap_err(), SelectionError::NoNetworkSelected);

    ctx.select(Network::Test);
    assert_eq!(ctx.current().unwrap().network(), Network::Test);

    ctx.select(Network::Main);
    assert_eq!(ctx.current().unwrap().default_port(), 11115);
}

#[test]
fn test_mutation_gated_to_unit_test() {
    let mut ctx = context();
    assert_eq!(ctx.unit_test_params_mut().err(), Some(SelectionError::NoNetworkSelected));

    for active in PUBLIC_NETWORKS {
        ctx.select(active);
        assert_eq!(
            ctx.unit_test_params_mut().err(),
            Some(SelectionError::NotUnitTest { active })
        );
    }
}

#[test]
fn test_unit_test_mutation_is_isolated() {
    let mut ctx = context();
    let before: Vec<_> = PUBLIC_NETWORKS.iter().map(|n| ctx.params_for(*n).clone()).collect();

    ctx.select(Network::UnitTest);
    {
        let mut params = ctx.unit_test_params_mut().unwrap();
        params.set_subsidy_halving_interval(500);
        params.set_enforce_block_upgrade_majority(1);
        params.set_reject_block_outdated_majority(2);
        params.set_to_check_block_upgrade_majority(3);
        params.set_default_consistency_checks(false);
        params.set_allow_min_difficulty_blocks(true);
        params.set_skip_proof_of_work_check(false);
        assert_eq!(params.subsidy_halving_interval(), 500);
    }

    let current = ctx.current().unwrap();
    assert_eq!(current.subsidy_halving_interval(), 500);
    assert_eq!(
        (
            current.enforce_block_upgrade_majority(),
            current.reject_block_outdated_majority(),
            current.to_check_block_upgrade_majority(),
        ),
        (1, 2, 3)
    );
    assert!(!current.default_consistency_checks());
    assert!(current.allow_min_difficulty_blocks());
    assert!(!current.skip_proof_of_work_check());

    for (network, record) in PUBLIC_NETWORKS.iter().zip(&before) {
        assert_eq!(ctx.params_for(*network), record, "{network} changed");
    }
}

#[test]
fn test_conflicting_flags_leave_no_network_active() {
    let mut ctx = context();
    let err = ctx.select_from_args(["beacond", "-testnet", "-regtest"]).unwrap_err();
    assert_eq!(err, SelectionError::ConflictingNetworks);
    assert_eq!(ctx.active(), None);
}

#[test]
fn test_rejected_selection_keeps_previous_network() {
    let mut ctx = context();
    ctx.select(Network::Test);

    let flags = NetworkFlags { testnet: true, regtest: true };
    assert!(ctx.select_from_flags(flags).is_err());
    assert!(ctx.select_from_args(["-regtest=yes"]).is_err());
    assert_eq!(ctx.active(), Some(Network::Test));
}

#[test]
fn test_select_from_args() {
    let mut ctx = context();
    assert_eq!(ctx.select_from_args(["beacond"]).unwrap(), Network::Main);
    assert_eq!(ctx.select_from_args(["beacond", "--regtest"]).unwrap(), Network::RegTest);
    assert_eq!(ctx.current().unwrap().network(), Network::RegTest);
}

#[test]
fn test_flags_from_config_document() {
    let flags: NetworkFlags = serde_json::from_str(r#"{ "testnet": true }"#).unwrap();
    assert_eq!(flags.resolve().unwrap(), Network::Test);

    let flags: NetworkFlags = serde_json::from_str("{}").unwrap();
    assert_eq!(flags.resolve().unwrap(), Network::Main);

    let network: Network = serde_json::from_str(r#""regtest""#).unwrap();
    assert_eq!(network, Network::RegTest);
    assert_eq!("unittest".parse::<Network>().unwrap(), Network::UnitTest);
}
