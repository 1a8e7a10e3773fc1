//! Shared fixtures for the integration tests

#![allow(dead_code)]

use beacon_params::crypto::{sha256d, Hash, HeaderHasher};
use beacon_params::{ChainParamsRegistry, NetworkContext};
use tracing_subscriber::EnvFilter;

/// Serialized Main genesis header
pub const MAIN_GENESIS_HEADER: &str = "01000000000000000000000000000000000000000000000000000000000000000000000010\
    67cc9a8b80d486e30637213b2d0690edc945d40326a9e9cf5fb68d10c6e4154322c35bf0ff0f1e67cb6200";

/// Serialized Test genesis header
pub const TEST_GENESIS_HEADER: &str = "01000000000000000000000000000000000000000000000000000000000000000000000010\
    67cc9a8b80d486e30637213b2d0690edc945d40326a9e9cf5fb68d10c6e415a0794a5cf0ff0f1e07020000";

pub const MAIN_GENESIS_HASH: &str = "000001c4cc44c869aa98776e0802a274716661a54c16fedde8b7c509ef46e5a1";
pub const TEST_GENESIS_HASH: &str = "0000fba7e26b7f3d40dc6d726dc87a3fd94bfc26e6c57fa5c000a47300675e25";
pub const GENESIS_MERKLE_ROOT: &str = "15e4c6108db65fcfe9a92603d445c9ed90062d3b213706e386d4808b9acc6710";

/// Fixed point in time used for seed ages
pub const NOW: i64 = 1_700_000_000;

/// Header hasher that knows the chain's digests for the two pinned genesis
/// headers and falls back to double-SHA256 for anything else
pub struct KnownHeaders {
    known: Vec<(Vec<u8>, Hash)>,
}

impl KnownHeaders {
    pub fn new() -> Self {
        let entry = |header: &str, hash: &str| {
            (
                hex::decode(header).expect("valid header hex"),
                Hash::from_hex(hash).expect("valid hash hex"),
            )
        };
        Self {
            known: vec![
                entry(MAIN_GENESIS_HEADER, MAIN_GENESIS_HASH),
                entry(TEST_GENESIS_HEADER, TEST_GENESIS_HASH),
            ],
        }
    }
}

impl HeaderHasher for KnownHeaders {
    fn hash_header(&self, header: &[u8]) -> Hash {
        self.known
            .iter()
            .find(|(bytes, _)| bytes.as_slice() == header)
            .map(|(_, hash)| *hash)
            .unwrap_or_else(|| sha256d(header))
    }
}

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn registry() -> ChainParamsRegistry {
    init_tracing();
    ChainParamsRegistry::build(&KnownHeaders::new()).expect("registry builds")
}

pub fn context() -> NetworkContext {
    NetworkContext::new(registry())
}
