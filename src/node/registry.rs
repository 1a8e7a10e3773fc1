//! The four materialized parameter records

use rand::rngs::OsRng;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::crypto::HeaderHasher;
use crate::params::{variants, ChainParams, Network, ParamsError};

/// Parameters for every network, built once at startup
///
/// Building verifies Main and Test genesis blocks against their pinned
/// hashes and runs the cross-field checks on every record. Any failure
/// means the binary carries corrupt constants and the node must not start.
#[derive(Debug, Clone)]
pub struct ChainParamsRegistry {
    records: [ChainParams; 4],
}

impl ChainParamsRegistry {
    /// Build all records using the wall clock and the OS random source
    /// for seed ages.
    pub fn build(hasher: &dyn HeaderHasher) -> Result<Self, ParamsError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or_default();
        Self::build_at(hasher, now, &mut OsRng)
    }

    /// Build all records at a fixed time with the given random source
    pub fn build_at<R: Rng + ?Sized>(
        hasher: &dyn HeaderHasher,
        now: i64,
        rng: &mut R,
    ) -> Result<Self, ParamsError> {
        let main = variants::main_params(hasher, now, rng)?;
        let test = variants::test_params(&main, hasher, now, rng)?;
        let regtest = variants::regtest_params(&test, hasher)?;
        let unit_test = variants::unit_test_params(&main);

        let records = [main, test, regtest, unit_test];
        for params in &records {
            variants::check_consistency(params)?;
        }

        info!(networks = records.len(), "chain parameters built");
        Ok(Self { records })
    }

    /// Parameters for `network`, whatever network is active
    pub fn params_for(&self, network: Network) -> &ChainParams {
        &self.records[network.index()]
    }

    pub(crate) fn params_for_mut(&mut self, network: Network) -> &mut ChainParams {
        &mut self.records[network.index()]
    }
}
