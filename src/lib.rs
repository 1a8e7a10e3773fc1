//! Beacon Network Parameter Registry
//!
//! Per-network consensus and protocol constants for the Beacon node: the
//! production network, the public test network, a local regression-test
//! network and an in-process unit-test network.
//!
//! At startup the node builds a [`node::ChainParamsRegistry`] with the
//! chain's header hash. Building reconstructs each genesis block and refuses
//! to continue if Main or Test do not match their pinned hashes. A
//! [`node::NetworkContext`] then holds the registry and the active network.

pub mod consensus;
pub mod crypto;
pub mod node;
pub mod p2p;
pub mod params;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: i64 = 100_000_000;
}

pub use node::{ChainParamsRegistry, NetworkContext, NetworkFlags, SelectionError};
pub use params::{ChainParams, Network, ParamsError};
