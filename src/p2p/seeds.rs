//! Seed Node Configuration
//!
//! Hardcoded bootstrap nodes for initial peer discovery.
//! New nodes connect to these first to discover the rest of the network.
//! Resolving DNS seeds is left to the networking layer.

use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// One week in seconds
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Compiled-in fixed seed: raw 16-byte address (IPv4 addresses are
/// IPv4-mapped) and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    /// Fixed seed for an IPv4 host
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// A peer address with the time it was last seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    pub addr: SocketAddr,
    /// Seconds since Unix epoch
    pub last_seen: i64,
}

/// Labelled DNS seed hostname
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// Mainnet fixed seeds
pub const MAIN_FIXED_SEEDS: &[SeedSpec] = &[
    SeedSpec::ipv4(45, 76, 123, 6, 11115),
    SeedSpec::ipv4(140, 82, 56, 180, 11115),
    SeedSpec::ipv4(80, 240, 20, 62, 11115),
    SeedSpec::ipv4(45, 77, 85, 8, 11115),
    SeedSpec::ipv4(45, 32, 176, 163, 11115),
    SeedSpec::ipv4(173, 212, 227, 202, 11115),
    SeedSpec::ipv4(95, 179, 207, 150, 11115),
];

/// Testnet fixed seeds
pub const TEST_FIXED_SEEDS: &[SeedSpec] = &[SeedSpec::ipv4(45, 76, 123, 6, 39795)];

/// Mainnet DNS seeds
pub const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("1", "45.76.123.6"),
    DnsSeed::new("2", "140.82.56.180"),
    DnsSeed::new("3", "80.240.20.62"),
    DnsSeed::new("4", "45.77.85.8"),
    DnsSeed::new("5", "45.32.176.163"),
    DnsSeed::new("6", "173.212.227.202"),
    DnsSeed::new("7", "95.179.207.150"),
];

/// Testnet DNS seeds (single node)
pub const TEST_DNS_SEEDS: &[DnsSeed] = &[DnsSeed::new("1", "45.76.123.6")];

/// Turn compiled seeds into address records.
///
/// Each record gets a last-seen time between one and two weeks before `now`,
/// so addresses learned from live peers (which are fresher) win during
/// address selection and seeds are only used to bootstrap.
pub fn convert_seeds<R: Rng + ?Sized>(specs: &[SeedSpec], now: i64, rng: &mut R) -> Vec<AddressRecord> {
    specs
        .iter()
        .map(|spec| AddressRecord {
            addr: spec.socket_addr(),
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect()
}
