//! Network selection input
//!
//! Two mutually exclusive switches pick the network: `-testnet` and
//! `-regtest`. Neither means Main. They arrive either from the command line
//! in the usual node style (`-testnet`, `--regtest=1`, `-notestnet`) or from
//! a config document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Network;

/// Network selection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworks,
    #[error("Invalid value for -{flag}: {value:?}")]
    InvalidFlagValue { flag: &'static str, value: String },
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("No network has been selected")]
    NoNetworkSelected,
    #[error("Parameters are only writable on the unittest network (active: {active})")]
    NotUnitTest { active: Network },
}

const TESTNET: &str = "testnet";
const REGTEST: &str = "regtest";

/// Requested network switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkFlags {
    pub testnet: bool,
    pub regtest: bool,
}

impl NetworkFlags {
    /// Read the switches from command-line arguments.
    ///
    /// Arguments other than the two switches are skipped, so the full
    /// process argument list can be passed. A later occurrence overrides an
    /// earlier one.
    pub fn from_args<I, S>(args: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();

        for arg in args {
            let arg = arg.as_ref();
            let Some(option) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
                continue;
            };

            let (name, value) = match option.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (option, None),
            };

            // -noX is the negation of -X
            let (name, negated) = match name.strip_prefix("no") {
                Some(rest) if rest == TESTNET || rest == REGTEST => (rest, true),
                _ => (name, false),
            };

            let (flag, slot) = match name {
                TESTNET => (TESTNET, &mut flags.testnet),
                REGTEST => (REGTEST, &mut flags.regtest),
                _ => continue,
            };

            let enabled = match value {
                None | Some("") | Some("1") | Some("true") => true,
                Some("0") | Some("false") => false,
                Some(other) => {
                    return Err(SelectionError::InvalidFlagValue {
                        flag,
                        value: other.to_string(),
                    })
                }
            };
            *slot = enabled != negated;
        }

        Ok(flags)
    }

    /// The network the switches ask for
    pub fn resolve(&self) -> Result<Network, SelectionError> {
        match (self.testnet, self.regtest) {
            (true, true) => Err(SelectionError::ConflictingNetworks),
            (true, false) => Ok(Network::Test),
            (false, true) => Ok(Network::RegTest),
            (false, false) => Ok(Network::Main),
        }
    }
}
