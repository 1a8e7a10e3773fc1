//! Network variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::node::SelectionError;

/// The four networks a node can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Local regression-test network
    RegTest,
    /// In-process unit-test network
    UnitTest,
}

impl Network {
    pub const ALL: [Network; 4] = [Network::Main, Network::Test, Network::RegTest, Network::UnitTest];

    /// Network identifier string
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::RegTest => "regtest",
            Network::UnitTest => "unittest",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Network::Main => 0,
            Network::Test => 1,
            Network::RegTest => 2,
            Network::UnitTest => 3,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .iter()
            .copied()
            .find(|network| network.name() == s)
            .ok_or_else(|| SelectionError::UnknownNetwork(s.to_string()))
    }
}
