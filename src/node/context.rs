//! Active network selection
//!
//! The embedding program builds one `NetworkContext` during startup, selects
//! a network, and shares it read-only from then on. Selection is not
//! synchronized: it must happen before any reader calls `current`.

use tracing::{info, warn};

use crate::node::{ChainParamsRegistry, NetworkFlags, SelectionError};
use crate::params::{ChainParams, Network, UnitTestParams};

/// The parameter registry plus the network the node runs on
#[derive(Debug, Clone)]
pub struct NetworkContext {
    registry: ChainParamsRegistry,
    active: Option<Network>,
}

impl NetworkContext {
    /// Wrap a registry with no network selected yet
    pub fn new(registry: ChainParamsRegistry) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    /// Make `network` the active one. May be called again, e.g. between
    /// test cases.
    pub fn select(&mut self, network: Network) {
        info!(%network, previous = ?self.active, "network selected");
        self.active = Some(network);
    }

    /// Resolve `flags` and select the result. On error nothing changes.
    pub fn select_from_flags(&mut self, flags: NetworkFlags) -> Result<Network, SelectionError> {
        match flags.resolve() {
            Ok(network) => {
                self.select(network);
                Ok(network)
            }
            Err(e) => {
                warn!(?flags, error = %e, "network selection rejected");
                Err(e)
            }
        }
    }

    /// Parse command-line arguments and select the network they ask for.
    /// On error nothing changes.
    pub fn select_from_args<I, S>(&mut self, args: I) -> Result<Network, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let flags = NetworkFlags::from_args(args).map_err(|e| {
            warn!(error = %e, "network selection rejected");
            e
        })?;
        self.select_from_flags(flags)
    }

    pub fn active(&self) -> Option<Network> {
        self.active
    }

    /// Parameters of the active network
    pub fn current(&self) -> Result<&ChainParams, SelectionError> {
        let network = self.active.ok_or(SelectionError::NoNetworkSelected)?;
        Ok(self.registry.params_for(network))
    }

    /// Parameters for any network, regardless of the selection
    pub fn params_for(&self, network: Network) -> &ChainParams {
        self.registry.params_for(network)
    }

    pub fn registry(&self) -> &ChainParamsRegistry {
        &self.registry
    }

    /// Write access to the unit-test record, granted only while the
    /// unit-test network is active.
    ///
    /// The handle borrows the context mutably, so no reader can observe the
    /// record while it is being changed.
    pub fn unit_test_params_mut(&mut self) -> Result<UnitTestParams<'_>, SelectionError> {
        match self.active {
            Some(Network::UnitTest) => Ok(UnitTestParams::new(
                self.registry.params_for_mut(Network::UnitTest),
            )),
            Some(active) => Err(SelectionError::NotUnitTest { active }),
            None => Err(SelectionError::NoNetworkSelected),
        }
    }
}
