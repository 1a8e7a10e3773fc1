//! Network parameters - the per-network record, the network variants and
//! the unit-test write path

mod chain_params;
mod network;
pub(crate) mod variants;

pub use chain_params::*;
pub use network::*;
pub use unit_test::*;
pub use variants::ParamsError;
