//! Node startup - genesis verification, the parameter registry and the
//! active network

mod context;
mod genesis;
mod registry;
mod selection;

pub use context::*;
pub use genesis::*;
pub use registry::*;
pub use selection::*;
