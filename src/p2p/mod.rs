//! P2P bootstrap data - fixed and DNS seeds

mod seeds;

pub use seeds::*;
