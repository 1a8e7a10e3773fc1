//! Cryptography module - double-SHA256 hashing, Merkle trees, embedded keys

mod hash;
mod keys;
mod merkle;

pub use hash::*;
pub use keys::*;
pub use merkle::*;
