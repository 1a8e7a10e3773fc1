//! Double-SHA256 hashing and the 256-bit hash type
//!
//! Hashes are kept in internal (little-endian) byte order and shown reversed,
//! which is how block ids, merkle roots and checkpoints are written down.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash output
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for the genesis previous-block reference)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from bytes in internal order
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a hash written in display order.
    ///
    /// An optional `0x` prefix is accepted, and short literals are
    /// zero-extended on the left, so `"0x001"` is the hash with value one.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        if digits.len() > 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let padded = format!("{:0>64}", digits);
        let mut arr = [0u8; 32];
        hex::decode_to_slice(&padded, &mut arr)?;
        arr.reverse();
        Ok(Hash(arr))
    }

    /// Convert to hex string in display order
    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }

    /// Get as bytes (internal order)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

/// SHA256(SHA256(data))
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&second);
    Hash(arr)
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}

/// The chain's block-header hash primitive.
///
/// The registry never hashes headers itself: the embedding node supplies the
/// algorithm its blocks are identified by, and the registry feeds it the
/// serialized 80-byte header.
pub trait HeaderHasher {
    fn hash_header(&self, header: &[u8]) -> Hash;
}

/// Double-SHA256 over the serialized header.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256;

impl HeaderHasher for DoubleSha256 {
    fn hash_header(&self, header: &[u8]) -> Hash {
        sha256d(header)
    }
}
