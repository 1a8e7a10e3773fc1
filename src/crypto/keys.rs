//! Embedded key and address decoding
//!
//! Alert and spork keys are compiled in as hex-encoded uncompressed
//! secp256k1 points; the obfuscation pool dummy address is a Base58Check
//! string. Both are decoded and checked once, when parameters are built.

use k256::ecdsa::VerifyingKey;
use thiserror::Error;

/// Key decoding errors
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Invalid public key")]
    InvalidPublicKey,
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Wrong address version: expected {expected}, found {found}")]
    WrongAddressVersion { expected: u8, found: u8 },
}

/// Decode a hex public key, rejecting anything that is not a point on secp256k1
pub fn decode_public_key(hex_key: &str) -> Result<Vec<u8>, KeyError> {
    let bytes = hex::decode(hex_key)?;
    VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
    Ok(bytes)
}

/// Check that a Base58Check address carries the expected version byte
pub fn check_address_version(address: &str, expected: u8) -> Result<(), KeyError> {
    let payload = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| KeyError::InvalidAddress(e.to_string()))?;

    match payload.first() {
        Some(&found) if found == expected => Ok(()),
        Some(&found) => Err(KeyError::WrongAddressVersion { expected, found }),
        None => Err(KeyError::InvalidAddress("empty payload".to_string())),
    }
}
