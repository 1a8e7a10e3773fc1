//! Compact difficulty encoding
//!
//! Expands the 32-bit `bits` field of a header into the 256-bit target it
//! stands for, so it can be compared against a network's proof-of-work
//! ceiling.

use primitive_types::U256;

/// Expand a compact difficulty into its 256-bit target.
///
/// Returns `None` for encodings that are negative or overflow 256 bits.
pub fn compact_to_target(compact: u32) -> Option<U256> {
    let size = (compact >> 24) as usize;
    let mut word = compact & 0x007f_ffff;

    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        U256::from(word)
    } else {
        U256::from(word) << (8 * (size - 3))
    };

    let negative = word != 0 && (compact & 0x0080_0000) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

    if negative || overflow {
        None
    } else {
        Some(target)
    }
}
