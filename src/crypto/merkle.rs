//! Merkle tree implementation
//!
//! Used for computing transaction merkle roots in blocks.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of transaction hashes
///
/// If the list is empty, returns zero hash.
/// If a level has an odd number of elements, its last element is paired
/// with itself.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let mut current_level: Vec<Hash> = match hashes {
        [] => return Hash::zero(),
        [single] => return *single,
        _ => hashes.to_vec(),
    };

    while current_level.len() > 1 {
        let next_level = current_level
            .chunks(2)
            .map(|chunk| match chunk {
                [left, right] => hash_pair(left, right),
                [last] => hash_pair(last, last),
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();

        current_level = next_level;
    }

    current_level[0]
}
