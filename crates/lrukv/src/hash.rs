//! String hashing for bucket selection

use crate::error::{Error, Result};

const DJB2_SEED: u64 = 5381;

/// djb2 string hash: `hash * 33 + byte` over the key bytes, seeded at 5381.
#[inline]
pub fn djb2(key: &str) -> u64 {
    key.bytes().fold(DJB2_SEED, |hash, byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte))
    })
}

/// Map `key` to a bucket in `0..capacity`.
///
/// A zero capacity has no valid bucket and is rejected before hashing.
#[inline]
pub fn index_for(key: &str, capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(Error::InvalidArgument("bucket count must be greater than 0"));
    }
    Ok((djb2(key) % capacity as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 5381 * 33 + 97);
        assert_eq!(djb2("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn test_djb2_wraps_on_long_keys() {
        let key = "k".repeat(4096);
        // Overflow must wrap rather than panic in debug builds
        assert_eq!(djb2(&key), djb2(&key));
    }

    #[test]
    fn test_index_for_in_range() {
        for capacity in 1..64 {
            for key in ["", "key1", "keyA", "keyB", "a much longer key than usual"] {
                let idx = index_for(key, capacity).unwrap();
                assert!(idx < capacity);
                assert_eq!(idx, (djb2(key) % capacity as u64) as usize);
            }
        }
    }

    #[test]
    fn test_index_for_single_bucket() {
        assert_eq!(index_for("anything", 1).unwrap(), 0);
    }

    #[test]
    fn test_index_for_zero_capacity() {
        assert!(matches!(
            index_for("key1", 0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
