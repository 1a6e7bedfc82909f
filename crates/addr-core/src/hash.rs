//! Keccak-256 hashing and address projection.

use sha3::{Digest, Keccak256};

/// Keccak-256 digest of arbitrary input.
///
/// Every derivation path in this crate (checksums, CREATE, CREATE2,
/// grinding candidates) goes through this one function.
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let hash = Keccak256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Project a 32-byte digest down to the 20 address bytes.
///
/// Addresses are the low (rightmost) 20 bytes of the digest.
#[inline]
pub fn low20(digest: &[u8; 32]) -> [u8; 20] {
    let mut result = [0u8; 20];
    result.copy_from_slice(&digest[12..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        // Keccak-256 of the empty string
        let hash = keccak256(&[]);
        let expected = hex::decode(
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        ).unwrap();

        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_keccak256_known_input() {
        // Keccak-256 of "hello" (not SHA3-256, which pads differently)
        let hash = keccak256(b"hello");
        let expected = hex::decode(
            "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        ).unwrap();

        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_low20_takes_rightmost_bytes() {
        let mut digest = [0u8; 32];
        for (i, b) in digest.iter_mut().enumerate() {
            *b = i as u8;
        }
        let addr = low20(&digest);

        assert_eq!(addr[0], 12);
        assert_eq!(addr[19], 31);
    }
}
