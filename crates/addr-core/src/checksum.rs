//! Mixed-case and IBAN-style address checksums.
//!
//! Two unrelated schemes share this module:
//! - the hex notation encodes a checksum in the *case* of its letters,
//!   driven by a Keccak-256 digest of the lowercase form;
//! - the ICAP notation carries an explicit 2-digit ISO 7064 MOD-97-10
//!   checksum, like an IBAN.

use alloc::string::String;
use crate::hash::keccak256;

/// Format 20 address bytes as the canonical checksum-cased hex string.
///
/// The 40 lowercase hex characters are hashed as ASCII; character `i` is
/// uppercased when the corresponding digest nibble (high nibble for even
/// `i`, low for odd) has its top bit set.
pub fn checksum_address(bytes: &[u8; 20]) -> String {
    let lower = hex::encode(bytes);
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.bytes().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase() as char);
        } else {
            out.push(c as char);
        }
    }
    out
}

/// ISO 7064 MOD-97-10 checksum over an ICAP-shaped string.
///
/// Characters 2..4 (the checksum slot) are ignored: the string is rotated
/// so the slot lands at the end as "00", letters expand to two decimal
/// digits (A=10 .. Z=35), and the resulting numeral is reduced mod 97.
/// The numeral far exceeds native integer range, so digits are streamed
/// through the accumulator one at a time instead of being materialized.
///
/// The caller guarantees an ASCII-alphanumeric string of at least 4
/// characters; anything else would have failed pattern validation first.
pub fn icap_checksum(s: &str) -> u8 {
    let bytes = s.as_bytes();
    let rotated = bytes[4..]
        .iter()
        .chain(bytes[..2].iter())
        .map(|b| b.to_ascii_uppercase())
        .chain([b'0', b'0']);

    let mut rem: u32 = 0;
    for c in rotated {
        if c.is_ascii_digit() {
            rem = (rem * 10 + (c - b'0') as u32) % 97;
        } else {
            let v = (c - b'A') as u32 + 10;
            rem = (rem * 10 + v / 10) % 97;
            rem = (rem * 10 + v % 10) % 97;
        }
    }

    (98 - rem) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn checksum_str(hex40: &str) -> String {
        let bytes: [u8; 20] = hex::decode(hex40).unwrap().try_into().unwrap();
        checksum_address(&bytes)
    }

    #[test]
    fn test_eip55_mixed_case_vectors() {
        // Canonical EIP-55 test vectors
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let lower = expected[2..].to_ascii_lowercase();
            assert_eq!(checksum_str(&lower), expected);
        }
    }

    #[test]
    fn test_eip55_all_caps_and_all_lower_vectors() {
        // Addresses whose checksum form happens to be uniform case
        for expected in [
            "0x52908400098527886E0F7030069857D2E4169EE7",
            "0x8617E340B3D01FA5F11F306F4090FD50E238070D",
            "0xde709f2102306220921060314715629080e2fb77",
            "0x27b1fdb04752bbc536007a920d24acb045561c26",
        ] {
            let lower = expected[2..].to_ascii_lowercase();
            assert_eq!(checksum_str(&lower), expected);
        }
    }

    #[test]
    fn test_checksum_deterministic() {
        let bytes = [0x5a; 20];
        assert_eq!(checksum_address(&bytes), checksum_address(&bytes));
    }

    #[test]
    fn test_icap_checksum_iban_example() {
        // The standard IBAN example: GB82 WEST 1234 5698 7654 32.
        // The embedded digits are ignored, so any value in the slot
        // yields the same result.
        assert_eq!(icap_checksum("GB82WEST12345698765432"), 82);
        assert_eq!(icap_checksum("GB00WEST12345698765432"), 82);
    }

    #[test]
    fn test_icap_checksum_case_insensitive() {
        assert_eq!(
            icap_checksum("gb00west12345698765432"),
            icap_checksum("GB00WEST12345698765432"),
        );
    }

    #[test]
    fn test_icap_checksum_validates_mod_97() {
        // A string carrying its own correct checksum reduces to 1 under
        // the plain MOD-97-10 check; verify via the digit expansion.
        let s = "GB82WEST12345698765432";
        let bytes = s.as_bytes();
        let rotated: Vec<u8> = bytes[4..]
            .iter()
            .chain(bytes[..4].iter())
            .copied()
            .collect();

        let mut rem: u32 = 0;
        for c in rotated {
            if c.is_ascii_digit() {
                rem = (rem * 10 + (c - b'0') as u32) % 97;
            } else {
                let v = (c - b'A') as u32 + 10;
                rem = (rem * 100 + v) % 97;
            }
        }
        assert_eq!(rem, 1);
    }
}
