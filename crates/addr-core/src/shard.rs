//! Shard boundary table and address-to-shard resolution.

use crate::codec::{Address, AddressError};

/// One row of the shard boundary table.
///
/// `low` and `high` bound a closed interval over the *decimal* reading of
/// an address's first four hex characters. Entries must not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardBoundary {
    /// Shard identifier
    pub name: &'static str,
    /// Inclusive lower bound of the prefix interval
    pub low: u32,
    /// Inclusive upper bound of the prefix interval
    pub high: u32,
}

/// The static, ordered shard table. Loaded once at compile time, never
/// mutated.
pub const SHARD_TABLE: &[ShardBoundary] = &[
    ShardBoundary { name: "cyprus1", low: 0, high: 1999 },
    ShardBoundary { name: "cyprus2", low: 2000, high: 2999 },
    ShardBoundary { name: "cyprus3", low: 3000, high: 3999 },
    ShardBoundary { name: "paxos1", low: 4000, high: 4999 },
    ShardBoundary { name: "paxos2", low: 5000, high: 5999 },
    ShardBoundary { name: "paxos3", low: 6000, high: 6999 },
    ShardBoundary { name: "hydra1", low: 7000, high: 7999 },
    ShardBoundary { name: "hydra2", low: 8000, high: 8999 },
    ShardBoundary { name: "hydra3", low: 9000, high: 9999 },
];

/// Shard containing the given address, or `None` when no interval covers
/// its prefix.
///
/// The first four hex characters are read as a *decimal* numeral, so a
/// prefix containing any of a..f never parses and falls outside every
/// shard. The boundary table is defined against this reading.
pub fn resolve_shard(address: &Address) -> Option<&'static str> {
    let bytes = address.as_bytes();
    let prefix = decimal_prefix(bytes[0], bytes[1])?;

    SHARD_TABLE
        .iter()
        .find(|b| b.low <= prefix && prefix <= b.high)
        .map(|b| b.name)
}

/// [`resolve_shard`] over a textual address in either notation.
pub fn resolve_shard_str(input: &str) -> Result<Option<&'static str>, AddressError> {
    Ok(resolve_shard(&Address::parse(input)?))
}

/// Whether `name` identifies a shard in the static table.
pub fn is_valid_shard_name(name: &str) -> bool {
    SHARD_TABLE.iter().any(|b| b.name == name)
}

/// Read two leading address bytes as a four-digit decimal numeral.
fn decimal_prefix(b0: u8, b1: u8) -> Option<u32> {
    let mut value = 0u32;
    for nibble in [b0 >> 4, b0 & 0x0f, b1 >> 4, b1 & 0x0f] {
        if nibble > 9 {
            return None;
        }
        value = value * 10 + nibble as u32;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn addr_with_prefix(b0: u8, b1: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[0] = b0;
        bytes[1] = b1;
        Address::from_bytes(bytes)
    }

    #[test]
    fn test_resolve_decimal_prefix() {
        // Hex prefix "0500" reads as decimal 500 -> cyprus1
        assert_eq!(resolve_shard(&addr_with_prefix(0x05, 0x00)), Some("cyprus1"));

        // "2500" -> 2500 -> cyprus2
        assert_eq!(resolve_shard(&addr_with_prefix(0x25, 0x00)), Some("cyprus2"));

        // "9999" -> hydra3, the top of the table
        assert_eq!(resolve_shard(&addr_with_prefix(0x99, 0x99)), Some("hydra3"));
    }

    #[test]
    fn test_boundary_edges_are_inclusive() {
        assert_eq!(resolve_shard(&addr_with_prefix(0x19, 0x99)), Some("cyprus1"));
        assert_eq!(resolve_shard(&addr_with_prefix(0x20, 0x00)), Some("cyprus2"));
    }

    #[test]
    fn test_hex_letters_resolve_to_none() {
        // "abcd" is not a decimal numeral, so the address has no shard
        assert_eq!(resolve_shard(&addr_with_prefix(0xab, 0xcd)), None);
        assert_eq!(resolve_shard(&addr_with_prefix(0x0a, 0x00)), None);
        assert_eq!(resolve_shard(&addr_with_prefix(0x00, 0x0f)), None);
    }

    #[test]
    fn test_resolve_shard_str() {
        let mut hex = String::from("0x0500");
        hex.push_str(&"00".repeat(18));

        assert_eq!(resolve_shard_str(&hex).unwrap(), Some("cyprus1"));
        assert!(resolve_shard_str("0x12345").is_err());
    }

    #[test]
    fn test_shard_name_lookup() {
        assert!(is_valid_shard_name("cyprus1"));
        assert!(is_valid_shard_name("hydra3"));
        assert!(!is_valid_shard_name("cyprus4"));
        assert!(!is_valid_shard_name(""));
        assert!(!is_valid_shard_name("Cyprus1"));
    }

    #[test]
    fn test_table_is_ordered_and_disjoint() {
        for pair in SHARD_TABLE.windows(2) {
            assert!(pair[0].high < pair[1].low);
        }
        for b in SHARD_TABLE {
            assert!(b.low <= b.high);
        }
    }
}
