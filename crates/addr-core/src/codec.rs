//! Address parsing, validation and formatting.
//!
//! Supports two textual notations over the same 20-byte value:
//! - hex: "0x" + 40 hex digits, canonically in checksum-mixed case;
//! - ICAP: "XE" + 2 checksum digits + up to 31 base-36 characters.
//!
//! The 20-byte value is the single source of truth; both notations are
//! projections of it.

use alloc::format;
use alloc::string::{String, ToString};
use crate::baseconv::{base36_to_bytes, bytes_to_base36};
use crate::checksum::{checksum_address, icap_checksum};

/// Address validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Not a hex or ICAP address at all
    InvalidAddress(String),
    /// Mixed-case hex input whose casing does not match the checksum
    BadChecksum(String),
    /// ICAP input whose embedded 2-digit checksum does not verify
    BadIcapChecksum(String),
}

impl core::fmt::Display for AddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddressError::InvalidAddress(s) => write!(f, "Invalid address: {}", s),
            AddressError::BadChecksum(s) => write!(f, "Bad address checksum: {}", s),
            AddressError::BadIcapChecksum(s) => write!(f, "Bad ICAP checksum: {}", s),
        }
    }
}

/// A validated 20-byte account or contract address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Wrap raw address bytes. Infallible: any 20-byte value is an address.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// The underlying 20 bytes.
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse an address in hex or ICAP notation.
    ///
    /// Hex input may omit the "0x" prefix. Uniform-case hex (all lower or
    /// all upper) is accepted unconditionally; mixed-case hex must match
    /// the checksum casing exactly. ICAP input must carry a valid
    /// embedded checksum.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let trimmed = input.trim();

        let hex_part = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if hex_part.len() == 40 && hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::parse_hex(hex_part);
        }

        if is_icap_shaped(trimmed) {
            return Self::parse_icap(trimmed);
        }

        Err(AddressError::InvalidAddress(trimmed.to_string()))
    }

    fn parse_hex(hex40: &str) -> Result<Self, AddressError> {
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(hex40, &mut bytes)
            .map_err(|_| AddressError::InvalidAddress(hex40.to_string()))?;

        // Checksum casing is only enforced when the input actually mixes
        // cases; uniform-case input carries no checksum claim.
        let has_lower = hex40.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = hex40.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper {
            let expected = checksum_address(&bytes);
            if &expected[2..] != hex40 {
                return Err(AddressError::BadChecksum(format!("0x{}", hex40)));
            }
        }

        Ok(Address(bytes))
    }

    fn parse_icap(input: &str) -> Result<Self, AddressError> {
        let raw = input.as_bytes();
        let embedded = (raw[2] - b'0') * 10 + (raw[3] - b'0');
        if embedded != icap_checksum(input) {
            return Err(AddressError::BadIcapChecksum(input.to_string()));
        }

        let payload = base36_to_bytes(&input[4..])
            .ok_or_else(|| AddressError::InvalidAddress(input.to_string()))?;
        if payload.len() > 20 {
            return Err(AddressError::InvalidAddress(input.to_string()));
        }

        let mut bytes = [0u8; 20];
        bytes[20 - payload.len()..].copy_from_slice(&payload);
        Ok(Address(bytes))
    }

    /// Canonical checksum-mixed-case hex form, "0x"-prefixed.
    pub fn to_checksummed(&self) -> String {
        checksum_address(&self.0)
    }

    /// ICAP form: "XE" + 2-digit checksum + base-36 payload padded to at
    /// least 30 characters.
    pub fn to_icap(&self) -> String {
        let mut payload = bytes_to_base36(&self.0);
        while payload.len() < 30 {
            payload.insert(0, '0');
        }

        let check = icap_checksum(&format!("XE00{}", payload));
        format!("XE{:02}{}", check, payload)
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_checksummed())
    }
}

/// "XE" + 2 digits + 30..=31 base-36 characters.
fn is_icap_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    (34..=35).contains(&b.len())
        && b.starts_with(b"XE")
        && b[2].is_ascii_digit()
        && b[3].is_ascii_digit()
        && b[4..].iter().all(|c| c.is_ascii_alphanumeric())
}

/// Parse and normalize an address, returning the canonical checksummed
/// string.
pub fn parse_address(input: &str) -> Result<String, AddressError> {
    Address::parse(input).map(|a| a.to_checksummed())
}

/// Non-failing validity check built on the same routine as [`parse_address`].
pub fn is_valid_address(input: &str) -> bool {
    Address::parse(input).is_ok()
}

/// Normalize an address and render it in ICAP notation.
pub fn to_icap(input: &str) -> Result<String, AddressError> {
    Address::parse(input).map(|a| a.to_icap())
}
