//! Deterministic contract address derivation.
//!
//! Two deployment schemes, plus the low-level hashing path the grinder
//! drives directly:
//! - creation: low20(keccak256(rlp([sender, nonce])))
//! - deterministic deployment: low20(keccak256(0xff ++ sender ++ salt ++
//!   init_code_hash))

use alloc::string::ToString;
use alloc::vec::Vec;
use crate::codec::{Address, AddressError};
use crate::hash::{keccak256, low20};
use crate::rlp;

/// Derivation input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// Sender is not a parseable address
    InvalidSender(AddressError),
    /// Salt is not exactly 32 bytes
    InvalidSalt(usize),
    /// Init code hash is not exactly 32 bytes
    InvalidInitCodeHash(usize),
}

impl core::fmt::Display for DeriveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeriveError::InvalidSender(e) => write!(f, "Invalid sender: {}", e),
            DeriveError::InvalidSalt(len) => {
                write!(f, "Salt must be 32 bytes, got {}", len)
            }
            DeriveError::InvalidInitCodeHash(len) => {
                write!(f, "Init code hash must be 32 bytes, got {}", len)
            }
        }
    }
}

/// Address of a contract created by `from` at the given account nonce.
pub fn derive_create_address(from: &str, nonce: u64) -> Result<Address, DeriveError> {
    let sender = Address::parse(from).map_err(DeriveError::InvalidSender)?;

    // Minimal big-endian nonce, empty for zero
    let nonce_full = nonce.to_be_bytes();
    let leading = nonce.leading_zeros() as usize / 8;
    let nonce_bytes = &nonce_full[leading..];

    let encoded = rlp::encode_list(&[sender.as_bytes().as_slice(), nonce_bytes]);
    Ok(Address::from_bytes(low20(&keccak256(&encoded))))
}

/// Address of a contract deployed deterministically with a 32-byte salt
/// and the hash of its init code.
pub fn derive_create2_address(
    from: &str,
    salt: &[u8],
    init_code_hash: &[u8],
) -> Result<Address, DeriveError> {
    if salt.len() != 32 {
        return Err(DeriveError::InvalidSalt(salt.len()));
    }
    if init_code_hash.len() != 32 {
        return Err(DeriveError::InvalidInitCodeHash(init_code_hash.len()));
    }
    let sender = Address::parse(from).map_err(DeriveError::InvalidSender)?;

    let mut buf = [0u8; 85];
    buf[0] = 0xff;
    buf[1..21].copy_from_slice(sender.as_bytes());
    buf[21..53].copy_from_slice(salt);
    buf[53..85].copy_from_slice(init_code_hash);

    Ok(Address::from_bytes(low20(&keccak256(&buf))))
}

/// The nonce as an ASCII decimal string in a fixed 32-byte block, zero
/// bytes on the right.
///
/// The grinding preimage encodes the *decimal rendering* of the nonce,
/// not its binary value.
pub fn nonce_block(nonce: u64) -> [u8; 32] {
    let s = nonce.to_string();
    let mut block = [0u8; 32];
    block[..s.len()].copy_from_slice(s.as_bytes());
    block
}

/// Candidate contract address for one grinding iteration:
/// low20(keccak256(sender ++ nonce_block ++ init_code)).
pub fn grind_candidate_address(sender: &Address, nonce: u64, init_code: &[u8]) -> Address {
    let mut preimage = Vec::with_capacity(52 + init_code.len());
    preimage.extend_from_slice(sender.as_bytes());
    preimage.extend_from_slice(&nonce_block(nonce));
    preimage.extend_from_slice(init_code);

    Address::from_bytes(low20(&keccak256(&preimage)))
}
