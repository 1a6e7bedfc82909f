//! Core address logic for the sharded-ledger address toolkit.
//!
//! This crate provides pure Rust implementations of:
//! - Mixed-case and ICAP (IBAN-style) address checksums
//! - Address parsing, validation and conversion between notations
//! - Deterministic contract address derivation (nonce- and salt-based)
//! - Shard resolution against the static boundary table
//! - Keccak-256 hashing and RLP encoding primitives
//!
//! Everything here is synchronous and side-effect-free; the salt-grinding
//! search loop lives in the companion `addr-grind` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod baseconv;
pub mod checksum;
pub mod codec;
pub mod create;
pub mod hash;
pub mod rlp;
pub mod shard;

pub use checksum::{checksum_address, icap_checksum};
pub use codec::{is_valid_address, parse_address, to_icap, Address, AddressError};
pub use create::{
    derive_create2_address, derive_create_address, grind_candidate_address, nonce_block,
    DeriveError,
};
pub use hash::{keccak256, low20};
pub use shard::{is_valid_shard_name, resolve_shard, resolve_shard_str, ShardBoundary, SHARD_TABLE};
