//! Salt-grinding search for a contract address in a target shard.
//!
//! Each iteration draws one random salt byte, overwrites the final byte
//! of the init code with it, derives the candidate contract address and
//! resolves its shard. The loop ends when the candidate lands in the
//! target shard. With no options set the search is unbounded, matching
//! the original behavior; callers can bound it with an iteration cap, a
//! deadline, or a cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use addr_core::{
    grind_candidate_address, is_valid_shard_name, resolve_shard, Address, AddressError,
};
use thiserror::Error;

use crate::salt::{OsSaltSource, SaltSource};

/// Grinding failures.
///
/// Shard resolution never fails mid-loop: a candidate whose shard is
/// unresolved is skipped, not an error.
#[derive(Debug, Error)]
pub enum GrindError {
    /// Target shard is not in the static table
    #[error("unknown target shard: {0}")]
    UnknownShard(String),
    /// Sender is not a parseable address
    #[error("invalid sender address: {0}")]
    InvalidSender(AddressError),
    /// Bytecode is not valid hex
    #[error("invalid bytecode hex: {0}")]
    InvalidBytecode(hex::FromHexError),
    /// Bytecode has no final byte to replace
    #[error("bytecode must not be empty")]
    EmptyBytecode,
    /// The entropy source failed to produce a salt byte
    #[error("entropy source unavailable")]
    Entropy,
    /// The caller's iteration cap was reached without a match
    #[error("no match within {0} iterations")]
    IterationLimit(u64),
    /// The caller's deadline passed without a match
    #[error("deadline passed after {0} iterations")]
    DeadlineExceeded(u64),
    /// The caller's cancellation flag was raised
    #[error("cancelled after {0} iterations")]
    Cancelled(u64),
}

/// Caller-supplied bounds on the search.
///
/// The default leaves every bound unset: the loop runs until it finds a
/// match, which is the original unbounded behavior.
#[derive(Debug, Clone, Default)]
pub struct GrindOptions {
    /// Stop with [`GrindError::IterationLimit`] after this many draws.
    pub max_iterations: Option<u64>,
    /// Stop with [`GrindError::DeadlineExceeded`] once this instant passes.
    pub deadline: Option<Instant>,
    /// Stop with [`GrindError::Cancelled`] when this flag is raised.
    pub cancel: Option<Arc<AtomicBool>>,
}

/// A successful grind: the accepted init code and where it landed.
#[derive(Debug, Clone)]
pub struct GrindOutcome {
    /// Init code with the accepted salt in its final byte.
    pub init_code: Vec<u8>,
    /// The derived contract address.
    pub address: Address,
    /// The shard the address resolved to (equals the requested target).
    pub shard: &'static str,
    /// The accepted salt byte.
    pub salt: u8,
    /// Number of salt draws, including the accepted one.
    pub iterations: u64,
}

impl GrindOutcome {
    /// The accepted init code as lowercase hex.
    pub fn init_code_hex(&self) -> String {
        hex::encode(&self.init_code)
    }
}

/// Grind with OS entropy and no bounds.
pub fn grind_contract_address(
    nonce: u64,
    target_shard: &str,
    sender: &str,
    bytecode_hex: &str,
) -> Result<GrindOutcome, GrindError> {
    grind_contract_address_with(
        nonce,
        target_shard,
        sender,
        bytecode_hex,
        &mut OsSaltSource,
        &GrindOptions::default(),
    )
}

/// Grind with an explicit salt source and bounds.
pub fn grind_contract_address_with(
    nonce: u64,
    target_shard: &str,
    sender: &str,
    bytecode_hex: &str,
    source: &mut dyn SaltSource,
    options: &GrindOptions,
) -> Result<GrindOutcome, GrindError> {
    if !is_valid_shard_name(target_shard) {
        return Err(GrindError::UnknownShard(target_shard.to_string()));
    }
    let sender = Address::parse(sender).map_err(GrindError::InvalidSender)?;

    let stripped = bytecode_hex.strip_prefix("0x").unwrap_or(bytecode_hex);
    let mut init_code = hex::decode(stripped).map_err(GrindError::InvalidBytecode)?;
    if init_code.is_empty() {
        return Err(GrindError::EmptyBytecode);
    }
    let last = init_code.len() - 1;

    let mut iterations = 0u64;
    loop {
        if let Some(cancel) = &options.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(GrindError::Cancelled(iterations));
            }
        }
        if let Some(deadline) = options.deadline {
            if Instant::now() >= deadline {
                return Err(GrindError::DeadlineExceeded(iterations));
            }
        }
        if let Some(max) = options.max_iterations {
            if iterations >= max {
                return Err(GrindError::IterationLimit(max));
            }
        }

        let salt = source.next_salt()?;
        init_code[last] = salt;
        iterations += 1;

        let candidate = grind_candidate_address(&sender, nonce, &init_code);

        // An unresolved shard is expected, not a failure; keep searching
        if let Some(shard) = resolve_shard(&candidate) {
            if shard == target_shard {
                return Ok(GrindOutcome {
                    init_code,
                    address: candidate,
                    shard,
                    salt,
                    iterations,
                });
            }
        }
    }
}
