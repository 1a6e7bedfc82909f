//! Shard-targeted contract address grinding.
//!
//! Builds on `addr-core`'s derivation path to search for an init-code
//! salt whose contract address lands in a requested shard. The search is
//! probabilistic and unbounded by default; callers who need a kill switch
//! supply [`GrindOptions`] with an iteration cap, deadline, or
//! cancellation flag.
//!
//! Each call owns its own state, so grinds may run concurrently without
//! coordination.

pub mod grinder;
pub mod salt;

pub use grinder::{
    grind_contract_address, grind_contract_address_with, GrindError, GrindOptions, GrindOutcome,
};
pub use salt::{OsSaltSource, SaltSource};
