//! Entropy sources for the grinding loop.

use crate::grinder::GrindError;

/// Supplies one salt byte per grinding iteration.
///
/// Abstracted so tests can script the draws; production code uses
/// [`OsSaltSource`].
pub trait SaltSource {
    /// Draw the next salt byte.
    fn next_salt(&mut self) -> Result<u8, GrindError>;
}

/// Cryptographically strong salt bytes from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn next_salt(&mut self) -> Result<u8, GrindError> {
        let mut buf = [0u8; 1];
        getrandom::getrandom(&mut buf).map_err(|_| GrindError::Entropy)?;
        Ok(buf[0])
    }
}
