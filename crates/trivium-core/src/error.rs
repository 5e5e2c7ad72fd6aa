//! Error types for the cipher and its encode/decode layer.

use thiserror::Error;

use crate::init::KEY_IV_HEX_CHARS;

/// Errors reported by the Trivium engine.
///
/// All variants are local to a single call: a failed call performs no state
/// mutation and has no effect on later, independent sessions. Violations of
/// the internal 288-bit state shape are not represented here; they are
/// defects and the state type rules them out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriviumError {
    /// Key is not exactly 20 hex characters.
    #[error("key must be exactly {KEY_IV_HEX_CHARS} hex characters")]
    InvalidKeyFormat,

    /// IV is not exactly 20 hex characters.
    #[error("IV must be exactly {KEY_IV_HEX_CHARS} hex characters")]
    InvalidIvFormat,

    /// Ciphertext hex is not well formed.
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, TriviumError>;
