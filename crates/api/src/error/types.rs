//! Error type definitions for key derivation and conversion

use thiserror::Error;

/// Primary error type for edmont operations
///
/// Every variant carries a static `context` naming the operation that failed.
/// Variants never carry key material.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The Edwards public key has small order, does not decode to a curve
    /// point, or lies outside the prime-order subgroup
    #[error("{context}: invalid public key point")]
    InvalidPublicKeyPoint { context: &'static str },

    /// The random number generator could not supply entropy
    #[error("{context}: entropy source failure: {message}")]
    EntropySourceFailure {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The public half of a `seed || public_key` secret key does not match
    /// the key re-derived from the seed
    #[error("{context}: secret key does not match its embedded public key")]
    KeyMismatch { context: &'static str },
}

/// Result type for edmont operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Context string of the operation that produced the error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidPublicKeyPoint { context }
            | Self::EntropySourceFailure { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::KeyMismatch { context } => context,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidPublicKeyPoint { .. } => Self::InvalidPublicKeyPoint { context },
            Self::EntropySourceFailure { message, .. } => {
                Self::EntropySourceFailure { context, message }
            }
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::KeyMismatch { .. } => Self::KeyMismatch { context },
        }
    }

    /// Whether the error is fatal for the calling protocol
    ///
    /// Entropy failures are never retried internally; callers decide.
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, Self::EntropySourceFailure { .. })
    }
}
