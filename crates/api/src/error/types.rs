//! Error type definitions for cipher operations

use thiserror::Error as ThisError;

/// Primary error type for cipher operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key does not have one of the sizes the algorithm accepts
    #[error("{context}: invalid key length (expected one of {expected:?}, got {actual})")]
    InvalidKeyLength {
        context: &'static str,
        expected: &'static [usize],
        actual: usize,
    },

    /// Nonce does not have the size the algorithm requires
    #[error("{context}: invalid nonce length (expected {expected}, got {actual})")]
    InvalidNonceLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The 64-bit block counter has no blocks left for the request.
    ///
    /// Fatal for the cipher instance that reported it.
    #[error("{context}: block counter exhausted, keystream would repeat")]
    CounterOverflow { context: &'static str },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength { expected, actual, .. } => Self::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Self::InvalidNonceLength { expected, actual, .. } => Self::InvalidNonceLength {
                context,
                expected,
                actual,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::CounterOverflow { .. } => Self::CounterOverflow { context },
        }
    }

    /// Whether the error leaves the reporting cipher instance unusable
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CounterOverflow { .. })
    }
}
