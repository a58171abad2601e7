//! Error handling for cipher primitives

use core::fmt;

use snuffle_api::{Error as ApiError, Result as ApiResult};

/// The error type for cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key length is not one the algorithm accepts
    InvalidKeyLength {
        /// Algorithm or operation that rejected the key
        context: &'static str,
        /// Accepted key lengths in bytes
        expected: &'static [usize],
        /// Length that was supplied
        actual: usize,
    },

    /// Nonce length does not match the algorithm
    InvalidNonceLength {
        /// Algorithm or operation that rejected the nonce
        context: &'static str,
        /// Required nonce length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The block counter cannot advance without wrapping.
    ///
    /// The instance that returns this is exhausted and refuses further use.
    CounterOverflow {
        /// Cipher that ran out of counter space
        algorithm: &'static str,
    },
}

/// Result type for cipher primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { context, expected, actual } => {
                write!(f, "Invalid key length for {}: expected one of {:?}, got {}",
                    context, expected, actual)
            },
            Error::InvalidNonceLength { context, expected, actual } => {
                write!(f, "Invalid nonce length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::CounterOverflow { algorithm } => {
                write!(f, "Block counter exhausted for {}", algorithm)
            },
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to the public API error
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKeyLength { context, expected, actual } => ApiError::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Error::InvalidNonceLength { context, expected, actual } => ApiError::InvalidNonceLength {
                context,
                expected,
                actual,
            },
            Error::Length { context, expected, actual } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::CounterOverflow { algorithm } => ApiError::CounterOverflow {
                context: algorithm,
            },
        }
    }
}

/// Convert a primitives result to an API result
#[inline]
pub fn to_api_result<T>(r: Result<T>) -> ApiResult<T> {
    r.map_err(ApiError::from)
}

// Re-export API error handling traits for convenience
pub use snuffle_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
