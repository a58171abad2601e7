//! Public API traits and error types for the snuffle library
//!
//! This crate provides the public API surface of the snuffle workspace: the
//! error type every operation reports through, and the traits that the
//! Salsa20-family ciphers implement.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{StreamCipher, StreamCipherSeek};
