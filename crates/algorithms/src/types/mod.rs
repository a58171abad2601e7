//! Type-safe wrappers for cipher parameters
//!
//! This module provides nonce and round-count types with compile-time
//! guarantees, so a Salsa20 nonce cannot be handed to XSalsa20 and an
//! unsupported round count cannot be named at all.

// Submodules
pub mod algorithms;
pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use algorithms::{Rounds, R12, R20, R8};
pub use nonce::{Nonce, SalsaCompatible, XSalsaCompatible};

// Import and re-export security types from snuffle-common
pub use snuffle_common::security::{EphemeralSecret, SecretBuffer};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

/// Trait for types that can be serialized to a byte representation
#[cfg(feature = "alloc")]
pub trait ByteSerializable: Sized {
    /// Convert to a byte vector
    fn to_bytes(&self) -> alloc::vec::Vec<u8>;

    /// Try to create from a byte slice
    fn from_bytes(bytes: &[u8]) -> crate::error::Result<Self>;
}
