//! # snuffle
//!
//! Pure Rust implementation of the Salsa20 family of stream ciphers:
//! Salsa20/8, Salsa20/12, Salsa20/20, their extended-nonce XSalsa variants
//! and the HSalsa20 subkey derivation.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! snuffle = "0.3"
//! ```
//!
//! ```
//! use snuffle::prelude::*;
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 8];
//!
//! let mut data = *b"hello salsa";
//! let mut cipher = Salsa20::new(&key, &nonce).unwrap();
//! cipher.apply_keystream(&mut data).unwrap();
//!
//! cipher.reset();
//! cipher.apply_keystream(&mut data).unwrap();
//! assert_eq!(&data, b"hello salsa");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: heap-backed helpers such as `ByteSerializable`
//! - `algorithms` (default): the cipher implementations
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`snuffle-api`]: error type and cipher traits
//! - [`snuffle-common`]: zeroizing secret containers
//! - [`snuffle-internal`]: endian and constant-time helpers
//! - [`snuffle-params`]: algorithm constants
//! - [`snuffle-algorithms`]: Salsa20, XSalsa20 and HSalsa20

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use snuffle_api as api;
pub use snuffle_common as common;
pub use snuffle_internal as internal;
pub use snuffle_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use snuffle_algorithms as algorithms;

/// Common imports for snuffle users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{StreamCipher, StreamCipherSeek};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};

    // Cipher types
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        hsalsa, Key, Nonce, Salsa12, Salsa20, Salsa8, SalsaCore, XNonce, XSalsa12, XSalsa20,
        XSalsa8, XSalsaCore, R12, R20, R8,
    };
}
