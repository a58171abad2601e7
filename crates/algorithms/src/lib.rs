//! Salsa20 family stream cipher primitives
//!
//! This crate provides the Salsa20 block function, the HSalsa20 subkey
//! derivation and keystream drivers for Salsa20/8, Salsa20/12, Salsa20/20
//! and their extended-nonce XSalsa counterparts. It is usable in both `std`
//! and `no_std` environments and never allocates on the keystream path.
//!
//! # Security Features
//!
//! - Key material and keystream buffers are zeroized on drop
//! - Typed nonces compare in constant time
//! - The 64-bit block counter never wraps; running out of counter space is a
//!   fatal error for the cipher instance
//!
//! # Example
//!
//! ```
//! use snuffle_algorithms::XSalsa20;
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 24];
//!
//! let mut data = *b"attack at dawn";
//! XSalsa20::new(&key, &nonce)?.apply_keystream(&mut data)?;
//! XSalsa20::new(&key, &nonce)?.apply_keystream(&mut data)?;
//! assert_eq!(&data, b"attack at dawn");
//! # Ok::<(), snuffle_algorithms::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Stream cipher implementations
pub mod stream;
pub use stream::salsa::{
    hsalsa, hsalsa_from_slices, Key, Nonce, Salsa, Salsa12, Salsa20, Salsa8, SalsaCore, XNonce,
    XSalsa, XSalsa12, XSalsa20, XSalsa8, XSalsaCore,
};

// Type system; the generic `Nonce<N>` stays at `types::Nonce`
pub mod types;
pub use types::{
    ConstantTimeEq, FixedSize, Rounds, SalsaCompatible, XSalsaCompatible, R12, R20, R8,
};

#[cfg(feature = "alloc")]
pub use types::ByteSerializable;

// Re-export security types from snuffle-common
pub use snuffle_common::security::{EphemeralSecret, SecretBuffer};
