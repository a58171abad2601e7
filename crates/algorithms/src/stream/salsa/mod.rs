//! Salsa20 family of stream ciphers
//!
//! Salsa20 is a 20-round stream cipher designed by Daniel J. Bernstein, with
//! reduced-round variants Salsa20/12 and Salsa20/8. XSalsa20 extends the
//! nonce to 192 bits by deriving a subkey with HSalsa20.
//!
//! | type | rounds | key | nonce |
//! |---|---|---|---|
//! | [`Salsa20`], [`Salsa12`], [`Salsa8`] | 20 / 12 / 8 | 16 or 32 bytes | 8 bytes |
//! | [`XSalsa20`], [`XSalsa12`], [`XSalsa8`] | 20 / 12 / 8 | 32 bytes | 24 bytes |
//!
//! The 64-bit block counter never wraps. A request that would need a block
//! past `u64::MAX` fails with
//! [`Error::CounterOverflow`](crate::error::Error::CounterOverflow) and the
//! cipher refuses all further use.

pub mod block;
pub mod hsalsa;
pub mod salsa20;
pub mod xsalsa20;

pub use block::SalsaCore;
pub use hsalsa::{hsalsa, hsalsa_from_slices};
pub use salsa20::Salsa;
pub use xsalsa20::{XSalsa, XSalsaCore};

use snuffle_params::symmetric::{SALSA_KEY_SIZE, SALSA_NONCE_SIZE, XSALSA_NONCE_SIZE};

use crate::types::{Nonce as GenericNonce, SecretBuffer, R12, R20, R8};

/// 256-bit key accepted by every Salsa20 family cipher
pub type Key = SecretBuffer<SALSA_KEY_SIZE>;

/// 64-bit Salsa20 nonce
pub type Nonce = GenericNonce<SALSA_NONCE_SIZE>;

/// 192-bit XSalsa20 nonce
pub type XNonce = GenericNonce<XSALSA_NONCE_SIZE>;

/// Salsa20/8 stream cipher (reduced-round variant of Salsa20 with 8 rounds, *not recommended*)
pub type Salsa8 = Salsa<R8>;

/// Salsa20/12 stream cipher (reduced-round variant of Salsa20 with 12 rounds, *not recommended*)
pub type Salsa12 = Salsa<R12>;

/// Salsa20/20 stream cipher (20 rounds; **recommended**)
pub type Salsa20 = Salsa<R20>;

/// XSalsa8 stream cipher (reduced-round variant of XSalsa20 with 8 rounds, *not recommended*)
pub type XSalsa8 = XSalsa<R8>;

/// XSalsa12 stream cipher (reduced-round variant of XSalsa20 with 12 rounds, *not recommended*)
pub type XSalsa12 = XSalsa<R12>;

/// XSalsa20 stream cipher (20 rounds; **recommended**)
pub type XSalsa20 = XSalsa<R20>;
