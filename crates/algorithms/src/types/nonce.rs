//! Type-safe nonce implementation with generic size parameter
//!
//! Salsa20 takes an 8-byte nonce and XSalsa20 a 24-byte one. The sealed
//! compatibility traits below let each cipher accept only its own size.

use core::fmt;
use core::ops::{Deref, DerefMut};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;
use crate::types::{ConstantTimeEq as LocalConstantEq, FixedSize};
use snuffle_params::symmetric::{SALSA_NONCE_SIZE, XSALSA_NONCE_SIZE};

/// Generic nonce type with compile-time size guarantee
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

// Mark Nonce types as sealed
impl<const N: usize> Sealed for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    /// Create a new nonce from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed nonce
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::nonce_length("Nonce", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random nonce
    ///
    /// Only sensible for [`XNonce`](crate::stream::salsa::XNonce): 64-bit
    /// Salsa20 nonces are too short to be drawn at random safely.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the size of this nonce in bytes
    pub fn size() -> usize {
        N
    }

    /// Borrow the nonce as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for Nonce<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for Nonce<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> From<[u8; N]> for Nonce<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>({:?})", N, &self.data[..])
    }
}

impl<const N: usize> LocalConstantEq for Nonce<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> FixedSize for Nonce<N> {
    fn size() -> usize {
        N
    }
}

#[cfg(feature = "alloc")]
impl<const N: usize> crate::types::ByteSerializable for Nonce<N> {
    fn to_bytes(&self) -> alloc::vec::Vec<u8> {
        self.data.to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> crate::error::Result<Self> {
        Self::from_slice(bytes)
    }
}

// Algorithm compatibility marker traits
/// Salsa20 (and Salsa20/8, Salsa20/12) compatible nonce sizes
pub trait SalsaCompatible: Sealed {}
impl SalsaCompatible for Nonce<SALSA_NONCE_SIZE> {}

/// XSalsa20 (and XSalsa8, XSalsa12) compatible nonce sizes
pub trait XSalsaCompatible: Sealed {}
impl XSalsaCompatible for Nonce<XSALSA_NONCE_SIZE> {}
