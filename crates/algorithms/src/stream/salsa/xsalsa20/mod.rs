//! XSalsa20: Salsa20 with a 192-bit nonce
//!
//! The first 16 nonce bytes and the key go through HSalsa20 to produce a
//! subkey; the cipher then runs as plain Salsa20 under that subkey with the
//! last 8 nonce bytes and a block counter starting at zero.

use core::ops::{Deref, DerefMut};

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use snuffle_common::security::EphemeralSecret;
use snuffle_params::symmetric::{
    HSALSA_INPUT_SIZE, SALSA_KEY_SIZE, XSALSA_KEY_SIZES, XSALSA_NONCE_SIZE,
};

use super::block::SalsaCore;
use super::hsalsa::hsalsa;
use super::salsa20::Salsa;
use crate::error::{validate, Result};
use crate::types::{Nonce, Rounds, XSalsaCompatible};

/// XSalsa core function: a [`SalsaCore`] keyed with the HSalsa20 subkey
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XSalsaCore<R: Rounds>(SalsaCore<R>);

impl<R: Rounds> XSalsaCore<R> {
    /// Derive the subkey from a 32-byte key and 24-byte nonce and
    /// initialize the inner core at block 0
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        validate::key_length(R::XSALSA_NAME, key.len(), XSALSA_KEY_SIZES)?;
        validate::nonce_length(R::XSALSA_NAME, nonce.len(), XSALSA_NONCE_SIZE)?;

        let mut key_array = EphemeralSecret::new([0u8; SALSA_KEY_SIZE]);
        key_array.copy_from_slice(key);
        let mut prefix = [0u8; HSALSA_INPUT_SIZE];
        prefix.copy_from_slice(&nonce[..HSALSA_INPUT_SIZE]);

        let subkey = hsalsa::<R>(&key_array, &prefix);
        let core = SalsaCore::new(subkey.as_slice(), &nonce[HSALSA_INPUT_SIZE..])?;

        Ok(Self(core))
    }
}

impl<R: Rounds> Deref for XSalsaCore<R> {
    type Target = SalsaCore<R>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<R: Rounds> DerefMut for XSalsaCore<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<R: Rounds> core::fmt::Debug for XSalsaCore<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "XSalsaCore<{}>([REDACTED], counter={})", R::XSALSA_NAME, self.0.counter())
    }
}

/// XSalsa family stream cipher with `R` rounds
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct XSalsa<R: Rounds> {
    inner: Salsa<R>,
}

impl<R: Rounds> XSalsa<R> {
    /// Create a new cipher from a 32-byte key and a 24-byte nonce
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        let core = XSalsaCore::<R>::new(key, nonce)?;
        debug!("{} initialized: {} rounds", R::XSALSA_NAME, R::COUNT);
        Ok(Self::from_core(&core))
    }

    /// Drive an already derived core, starting at its current counter
    pub fn from_core(core: &XSalsaCore<R>) -> Self {
        Self {
            inner: Salsa::named(core.0.clone(), R::XSALSA_NAME),
        }
    }

    /// Create a new cipher from a typed 24-byte nonce
    pub fn from_nonce<const N: usize>(key: &[u8], nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: XSalsaCompatible,
    {
        Self::new(key, nonce.as_ref())
    }

    /// XOR keystream into `data` in place
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner.apply_keystream(data)
    }

    /// XOR keystream into `input`, writing the result to `output`
    pub fn apply_keystream_b2b(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.inner.apply_keystream_b2b(input, output)
    }

    /// Fill `out` with raw keystream
    pub fn write_keystream(&mut self, out: &mut [u8]) -> Result<()> {
        self.inner.write_keystream(out)
    }

    /// Encrypt `data` in place
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner.apply_keystream(data)
    }

    /// Decrypt `data` in place
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner.apply_keystream(data)
    }

    /// Position keystream generation at the start of block `block`
    pub fn seek(&mut self, block: u64) -> Result<()> {
        self.inner.seek(block)
    }

    /// Position keystream generation at byte `offset`
    pub fn seek_bytes(&mut self, offset: u64) -> Result<()> {
        self.inner.seek_bytes(offset)
    }

    /// Keystream position in bytes
    pub fn current_pos(&self) -> u128 {
        self.inner.current_pos()
    }

    /// Counter of the next block to be generated, saturating at `u64::MAX`
    pub fn block_pos(&self) -> u64 {
        self.inner.block_pos()
    }

    /// Rewind to the block the cipher started at
    pub fn reset(&mut self) {
        self.inner.reset()
    }

    /// Whether the counter space has been used up
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }

    /// Keystream bytes still available before the counter space ends
    pub fn remaining(&self) -> u128 {
        self.inner.remaining()
    }
}
