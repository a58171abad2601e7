//! Salsa20 keystream driver
//!
//! Wraps a [`SalsaCore`] with a one-block buffer so keystream can be applied
//! to data of any length, resuming mid-block between calls. The 64-bit block
//! counter never wraps: once the remaining keystream cannot cover a request
//! the cipher refuses it and stays exhausted.

use log::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use snuffle_internal::constant_time::xor_in_place;
use snuffle_params::symmetric::SALSA_BLOCK_SIZE;

use super::block::SalsaCore;
use crate::error::{validate, Error, Result};
use crate::types::{Nonce, Rounds, SalsaCompatible};

/// Size of one keystream block in bytes
const BLOCK: usize = SALSA_BLOCK_SIZE;

/// Lifecycle of a keystream driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CipherState {
    Ready,
    Exhausted,
}

/// Salsa20 family stream cipher with `R` rounds
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa<R: Rounds> {
    core: SalsaCore<R>,
    buffer: [u8; BLOCK],
    /// Offset of the next unused byte in `buffer`; `BLOCK` when empty
    position: usize,
    /// Counter of the next block to generate, `None` once block `u64::MAX`
    /// has been generated
    next_block: Option<u64>,
    initial_counter: u64,
    #[zeroize(skip)]
    state: CipherState,
    #[zeroize(skip)]
    name: &'static str,
}

impl<R: Rounds> Salsa<R> {
    /// Create a new cipher from a 16- or 32-byte key and an 8-byte nonce
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        Self::with_counter(key, nonce, 0)
    }

    /// Create a new cipher starting at block `counter`
    pub fn with_counter(key: &[u8], nonce: &[u8], counter: u64) -> Result<Self> {
        let core = SalsaCore::with_counter(key, nonce, counter)?;
        debug!(
            "{} initialized: {} rounds, {}-byte key, starting block {}",
            R::SALSA_NAME,
            R::COUNT,
            key.len(),
            counter
        );
        Ok(Self::from_core(core))
    }

    /// Create a new cipher from a typed nonce
    pub fn from_nonce<const N: usize>(key: &[u8], nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: SalsaCompatible,
    {
        Self::new(key, nonce.as_ref())
    }

    /// Drive an already initialized core, starting at its current counter
    pub fn from_core(core: SalsaCore<R>) -> Self {
        Self::named(core, R::SALSA_NAME)
    }

    pub(crate) fn named(core: SalsaCore<R>, name: &'static str) -> Self {
        let counter = core.counter();
        Self {
            core,
            buffer: [0u8; BLOCK],
            position: BLOCK,
            next_block: Some(counter),
            initial_counter: counter,
            state: CipherState::Ready,
            name,
        }
    }

    /// XOR keystream into `data` in place
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data, xor_in_place)
    }

    /// XOR keystream into `input`, writing the result to `output`
    pub fn apply_keystream_b2b(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        validate::length("output buffer", output.len(), input.len())?;
        self.ensure_ready()?;
        self.reserve(input.len())?;
        output.copy_from_slice(input);
        self.process(output, xor_in_place)
    }

    /// Fill `out` with raw keystream
    pub fn write_keystream(&mut self, out: &mut [u8]) -> Result<()> {
        self.process(out, |dst, ks| dst.copy_from_slice(ks))
    }

    /// Encrypt `data` in place
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    /// Decrypt `data` in place
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    /// Position keystream generation at the start of block `block`
    pub fn seek(&mut self, block: u64) -> Result<()> {
        self.ensure_ready()?;
        trace!("{} seek to block {}", self.name, block);
        self.next_block = Some(block);
        self.discard_buffer();
        Ok(())
    }

    /// Position keystream generation at byte `offset`
    pub fn seek_bytes(&mut self, offset: u64) -> Result<()> {
        let block = offset / BLOCK as u64;
        let within = (offset % BLOCK as u64) as usize;

        self.seek(block)?;
        if within != 0 {
            self.refill()?;
            self.position = within;
        }
        Ok(())
    }

    /// Keystream position in bytes
    pub fn current_pos(&self) -> u128 {
        let blocks = match self.next_block {
            Some(block) => block as u128,
            None => 1u128 << 64,
        };
        blocks * BLOCK as u128 - (BLOCK - self.position) as u128
    }

    /// Counter of the next block to be generated.
    ///
    /// Saturates at `u64::MAX`: the value is the same before and after the
    /// final block has been consumed. Use [`remaining`](Self::remaining) or
    /// [`current_pos`](Self::current_pos) to tell the two apart.
    pub fn block_pos(&self) -> u64 {
        self.next_block.unwrap_or(u64::MAX)
    }

    /// Return to the block counter the cipher was created with
    pub fn reset(&mut self) {
        if self.state == CipherState::Exhausted {
            return;
        }
        trace!("{} reset to block {}", self.name, self.initial_counter);
        self.next_block = Some(self.initial_counter);
        self.discard_buffer();
    }

    /// Whether the counter space has been used up
    pub fn is_exhausted(&self) -> bool {
        self.state == CipherState::Exhausted
    }

    /// Keystream bytes still available before the counter space ends
    pub fn remaining(&self) -> u128 {
        if self.is_exhausted() {
            return 0;
        }
        let blocks = match self.next_block {
            Some(block) => (u64::MAX - block) as u128 + 1,
            None => 0,
        };
        (BLOCK - self.position) as u128 + blocks * BLOCK as u128
    }

    fn process<F>(&mut self, data: &mut [u8], mut op: F) -> Result<()>
    where
        F: FnMut(&mut [u8], &[u8]),
    {
        self.ensure_ready()?;
        self.reserve(data.len())?;

        let mut offset = 0;
        if self.position < BLOCK {
            let take = (BLOCK - self.position).min(data.len());
            op(&mut data[..take], &self.buffer[self.position..self.position + take]);
            self.position += take;
            offset = take;
        }

        let mut chunks = data[offset..].chunks_exact_mut(BLOCK);
        for chunk in &mut chunks {
            self.refill()?;
            op(chunk, &self.buffer[..]);
            self.position = BLOCK;
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            self.refill()?;
            op(tail, &self.buffer[..tail.len()]);
            self.position = tail.len();
        }

        Ok(())
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            CipherState::Ready => Ok(()),
            CipherState::Exhausted => Err(Error::CounterOverflow {
                algorithm: self.name,
            }),
        }
    }

    /// Fail and exhaust the cipher if fewer than `len` bytes remain
    fn reserve(&mut self, len: usize) -> Result<()> {
        if len as u128 <= self.remaining() {
            return Ok(());
        }
        warn!(
            "{} block counter exhausted at block {}",
            self.name,
            self.block_pos()
        );
        self.state = CipherState::Exhausted;
        self.discard_buffer();
        Err(Error::CounterOverflow {
            algorithm: self.name,
        })
    }

    /// Generate the block at `next_block` into the buffer and advance
    fn refill(&mut self) -> Result<()> {
        let block = self.next_block.ok_or(Error::CounterOverflow {
            algorithm: self.name,
        })?;
        self.core.set_counter(block);
        self.core.write_block(&mut self.buffer);
        self.next_block = block.checked_add(1);
        self.position = 0;
        Ok(())
    }

    fn discard_buffer(&mut self) {
        self.buffer.zeroize();
        self.position = BLOCK;
    }
}

impl<R: Rounds> core::fmt::Debug for Salsa<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Salsa")
            .field("algorithm", &self.name)
            .field("block_pos", &self.block_pos())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
