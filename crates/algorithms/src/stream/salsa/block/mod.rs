//! The Salsa20 block function
//!
//! The state is a 4x4 matrix of little-endian words:
//!
//! ```text
//!  c0  k0  k1  k2
//!  k3  c1  n0  n1
//!  b0  b1  c2  k4
//!  k5  k6  k7  c3
//! ```
//!
//! where `c` are the sigma/tau constants, `k` key words, `n` nonce words and
//! `b` the 64-bit block counter.

use byteorder::{ByteOrder, LittleEndian};
use core::fmt;
use core::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop};

use snuffle_common::security::EphemeralSecret;
use snuffle_internal::endian::{u64_from_u32_pair, u64_to_u32_pair};
use snuffle_params::symmetric::{
    CONSTANT_WORDS, COUNTER_WORDS, KEY_WORDS_HIGH, KEY_WORDS_LOW, NONCE_WORDS, ROTATIONS,
    SALSA_BLOCK_SIZE, SALSA_KEY_SIZE, SALSA_KEY_SIZES, SALSA_NONCE_SIZE, SALSA_SHORT_KEY_SIZE,
    SALSA_STATE_WORDS, SIGMA, TAU,
};

use crate::error::{validate, Result};
use crate::types::Rounds;

/// The 16-word Salsa20 state
pub type State = [u32; SALSA_STATE_WORDS];

/// The Salsa20 quarter round function
#[inline(always)]
pub fn quarter_round(a: usize, b: usize, c: usize, d: usize, state: &mut State) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(ROTATIONS[0]);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(ROTATIONS[1]);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(ROTATIONS[2]);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(ROTATIONS[3]);
}

/// One column round followed by one row round
#[inline(always)]
pub fn double_round(state: &mut State) {
    // column round
    quarter_round(0, 4, 8, 12, state);
    quarter_round(5, 9, 13, 1, state);
    quarter_round(10, 14, 2, 6, state);
    quarter_round(15, 3, 7, 11, state);

    // row round
    quarter_round(0, 1, 2, 3, state);
    quarter_round(5, 6, 7, 4, state);
    quarter_round(10, 11, 8, 9, state);
    quarter_round(15, 12, 13, 14, state);
}

/// Apply `R::COUNT` rounds to `state` in place, without feed-forward
#[inline]
pub fn permute<R: Rounds>(state: &mut State) {
    for _ in 0..R::DOUBLE_ROUNDS {
        double_round(state);
    }
}

/// The Salsa20 hash: the permutation followed by feed-forward of the input
pub fn salsa_block<R: Rounds>(input: &State) -> State {
    let mut output = *input;
    permute::<R>(&mut output);
    for (out, word) in output.iter_mut().zip(input.iter()) {
        *out = out.wrapping_add(*word);
    }
    output
}

/// [`salsa_block`] serialized to 64 little-endian bytes
pub fn block_bytes<R: Rounds>(input: &State) -> [u8; SALSA_BLOCK_SIZE] {
    let words = EphemeralSecret::new(salsa_block::<R>(input));
    let mut out = [0u8; SALSA_BLOCK_SIZE];
    LittleEndian::write_u32_into(&words[..], &mut out);
    out
}

/// Place the constants and key words of a 16- or 32-byte key into `state`.
///
/// The caller has already validated the key length.
pub(crate) fn load_key(state: &mut State, key: &[u8]) {
    let (constants, high) = if key.len() == SALSA_SHORT_KEY_SIZE {
        // 16-byte keys fill both key slots with the same material
        (&TAU, &key[..SALSA_SHORT_KEY_SIZE])
    } else {
        (&SIGMA, &key[SALSA_SHORT_KEY_SIZE..SALSA_KEY_SIZE])
    };

    for (&pos, &c) in CONSTANT_WORDS.iter().zip(constants.iter()) {
        state[pos] = c;
    }

    let mut words = EphemeralSecret::new([0u32; 8]);
    LittleEndian::read_u32_into(&key[..SALSA_SHORT_KEY_SIZE], &mut words[..4]);
    LittleEndian::read_u32_into(high, &mut words[4..]);

    for (&pos, &w) in KEY_WORDS_LOW.iter().chain(KEY_WORDS_HIGH.iter()).zip(words.iter()) {
        state[pos] = w;
    }
}

/// The Salsa20 core function.
///
/// Holds the initial state for one (key, nonce) pair and produces the
/// keystream block for whatever counter is currently loaded. Advancing the
/// counter is left to the caller.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SalsaCore<R: Rounds> {
    state: State,
    #[zeroize(skip)]
    rounds: PhantomData<R>,
}

impl<R: Rounds> SalsaCore<R> {
    /// Initialize the state from a 16- or 32-byte key and an 8-byte nonce,
    /// starting at block 0
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        Self::with_counter(key, nonce, 0)
    }

    /// Initialize the state with an explicit starting block counter
    pub fn with_counter(key: &[u8], nonce: &[u8], counter: u64) -> Result<Self> {
        validate::key_length(R::SALSA_NAME, key.len(), SALSA_KEY_SIZES)?;
        validate::nonce_length(R::SALSA_NAME, nonce.len(), SALSA_NONCE_SIZE)?;

        let mut state = [0u32; SALSA_STATE_WORDS];
        load_key(&mut state, key);

        let mut nonce_words = [0u32; 2];
        LittleEndian::read_u32_into(nonce, &mut nonce_words);
        state[NONCE_WORDS[0]] = nonce_words[0];
        state[NONCE_WORDS[1]] = nonce_words[1];

        let mut core = Self {
            state,
            rounds: PhantomData,
        };
        core.set_counter(counter);
        Ok(core)
    }

    /// Block counter currently loaded into the state
    pub fn counter(&self) -> u64 {
        u64_from_u32_pair(self.state[COUNTER_WORDS[0]], self.state[COUNTER_WORDS[1]])
    }

    /// Load a new block counter
    pub fn set_counter(&mut self, counter: u64) {
        let (low, high) = u64_to_u32_pair(counter);
        self.state[COUNTER_WORDS[0]] = low;
        self.state[COUNTER_WORDS[1]] = high;
    }

    /// Write the keystream block for the current counter into `out`
    pub fn write_block(&self, out: &mut [u8; SALSA_BLOCK_SIZE]) {
        let mut working = EphemeralSecret::new(self.state);
        permute::<R>(&mut working);
        for (w, s) in working.iter_mut().zip(self.state.iter()) {
            *w = w.wrapping_add(*s);
        }
        LittleEndian::write_u32_into(&working[..], &mut out[..]);
    }
}

impl<R: Rounds> fmt::Debug for SalsaCore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SalsaCore<{}>([REDACTED], counter={})", R::SALSA_NAME, self.counter())
    }
}
