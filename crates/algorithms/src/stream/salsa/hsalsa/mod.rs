//! HSalsa20 subkey derivation
//!
//! HSalsa20 runs the Salsa20 permutation over a state built from a 32-byte
//! key and a 16-byte input, then returns eight of the resulting words with
//! no feed-forward. XSalsa20 uses it to turn the first 16 bytes of its
//! 24-byte nonce into a fresh key.

use byteorder::{ByteOrder, LittleEndian};
use snuffle_common::security::{EphemeralSecret, SecretBuffer};
use snuffle_params::symmetric::{
    HSALSA_INPUT_SIZE, HSALSA_INPUT_WORDS, HSALSA_OUTPUT_SIZE, HSALSA_OUTPUT_WORDS,
    SALSA_KEY_SIZE, SALSA_STATE_WORDS, XSALSA_KEY_SIZES,
};

use super::block::{load_key, permute};
use crate::error::{validate, Result};
use crate::types::Rounds;

const CONTEXT: &str = "HSalsa20";

/// Derive a 32-byte subkey from `key` and a 16-byte `input`.
///
/// The result is the permuted state words 0, 5, 10, 15, 6, 7, 8, 9 in
/// little-endian order.
pub fn hsalsa<R: Rounds>(
    key: &[u8; SALSA_KEY_SIZE],
    input: &[u8; HSALSA_INPUT_SIZE],
) -> SecretBuffer<HSALSA_OUTPUT_SIZE> {
    let mut state = EphemeralSecret::new([0u32; SALSA_STATE_WORDS]);
    load_key(&mut state, key);

    let mut input_words = [0u32; 4];
    LittleEndian::read_u32_into(input, &mut input_words);
    for (&pos, &w) in HSALSA_INPUT_WORDS.iter().zip(input_words.iter()) {
        state[pos] = w;
    }

    permute::<R>(&mut state);

    let mut output = [0u8; HSALSA_OUTPUT_SIZE];
    let mut words = EphemeralSecret::new([0u32; HSALSA_OUTPUT_WORDS.len()]);
    for (word, &pos) in words.iter_mut().zip(HSALSA_OUTPUT_WORDS.iter()) {
        *word = state[pos];
    }
    LittleEndian::write_u32_into(&words[..], &mut output);

    let subkey = SecretBuffer::new(output);
    zeroize::Zeroize::zeroize(&mut output);
    subkey
}

/// [`hsalsa`] over unchecked slices
pub fn hsalsa_from_slices<R: Rounds>(
    key: &[u8],
    input: &[u8],
) -> Result<SecretBuffer<HSALSA_OUTPUT_SIZE>> {
    validate::key_length(CONTEXT, key.len(), XSALSA_KEY_SIZES)?;
    validate::nonce_length(CONTEXT, input.len(), HSALSA_INPUT_SIZE)?;

    let mut key_array = EphemeralSecret::new([0u8; SALSA_KEY_SIZE]);
    key_array.copy_from_slice(key);
    let mut input_array = [0u8; HSALSA_INPUT_SIZE];
    input_array.copy_from_slice(input);

    Ok(hsalsa::<R>(&key_array, &input_array))
}
