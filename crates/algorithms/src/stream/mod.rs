//! Stream cipher implementations
//!
//! This module provides the Salsa20 family of stream ciphers, which encrypt
//! by XORing the data with a keystream derived from a key, a nonce and a
//! block counter.
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher.

/// Salsa20 family of stream cipher implementations
pub mod salsa;

// Re-export commonly used types
pub use salsa::{
    hsalsa, Key, Salsa, Salsa12, Salsa20, Salsa8, SalsaCore, XNonce, XSalsa, XSalsa12, XSalsa20,
    XSalsa8, XSalsaCore,
};

use snuffle_api::traits::{StreamCipher, StreamCipherSeek};
use snuffle_api::Result as ApiResult;
use snuffle_params::symmetric::{
    SALSA_BLOCK_SIZE, SALSA_KEY_SIZES, SALSA_NONCE_SIZE, XSALSA_KEY_SIZES, XSALSA_NONCE_SIZE,
};

use crate::error::to_api_result;
use crate::types::Rounds;

impl<R: Rounds> StreamCipher for Salsa<R> {
    const KEY_SIZES: &'static [usize] = SALSA_KEY_SIZES;
    const NONCE_SIZE: usize = SALSA_NONCE_SIZE;
    const BLOCK_SIZE: usize = SALSA_BLOCK_SIZE;
    const ROUNDS: usize = R::COUNT;

    fn name() -> &'static str {
        R::SALSA_NAME
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> ApiResult<()> {
        to_api_result(Salsa::apply_keystream(self, data))
    }

    fn write_keystream(&mut self, output: &mut [u8]) -> ApiResult<()> {
        to_api_result(Salsa::write_keystream(self, output))
    }

    fn reset(&mut self) {
        Salsa::reset(self)
    }
}

impl<R: Rounds> StreamCipherSeek for Salsa<R> {
    fn seek(&mut self, block: u64) -> ApiResult<()> {
        to_api_result(Salsa::seek(self, block))
    }

    fn seek_bytes(&mut self, offset: u64) -> ApiResult<()> {
        to_api_result(Salsa::seek_bytes(self, offset))
    }

    fn current_pos(&self) -> u128 {
        Salsa::current_pos(self)
    }

    fn block_pos(&self) -> u64 {
        Salsa::block_pos(self)
    }
}

impl<R: Rounds> StreamCipher for XSalsa<R> {
    const KEY_SIZES: &'static [usize] = XSALSA_KEY_SIZES;
    const NONCE_SIZE: usize = XSALSA_NONCE_SIZE;
    const BLOCK_SIZE: usize = SALSA_BLOCK_SIZE;
    const ROUNDS: usize = R::COUNT;

    fn name() -> &'static str {
        R::XSALSA_NAME
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> ApiResult<()> {
        to_api_result(XSalsa::apply_keystream(self, data))
    }

    fn write_keystream(&mut self, output: &mut [u8]) -> ApiResult<()> {
        to_api_result(XSalsa::write_keystream(self, output))
    }

    fn reset(&mut self) {
        XSalsa::reset(self)
    }
}

impl<R: Rounds> StreamCipherSeek for XSalsa<R> {
    fn seek(&mut self, block: u64) -> ApiResult<()> {
        to_api_result(XSalsa::seek(self, block))
    }

    fn seek_bytes(&mut self, offset: u64) -> ApiResult<()> {
        to_api_result(XSalsa::seek_bytes(self, offset))
    }

    fn current_pos(&self) -> u128 {
        XSalsa::current_pos(self)
    }

    fn block_pos(&self) -> u64 {
        XSalsa::block_pos(self)
    }
}
