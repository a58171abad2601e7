//! Trait definitions for synchronous stream ciphers
//!
//! A synchronous stream cipher produces a keystream that depends only on the
//! key, the nonce and a block position. Encryption and decryption are the
//! same XOR operation.

use crate::Result;

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// Accepted key sizes in bytes
    const KEY_SIZES: &'static [usize];

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Number of rounds applied per block
    const ROUNDS: usize;

    /// Human readable algorithm name
    fn name() -> &'static str;

    /// XOR the keystream into `data` in place
    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    /// Write raw keystream into `output`, continuing from the current position
    fn write_keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Rewind to the block counter the cipher was constructed with
    fn reset(&mut self);
}

/// Random access into the keystream
pub trait StreamCipherSeek {
    /// Position the cipher at the start of block `block`
    fn seek(&mut self, block: u64) -> Result<()>;

    /// Position the cipher at keystream byte `offset`
    fn seek_bytes(&mut self, offset: u64) -> Result<()>;

    /// Current keystream position in bytes
    fn current_pos(&self) -> u128;

    /// Counter of the next block that will be generated.
    ///
    /// Saturates at `u64::MAX` once the final block has been consumed;
    /// `current_pos` keeps counting past it.
    fn block_pos(&self) -> u64;
}
