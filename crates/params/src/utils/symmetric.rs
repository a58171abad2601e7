//! Constants for the Salsa20 family of stream ciphers

/// Salsa20 long key size in bytes
pub const SALSA_KEY_SIZE: usize = 32;

/// Salsa20 short key size in bytes
pub const SALSA_SHORT_KEY_SIZE: usize = 16;

/// Key sizes accepted by Salsa20, Salsa20/12 and Salsa20/8
pub const SALSA_KEY_SIZES: &[usize] = &[SALSA_SHORT_KEY_SIZE, SALSA_KEY_SIZE];

/// Key sizes accepted by XSalsa20 and HSalsa20
pub const XSALSA_KEY_SIZES: &[usize] = &[SALSA_KEY_SIZE];

/// Salsa20 nonce size in bytes
pub const SALSA_NONCE_SIZE: usize = 8;

/// XSalsa20 extended nonce size in bytes
pub const XSALSA_NONCE_SIZE: usize = 24;

/// HSalsa20 input size in bytes
pub const HSALSA_INPUT_SIZE: usize = 16;

/// HSalsa20 output size in bytes
pub const HSALSA_OUTPUT_SIZE: usize = 32;

/// Salsa20 block size in bytes
pub const SALSA_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the Salsa20 state
pub const SALSA_STATE_WORDS: usize = 16;

/// "expand 32-byte k" as little-endian words (sigma)
pub const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// "expand 16-byte k" as little-endian words (tau)
pub const TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

/// State positions of the four constant words
pub const CONSTANT_WORDS: [usize; 4] = [0, 5, 10, 15];

/// State positions of the first half of the key
pub const KEY_WORDS_LOW: [usize; 4] = [1, 2, 3, 4];

/// State positions of the second half of the key
pub const KEY_WORDS_HIGH: [usize; 4] = [11, 12, 13, 14];

/// State positions of the 64-bit nonce
pub const NONCE_WORDS: [usize; 2] = [6, 7];

/// State positions of the block counter (low word, high word)
pub const COUNTER_WORDS: [usize; 2] = [8, 9];

/// State positions of the HSalsa20 16-byte input
pub const HSALSA_INPUT_WORDS: [usize; 4] = [6, 7, 8, 9];

/// State words emitted by HSalsa20, in output order
pub const HSALSA_OUTPUT_WORDS: [usize; 8] = [0, 5, 10, 15, 6, 7, 8, 9];

/// Quarter-round rotation amounts
pub const ROTATIONS: [u32; 4] = [7, 9, 13, 18];
