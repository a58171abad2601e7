//! Testing utilities and known-answer vectors for the snuffle library

pub mod vectors;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Route `log` output from the ciphers to the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic RNG for tests that need bulk random input
pub fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Decode a hex string from a vector table
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex in test vector {:?}: {}", s, e))
}
