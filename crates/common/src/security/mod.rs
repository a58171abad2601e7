//! Security primitives and memory safety utilities
//!
//! Key material, derived subkeys and intermediate cipher state all pass
//! through these types so that they are wiped when they go out of scope.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer};
