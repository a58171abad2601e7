//! Trait definitions for the cipher API

pub mod stream;

pub use stream::{StreamCipher, StreamCipherSeek};
