//! Constant values for snuffle cipher operations
//!
//! This library provides the sizes and magic numbers of the Salsa20 family
//! shared across the snuffle workspace.

#![no_std]

pub mod utils;

pub use utils::symmetric;
