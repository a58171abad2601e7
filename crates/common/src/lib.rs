//! Common implementations and shared functionality for the snuffle library
//!
//! This crate provides the secret-holding types used by every cipher in the
//! workspace.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};
