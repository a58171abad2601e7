//! Internal utilities for the snuffle library
//!
//! Counter word helpers and constant-time helpers shared by the cipher
//! implementations. Not part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
