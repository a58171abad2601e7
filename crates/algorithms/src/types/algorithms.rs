//! Round-count definitions for the Salsa20 family
//!
//! Each marker type fixes the number of rounds at compile time. The
//! uninhabited enums are never constructed; they only parameterize the
//! cipher types.

use core::fmt::Debug;

use crate::types::sealed::Sealed;

/// Number of rounds applied by a Salsa20-family cipher
pub trait Rounds: Sealed + Copy + Clone + Debug + 'static {
    /// Total rounds (always even)
    const COUNT: usize;

    /// Double-rounds applied per block
    const DOUBLE_ROUNDS: usize = Self::COUNT / 2;

    /// Name of the 8-byte nonce cipher with this round count
    const SALSA_NAME: &'static str;

    /// Name of the extended-nonce cipher with this round count
    const XSALSA_NAME: &'static str;
}

/// Salsa20/8: 8 rounds (reduced, not recommended)
#[derive(Clone, Copy, Debug)]
pub enum R8 {}

impl Sealed for R8 {}

impl Rounds for R8 {
    const COUNT: usize = 8;
    const SALSA_NAME: &'static str = "Salsa20/8";
    const XSALSA_NAME: &'static str = "XSalsa8";
}

/// Salsa20/12: 12 rounds (reduced, not recommended)
#[derive(Clone, Copy, Debug)]
pub enum R12 {}

impl Sealed for R12 {}

impl Rounds for R12 {
    const COUNT: usize = 12;
    const SALSA_NAME: &'static str = "Salsa20/12";
    const XSALSA_NAME: &'static str = "XSalsa12";
}

/// Salsa20/20: 20 rounds (recommended)
#[derive(Clone, Copy, Debug)]
pub enum R20 {}

impl Sealed for R20 {}

impl Rounds for R20 {
    const COUNT: usize = 20;
    const SALSA_NAME: &'static str = "Salsa20";
    const XSALSA_NAME: &'static str = "XSalsa20";
}
