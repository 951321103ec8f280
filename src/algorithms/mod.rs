//! Low-level algorithms for big integer arithmetic.
//!
//! This module re-exports the internal arithmetic primitives used by
//! [`BigInt`](crate::BigInt), making them available for direct use on
//! digit slices, alongside the number-theoretic algorithms.

#![allow(clippy::many_single_char_names)]

// Re-export arithmetic primitives from their canonical locations.
//
// The implementations live inside the `bigint` submodules where they are
// used by the operator trait impls. We simply widen their visibility here.

// --- addition ---
pub use crate::bigint::addition::{adc, add2, add_scalar};

// --- subtraction ---
pub use crate::bigint::subtraction::{sbb, sub2, sub_scalar};

// --- multiplication ---
pub use crate::bigint::multiplication::{mul3, mul_low, scalar_mul};

// --- division ---
pub use crate::bigint::division::{div_rem, div_rem_digit};

// --- comparison ---
pub use crate::bigint::cmp_slice;

// --- modular reduction ---
pub use crate::bigint::reduce::{is_dr_modulus, Barrett, DiminishedRadix, Montgomery, Reducer};

// --- number theory ---
mod gcd;
mod mod_inverse;
mod roots;

pub use self::gcd::*;
pub use self::mod_inverse::*;
pub use self::roots::*;
