//! Portable multiple-precision signed integer arithmetic.
//!
//! `mpint` provides the arithmetic substrate for public-key cryptography
//! and number theory: an arbitrary-precision [`BigInt`] stored as a
//! little-endian digit vector with a separate sign, schoolbook and
//! Karatsuba multiplication, Knuth long division, Barrett / Montgomery /
//! diminished-radix modular reduction behind the [`Reducer`] capability,
//! sliding-window modular exponentiation, binary and extended binary GCD,
//! modular inverse, integer roots, Miller-Rabin primality and the RSA-CRT
//! private-key operation.
//!
//! ## Example
//!
//! ```
//! use mpint::BigInt;
//!
//! let p = BigInt::from_str_radix("10000000000000000000000000000043", 16)?;
//! let g = BigInt::from(5u32);
//! let x = BigInt::from(0xDEADBEEFu32);
//! let y = g.pow_mod(&x, &p)?;
//! assert_eq!(y, g.pow_mod_slow(&x, &p)?);
//! # Ok::<(), mpint::Error>(())
//! ```
//!
//! ## Randomness
//!
//! Randomized operations (prime generation, Miller-Rabin bases) are
//! generic over [`rand::Rng`]. The convenience forms that fall back to
//! the built-in [`InsecureRng`] return [`Advisory`] results flagged with
//! [`Warning::InsecureRng`]; the fallback must never produce key
//! material.
//!
//! ## Caveats
//!
//! The algorithms branch and shift on secret-dependent values; nothing
//! here is constant-time, so this crate must not be used where timing
//! side channels matter. A [`BigInt`] is exclusively owned; share values
//! across threads by cloning.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod algorithms;
pub mod big_digit;
mod bigint;
mod bigrand;
mod error;
pub mod prime;
mod traits;

pub use crate::big_digit::{BigDigit, DoubleBigDigit};
pub use crate::bigint::reduce::{is_dr_modulus, Barrett, DiminishedRadix, Montgomery, Reducer};
pub use crate::bigint::{cmp_slice, BigInt, Sign, KARATSUBA_MUL_CUTOFF, MAX_DIGITS};
pub use crate::bigrand::{InsecureRng, RandBigInt};
pub use crate::error::{Advisory, Error, Warning};
pub use crate::traits::{ExtendedGcd, ModInverse};
