//! The machine representation of a single magnitude digit.
//!
//! A `BigDigit` is one little-endian limb of a magnitude. A
//! `DoubleBigDigit` is twice as wide and holds any product of two digits
//! plus a carry without overflow; every arithmetic kernel in this crate
//! accumulates through it.

/// One unsigned digit of a [`BigInt`](crate::BigInt) magnitude.
pub type BigDigit = u32;

/// Accumulator wide enough for `digit * digit + digit + carry`.
pub type DoubleBigDigit = u64;

/// Signed counterpart of [`DoubleBigDigit`], used by borrow-propagating
/// subtraction kernels.
pub type SignedDoubleBigDigit = i64;

/// Bit width of a single digit.
pub const BITS: usize = 32;

const LO_MASK: DoubleBigDigit = (1 << BITS) - 1;

// The double digit must be exactly twice the single digit. The kernels are
// written against this relationship and are silently wrong without it.
const _: () = assert!(
    core::mem::size_of::<DoubleBigDigit>() == 2 * core::mem::size_of::<BigDigit>()
);
const _: () = assert!(core::mem::size_of::<BigDigit>() * 8 == BITS);

#[inline]
fn get_hi(n: DoubleBigDigit) -> BigDigit {
    (n >> BITS) as BigDigit
}

#[inline]
fn get_lo(n: DoubleBigDigit) -> BigDigit {
    (n & LO_MASK) as BigDigit
}

/// Split a [`DoubleBigDigit`] into `(hi, lo)` digits.
#[inline]
pub fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
    (get_hi(n), get_lo(n))
}

/// Join two digits into a [`DoubleBigDigit`].
#[inline]
pub fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
    DoubleBigDigit::from(lo) | (DoubleBigDigit::from(hi) << BITS)
}
