//! Magnitude subtraction kernels and the signed `Sub` implementations.

use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

use crate::big_digit::{BigDigit, SignedDoubleBigDigit};

use super::addition::{add2, scalar_diff};
use super::{cmp_slice, BigInt, Sign};

/// Subtract with borrow: returns the low digit of `a - b - *borrow`,
/// leaving the next borrow (0 or 1) in `borrow`.
#[inline]
pub fn sbb(a: BigDigit, b: BigDigit, borrow: &mut SignedDoubleBigDigit) -> BigDigit {
    let dif = SignedDoubleBigDigit::from(a) - SignedDoubleBigDigit::from(b) - *borrow;
    *borrow = SignedDoubleBigDigit::from(dif < 0);
    dif as BigDigit
}

/// `|a| - |b|` over digit slices; requires `|a| >= |b|`.
pub fn sub2(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    debug_assert!(cmp_slice(a, b) != Ordering::Less);

    let mut out = Vec::with_capacity(a.len());
    let mut borrow: SignedDoubleBigDigit = 0;

    for (&ai, &bi) in a.iter().zip(b.iter()) {
        out.push(sbb(ai, bi, &mut borrow));
    }
    for &ai in &a[b.len()..] {
        out.push(sbb(ai, 0, &mut borrow));
    }
    debug_assert_eq!(borrow, 0);
    out
}

/// `|a| - b` for a single digit `b`; requires `|a| >= b`.
pub fn sub_scalar(a: &[BigDigit], b: BigDigit) -> Vec<BigDigit> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: SignedDoubleBigDigit = SignedDoubleBigDigit::from(b);

    for &ai in a {
        let dif = SignedDoubleBigDigit::from(ai) - borrow;
        borrow = SignedDoubleBigDigit::from(dif < 0);
        out.push(dif as BigDigit);
    }
    debug_assert_eq!(borrow, 0);
    out
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        // Mixed signs add magnitudes under the first sign; same signs take
        // the magnitude difference, flipping the sign when |a| < |b|.
        if self.sign != other.sign {
            BigInt::from_vec(self.sign, add2(&self.data, &other.data))
        } else {
            match cmp_slice(&self.data, &other.data) {
                Ordering::Less => BigInt::from_vec(-self.sign, sub2(&other.data, &self.data)),
                Ordering::Equal => BigInt::new(),
                Ordering::Greater => BigInt::from_vec(self.sign, sub2(&self.data, &other.data)),
            }
        }
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        *self = &*self - other;
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: BigInt) {
        *self = &*self - &other;
    }
}

impl Sub<BigDigit> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: BigDigit) -> BigInt {
        match self.sign {
            Sign::Plus => scalar_diff(Sign::Plus, &self.data, other),
            Sign::Minus => BigInt {
                sign: Sign::Minus,
                data: super::addition::add_scalar(&self.data, other),
            },
        }
    }
}

impl Sub<BigDigit> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, other: BigDigit) -> BigInt {
        &self - other
    }
}

impl SubAssign<BigDigit> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: BigDigit) {
        *self = &*self - other;
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn test_signed_sub() {
        let a = BigInt::from(3u32);
        let b = BigInt::from(10u32);
        assert_eq!(&a - &b, BigInt::from(-7i32));
        assert_eq!(&b - &a, BigInt::from(7u32));
        assert_eq!(&a - &a, BigInt::new());
        assert_eq!(BigInt::from(-3i32) - BigInt::from(4u32), BigInt::from(-7i32));
        assert_eq!(BigInt::from(-3i32) - BigInt::from(-4i32), BigInt::from(1u32));
    }

    #[test]
    fn test_borrow_across_digits() {
        // (2^32 + 1) - 3 and (2^64 + 1) - 3
        let mut a = BigInt::pow2(32).unwrap();
        a.set_bit(0, true).unwrap();
        assert_eq!((&a - 3u32).to_str_radix(16).unwrap(), "FFFFFFFE");

        let mut a = BigInt::pow2(64).unwrap();
        a.set_bit(0, true).unwrap();
        let a = &a - 3u32;
        assert_eq!(a.to_str_radix(16).unwrap(), "FFFFFFFFFFFFFFFE");
        assert_eq!((&a + 3u32).to_str_radix(16).unwrap(), "10000000000000001");
        assert_eq!((&a + 3u32 - 3u32).to_str_radix(16).unwrap(), "FFFFFFFFFFFFFFFE");
    }
}
