//! Magnitude addition kernels and the signed `Add` implementations.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};

use super::subtraction::sub2;
use super::{cmp_slice, BigInt, Sign};

/// Add with carry: returns the low digit of `a + b + *acc`, leaving the
/// carry in `acc`.
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

/// `|a| + |b|` over digit slices.
pub fn add2(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let (x, y) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(x.len() + 1);
    let mut carry: DoubleBigDigit = 0;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        out.push(adc(xi, yi, &mut carry));
    }
    for &xi in &x[y.len()..] {
        out.push(adc(xi, 0, &mut carry));
    }
    if carry > 0 {
        out.push(carry as BigDigit);
    }
    out
}

/// `|a| + b` for a single digit `b`.
pub fn add_scalar(a: &[BigDigit], b: BigDigit) -> Vec<BigDigit> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: DoubleBigDigit = DoubleBigDigit::from(b);

    for &ai in a {
        out.push(adc(ai, 0, &mut carry));
    }
    if carry > 0 {
        out.push(carry as BigDigit);
    }
    out
}

/// `sign * (|a| - b)` where `b` is a single digit; handles `|a| < b`.
pub(super) fn scalar_diff(sign: Sign, a: &[BigDigit], b: BigDigit) -> BigInt {
    match a.len() {
        0 => BigInt::from_single_digit(-sign, b),
        1 if a[0] <= b => BigInt::from_single_digit(-sign, b - a[0]),
        1 => BigInt::from_single_digit(sign, a[0] - b),
        _ => BigInt::from_vec(sign, super::subtraction::sub_scalar(a, b)),
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        // Same signs add magnitudes; mixed signs subtract the smaller
        // magnitude from the larger, which donates its sign.
        if self.sign == other.sign {
            BigInt::from_vec(self.sign, add2(&self.data, &other.data))
        } else {
            match cmp_slice(&self.data, &other.data) {
                Ordering::Less => BigInt::from_vec(other.sign, sub2(&other.data, &self.data)),
                Ordering::Equal => BigInt::new(),
                Ordering::Greater => BigInt::from_vec(self.sign, sub2(&self.data, &other.data)),
            }
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        *self = &*self + other;
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: BigInt) {
        *self = &*self + &other;
    }
}

impl Add<BigDigit> for &BigInt {
    type Output = BigInt;

    fn add(self, other: BigDigit) -> BigInt {
        match self.sign {
            Sign::Plus => BigInt {
                sign: Sign::Plus,
                data: add_scalar(&self.data, other),
            },
            Sign::Minus => scalar_diff(Sign::Minus, &self.data, other),
        }
    }
}

impl Add<BigDigit> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, other: BigDigit) -> BigInt {
        &self + other
    }
}

impl AddAssign<BigDigit> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: BigDigit) {
        *self = &*self + other;
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn test_signed_add() {
        let a = BigInt::from(-5i32);
        let b = BigInt::from(3u32);
        assert_eq!(&a + &b, BigInt::from(-2i32));
        assert_eq!(&b + &a, BigInt::from(-2i32));
        assert_eq!(&a + &a, BigInt::from(-10i32));
        assert_eq!(&a + &-&a, BigInt::new());
    }

    #[test]
    fn test_add_carry_chain() {
        let a = BigInt::from(u64::MAX);
        let one = BigInt::from(1u32);
        let sum = &a + &one;
        assert_eq!(sum.digits(), &[0, 0, 1]);
        assert_eq!(&sum - &one, a);
    }

    #[test]
    fn test_scalar_add() {
        let mut a = BigInt::from(u64::MAX);
        a += 1u32;
        assert_eq!(a.digits(), &[0, 0, 1]);
        assert_eq!(BigInt::from(-1i32) + 3u32, BigInt::from(2u32));
        assert_eq!(BigInt::from(-7i32) + 3u32, BigInt::from(-4i32));
    }

    #[test]
    fn test_long_vector() {
        let a = BigInt::from_str_radix("5A4653CA673768565B41F775D6947D55CF3813D1", 16).unwrap();
        let b = BigInt::from_str_radix("1E17714377BD22C773C0A7D1F2317F1C9A68069B", 16).unwrap();
        let s = BigInt::from_str_radix("785DC50DDEF48B1DCF029F47C8C5FC7269A01A6C", 16).unwrap();
        assert_eq!(&a + &b, s);
    }
}
