//! Schoolbook and Karatsuba multiplication.

use core::ops::{Mul, MulAssign};

use num_traits::Zero;

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};

use super::shift::shl_digits_in_place;
use super::{BigInt, Sign};

/// Digit-count threshold above which Karatsuba splitting beats the
/// schoolbook loop.
pub const KARATSUBA_MUL_CUTOFF: usize = 80;

/// `|a| * b` for a single digit `b`.
pub fn scalar_mul(a: &[BigDigit], b: BigDigit) -> Vec<BigDigit> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: BigDigit = 0;
    for &ai in a {
        let w = DoubleBigDigit::from(ai) * DoubleBigDigit::from(b) + DoubleBigDigit::from(carry);
        out.push(w as BigDigit);
        carry = (w >> BITS) as BigDigit;
    }
    if carry > 0 {
        out.push(carry);
    }
    while out.last() == Some(&0) {
        out.pop();
    }
    out
}

/// Schoolbook `|a| * |b|`, computing only the `ndigs` least significant
/// digits of the product; columns past the cap are discarded.
pub fn mul_low(a: &[BigDigit], b: &[BigDigit], ndigs: usize) -> Vec<BigDigit> {
    let digs = (a.len() + b.len()).min(ndigs);
    let mut w: Vec<BigDigit> = vec![0; digs];

    for (i, &ai) in a.iter().enumerate() {
        if i >= digs {
            break;
        }
        let mut carry: BigDigit = 0;
        let jmax = b.len().min(digs - i);
        for j in 0..jmax {
            let r = DoubleBigDigit::from(w[i + j])
                + DoubleBigDigit::from(ai) * DoubleBigDigit::from(b[j])
                + DoubleBigDigit::from(carry);
            w[i + j] = r as BigDigit;
            carry = (r >> BITS) as BigDigit;
        }
        if i + jmax < digs {
            w[i + jmax] = carry;
        }
    }

    while w.last() == Some(&0) {
        w.pop();
    }
    w
}

/// `|a| * |b|` by three half-size products.
///
/// Split both operands at half the shorter length:
/// `a = x1*base^B + x0`, `b = y1*base^B + y0`. Then
/// `a*b = x1y1*base^2B + ((x1+x0)(y1+y0) - x1y1 - x0y0)*base^B + x0y0`,
/// with each half-product dispatched recursively.
fn mul_karatsuba(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let split = a.len().min(b.len()) >> 1;

    // The high halves inherit normalization from the inputs; the low
    // halves may expose fresh leading zeros.
    let x0 = BigInt::from_vec(Sign::Plus, a[..split].to_vec());
    let x1 = BigInt {
        sign: Sign::Plus,
        data: a[split..].to_vec(),
    };
    let y0 = BigInt::from_vec(Sign::Plus, b[..split].to_vec());
    let y1 = BigInt {
        sign: Sign::Plus,
        data: b[split..].to_vec(),
    };

    let x0y0 = BigInt {
        sign: Sign::Plus,
        data: mul3(&x0.data, &y0.data),
    };
    let mut x1y1 = BigInt {
        sign: Sign::Plus,
        data: mul3(&x1.data, &y1.data),
    };

    let xs = &x1 + &x0;
    let ys = &y1 + &y0;
    let mut mid = BigInt {
        sign: Sign::Plus,
        data: mul3(&xs.data, &ys.data),
    };
    mid -= &x0y0;
    mid -= &x1y1;

    shl_digits_in_place(&mut mid, split);
    shl_digits_in_place(&mut x1y1, 2 * split);

    let res = &(&x0y0 + &mid) + &x1y1;
    res.data
}

/// `|a| * |b|` with dispatch: Karatsuba once both operands reach
/// [`KARATSUBA_MUL_CUTOFF`] digits, schoolbook otherwise.
pub fn mul3(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len().min(b.len()) >= KARATSUBA_MUL_CUTOFF {
        mul_karatsuba(a, b)
    } else {
        mul_low(a, b, a.len() + b.len())
    }
}

impl BigInt {
    /// The product truncated to the `ndigs` least significant digits.
    ///
    /// The cap applies to the schoolbook path and the sign follows the
    /// ordinary product rule.
    pub fn mul_low(&self, other: &BigInt, ndigs: usize) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::new();
        }
        let digs = (self.data.len() + other.data.len()).min(ndigs);
        let mut out = if self.data.len().min(other.data.len()) >= KARATSUBA_MUL_CUTOFF {
            let mut v = mul_karatsuba(&self.data, &other.data);
            v.truncate(digs);
            v
        } else {
            mul_low(&self.data, &other.data, digs)
        };
        while out.last() == Some(&0) {
            out.pop();
        }
        BigInt::from_vec(self.sign * other.sign, out)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_vec(self.sign * other.sign, mul3(&self.data, &other.data))
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: BigInt) {
        *self = &*self * &other;
    }
}

impl Mul<BigDigit> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: BigDigit) -> BigInt {
        BigInt::from_vec(self.sign, scalar_mul(&self.data, other))
    }
}

impl Mul<BigDigit> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: BigDigit) -> BigInt {
        &self * other
    }
}

impl MulAssign<BigDigit> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: BigDigit) {
        *self = &*self * other;
    }
}
