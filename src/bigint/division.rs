//! Single-digit and Knuth schoolbook division.

use core::cmp::Ordering;
use core::ops::{Div, DivAssign, Rem, RemAssign};

use num_traits::{Signed, Zero};

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};
use crate::error::Error;

use super::multiplication::scalar_mul;
use super::shift::{shl_digits_in_place, shr_bits_in_place, shr_digits_in_place};
use super::{cmp_slice, BigInt, Sign};

#[inline]
fn is_pow2(b: BigDigit) -> Option<u32> {
    if b == 0 || b & (b - 1) != 0 {
        None
    } else {
        Some(b.trailing_zeros())
    }
}

/// `|a| / b` and `|a| mod b` for a single digit `b`, high digit first
/// through a double-width accumulator.
pub fn div_rem_digit(a: &[BigDigit], b: BigDigit) -> (Vec<BigDigit>, BigDigit) {
    debug_assert!(b != 0);

    let mut q = vec![0; a.len()];
    let mut w: DoubleBigDigit = 0;
    for (i, &ai) in a.iter().enumerate().rev() {
        w = (w << BITS) | DoubleBigDigit::from(ai);
        if w >= DoubleBigDigit::from(b) {
            let t = w / DoubleBigDigit::from(b);
            w -= t * DoubleBigDigit::from(b);
            q[i] = t as BigDigit;
        }
    }

    while q.last() == Some(&0) {
        q.pop();
    }
    (q, w as BigDigit)
}

impl BigInt {
    /// Quotient and remainder of division by a single digit.
    ///
    /// The remainder is returned as an unsigned magnitude; it belongs to
    /// the dividend's sign. Unit divisors and powers of two take fast
    /// paths that never touch the main loop.
    pub fn div_rem_digit(&self, b: BigDigit) -> Result<(BigInt, BigDigit), Error> {
        if b == 0 {
            return Err(Error::DivideByZero);
        }
        if self.is_zero() {
            return Ok((BigInt::new(), 0));
        }
        if b == 1 {
            return Ok((self.clone(), 0));
        }
        if let Some(k) = is_pow2(b) {
            let r = self.data[0] & (b - 1);
            return Ok((self >> k as usize, r));
        }

        let (q, r) = div_rem_digit(&self.data, b);
        Ok((BigInt::from_vec(self.sign, q), r))
    }

    /// Signed quotient and remainder: `self == q * other + r`, with
    /// `|r| < |other|` and `r` taking the dividend's sign.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), Error> {
        div_rem(self, other)
    }

    /// Remainder normalised into `[0, |m|)`.
    pub fn rem_euclid(&self, m: &BigInt) -> Result<BigInt, Error> {
        let (_, mut r) = self.div_rem(m)?;
        if r.sign == Sign::Minus {
            r += &m.abs();
        }
        Ok(r)
    }
}

/// Knuth schoolbook division (HAC 14.20) on signed values.
pub fn div_rem(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt), Error> {
    if b.is_zero() {
        return Err(Error::DivideByZero);
    }

    let sign_q = a.sign * b.sign;

    match cmp_slice(&a.data, &b.data) {
        Ordering::Less => return Ok((BigInt::new(), a.clone())),
        Ordering::Equal => {
            return Ok((BigInt::from_single_digit(sign_q, 1), BigInt::new()));
        }
        Ordering::Greater => {}
    }

    let mut x = a.abs();
    let mut y = b.abs();

    // Normalise so the top digit of y has its high bit set.
    let norm_rem = (y.bits() % BITS as u64) as usize;
    let norm = if norm_rem < BITS - 1 {
        BITS - 1 - norm_rem
    } else {
        0
    };
    if norm > 0 {
        x <<= norm;
        y <<= norm;
    }

    let n = x.data.len() - 1;
    let t = y.data.len() - 1;

    let mut q = BigInt::new();
    q.data.resize(n - t + 1, 0);

    // Pre-subtract y*base^(n-t) while x still exceeds it.
    shl_digits_in_place(&mut y, n - t);
    while cmp_slice(&x.data, &y.data) != Ordering::Less {
        q.data[n - t] += 1;
        x -= &y;
    }
    shr_digits_in_place(&mut y, n - t);

    for i in (t + 1..=n).rev() {
        if i > x.data.len() {
            continue;
        }

        // Trial digit: floor((x[i]*B + x[i-1]) / y[t]), capped at B-1.
        let mut qhat: BigDigit = if x.digit(i) == y.digit(t) {
            BigDigit::MAX
        } else {
            let tmp = ((DoubleBigDigit::from(x.digit(i)) << BITS)
                | DoubleBigDigit::from(x.digit(i - 1)))
                / DoubleBigDigit::from(y.digit(t));
            if tmp > DoubleBigDigit::from(BigDigit::MAX) {
                BigDigit::MAX
            } else {
                tmp as BigDigit
            }
        };

        // Refine against the top three digits of x: decrement while
        // qhat*(y[t]*B + y[t-1]) > x[i]*B^2 + x[i-1]*B + x[i-2].
        qhat = qhat.wrapping_add(1);
        let mut lhs;
        loop {
            qhat = qhat.wrapping_sub(1);
            let mut yt = vec![y.digit(t.wrapping_sub(1)), y.digit(t)];
            while yt.last() == Some(&0) {
                yt.pop();
            }
            lhs = scalar_mul(&yt, qhat);

            let mut rhs = vec![
                x.digit(i.wrapping_sub(2)),
                x.digit(i - 1),
                x.digit(i),
            ];
            while rhs.last() == Some(&0) {
                rhs.pop();
            }
            if cmp_slice(&lhs, &rhs) != Ordering::Greater {
                break;
            }
        }

        // x -= qhat * y * base^(i-t-1); add back once if that overshot.
        let mut t1 = BigInt::from_vec(Sign::Plus, scalar_mul(&y.data, qhat));
        shl_digits_in_place(&mut t1, i - t - 1);
        x -= &t1;

        if x.sign == Sign::Minus {
            let mut t1 = y.clone();
            shl_digits_in_place(&mut t1, i - t - 1);
            x += &t1;
            qhat = qhat.wrapping_sub(1);
        }
        q.data[i - t - 1] = qhat;
    }

    q.sign = sign_q;
    q.normalize();

    shr_bits_in_place(&mut x, norm);
    if !x.is_zero() {
        x.sign = a.sign;
    }

    Ok((q, x))
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        match div_rem(self, other) {
            Ok((q, _)) => q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl DivAssign<&BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}

impl DivAssign<BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: BigInt) {
        *self = &*self / &other;
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        match div_rem(self, other) {
            Ok((_, r)) => r,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl RemAssign<&BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}

impl RemAssign<BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: BigInt) {
        *self = &*self % &other;
    }
}

impl Div<BigDigit> for &BigInt {
    type Output = BigInt;

    fn div(self, other: BigDigit) -> BigInt {
        match self.div_rem_digit(other) {
            Ok((q, _)) => q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Div<BigDigit> for BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: BigDigit) -> BigInt {
        &self / other
    }
}

impl DivAssign<BigDigit> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: BigDigit) {
        *self = &*self / other;
    }
}

impl Rem<BigDigit> for &BigInt {
    type Output = BigInt;

    fn rem(self, other: BigDigit) -> BigInt {
        match self.div_rem_digit(other) {
            Ok((_, r)) => BigInt::from_single_digit(self.sign, r),
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl Rem<BigDigit> for BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: BigDigit) -> BigInt {
        &self % other
    }
}
