//! Modular reduction strategies.
//!
//! Each reducer precomputes a per-modulus constant at construction and
//! contracts values into `[0, m)`. [`Reducer`] is the capability the
//! sliding-window exponentiation is generic over, so the window loop never
//! branches on the reduction strategy.

use core::cmp::Ordering;

use num_traits::Zero;

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};
use crate::error::Error;

use super::shift::{shr_digits_in_place, shl_digits_in_place};
use super::subtraction::sub2;
use super::{cmp_slice, BigInt, Sign};

/// A modular reduction strategy with a fixed modulus.
///
/// `convert_in` maps an arbitrary integer into the reducer's working
/// representation, `one` is the working representation of 1, `reduce`
/// contracts an in-range product, and `convert_out` maps the accumulator
/// back to a plain residue.
pub trait Reducer {
    /// The modulus this reducer was set up for.
    fn modulus(&self) -> &BigInt;

    /// Bring `a` into the working representation in `[0, m)`.
    fn convert_in(&self, a: &BigInt) -> Result<BigInt, Error>;

    /// The working representation of 1.
    fn one(&self) -> Result<BigInt, Error>;

    /// Contract `x` into `[0, m)`; `x` must satisfy the strategy's range
    /// precondition (`x < m^2`, or `x < m*R` for Montgomery).
    fn reduce(&self, x: &mut BigInt) -> Result<(), Error>;

    /// Map the accumulator back to a plain residue.
    fn convert_out(&self, x: &mut BigInt) -> Result<(), Error> {
        let _ = x;
        Ok(())
    }
}

fn check_modulus(m: &BigInt) -> Result<(), Error> {
    if m.is_zero() {
        return Err(Error::DivideByZero);
    }
    if m.sign == Sign::Minus {
        return Err(Error::NegativeArgument);
    }
    Ok(())
}

/// Barrett reduction: generic over any positive modulus.
///
/// Precomputes `mu = floor(base^(2k) / m)` where `k` is the modulus digit
/// count (HAC 14.42).
pub struct Barrett {
    m: BigInt,
    mu: BigInt,
}

impl Barrett {
    pub fn new(m: &BigInt) -> Result<Barrett, Error> {
        check_modulus(m)?;
        let b2k = BigInt::pow2(2 * m.len() as u64 * BITS as u64)?;
        let (mu, _) = b2k.div_rem(m)?;
        Ok(Barrett { m: m.clone(), mu })
    }
}

impl Reducer for Barrett {
    fn modulus(&self) -> &BigInt {
        &self.m
    }

    fn convert_in(&self, a: &BigInt) -> Result<BigInt, Error> {
        a.rem_euclid(&self.m)
    }

    fn one(&self) -> Result<BigInt, Error> {
        Ok(BigInt::from(1u32))
    }

    fn reduce(&self, x: &mut BigInt) -> Result<(), Error> {
        let k = self.m.len();

        // q3 = (x / base^(k-1)) * mu / base^(k+1)
        let mut q = x.clone();
        shr_digits_in_place(&mut q, k - 1);
        q *= &self.mu;
        shr_digits_in_place(&mut q, k + 1);

        // x mod base^(k+1) minus (q3 * m) mod base^(k+1)
        *x = x.mod_pow2((k as u64 + 1) * BITS as u64);
        q = q.mul_low(&self.m, k + 1);
        *x -= &q;

        if x.sign == Sign::Minus {
            let mut fix = BigInt::from(1u32);
            shl_digits_in_place(&mut fix, k + 1);
            *x += &fix;
        }

        while *x >= self.m {
            *x -= &self.m;
        }
        Ok(())
    }
}

/// True when `m` qualifies for diminished-radix reduction: a single digit,
/// or at least half its digits equal to `base - 1`.
pub fn is_dr_modulus(m: &BigInt) -> bool {
    match m.len() {
        0 => false,
        1 => true,
        len => {
            let full = m.digits().iter().filter(|&&d| d == BigDigit::MAX).count();
            full >= len / 2
        }
    }
}

/// Diminished-radix reduction for moduli of the form `2^p - d`.
///
/// Precomputes `mu = 2^bits(m) - m`; reduction is shift, multiply by the
/// small `mu` and add, repeated until the value fits (LibTomMath's
/// `reduce_2k_l` shape).
pub struct DiminishedRadix {
    m: BigInt,
    mu: BigInt,
    p: u64,
}

impl DiminishedRadix {
    pub fn new(m: &BigInt) -> Result<DiminishedRadix, Error> {
        check_modulus(m)?;
        let p = m.bits();
        let mu = &BigInt::pow2(p)? - m;
        Ok(DiminishedRadix {
            m: m.clone(),
            mu,
            p,
        })
    }
}

impl Reducer for DiminishedRadix {
    fn modulus(&self) -> &BigInt {
        &self.m
    }

    fn convert_in(&self, a: &BigInt) -> Result<BigInt, Error> {
        a.rem_euclid(&self.m)
    }

    fn one(&self) -> Result<BigInt, Error> {
        Ok(BigInt::from(1u32))
    }

    fn reduce(&self, x: &mut BigInt) -> Result<(), Error> {
        loop {
            // x = (x mod 2^p) + (x / 2^p) * mu
            let mut q = x.shift_right(self.p as i64);
            *x = x.mod_pow2(self.p);
            if !q.is_zero() {
                q *= &self.mu;
                *x += &q;
            }
            if *x >= self.m {
                *x -= &self.m;
                continue;
            }
            break;
        }
        Ok(())
    }
}

/// Montgomery reduction for odd moduli.
///
/// Precomputes `rho = -m^(-1) mod base` by Newton iteration from a 4-bit
/// seed and `R mod m` (`R = base^k`) by repeated doubling. Values travel
/// in Montgomery form `x*R mod m`; `convert_out` strips the final factor
/// of `R`.
pub struct Montgomery {
    m: BigInt,
    rho: BigDigit,
    r_mod_m: BigInt,
}

impl Montgomery {
    pub fn new(m: &BigInt) -> Result<Montgomery, Error> {
        check_modulus(m)?;
        if m.is_even() {
            return Err(Error::BadArgument(1));
        }

        let b = m.low_digit();
        // x*b == 1 mod 2^4 from the seed; each squaring step doubles the
        // precision up to the digit width.
        let mut x: BigDigit = (((b.wrapping_add(2)) & 4) << 1).wrapping_add(b);
        x = x.wrapping_mul(2u32.wrapping_sub(b.wrapping_mul(x))); // mod 2^8
        x = x.wrapping_mul(2u32.wrapping_sub(b.wrapping_mul(x))); // mod 2^16
        x = x.wrapping_mul(2u32.wrapping_sub(b.wrapping_mul(x))); // mod 2^32
        let rho = x.wrapping_neg();

        let r_mod_m = montgomery_norm(m)?;
        Ok(Montgomery {
            m: m.clone(),
            rho,
            r_mod_m,
        })
    }
}

/// `R mod m` by doubling-and-conditionally-subtracting.
fn montgomery_norm(m: &BigInt) -> Result<BigInt, Error> {
    // Start from a power of two below m and double the remaining distance
    // up to R = base^k, subtracting m whenever the value escapes [0, m).
    // When the top digit has its high bit set (bits(m) divisible by the
    // digit width) the start drops a whole digit and one extra doubling
    // makes up the difference, keeping the total exponent at exactly k
    // digits.
    let partial = m.bits() % BITS as u64;
    let (mut a, doublings) = if m.len() > 1 {
        if partial != 0 {
            (BigInt::pow2(m.bits() - 1)?, BITS as u64 + 1 - partial)
        } else {
            (
                BigInt::pow2(m.bits() - 1 - BITS as u64)?,
                BITS as u64 + 1,
            )
        }
    } else {
        (BigInt::from(1u32), BITS as u64)
    };

    for _ in 0..doublings {
        a *= 2u32;
        if cmp_slice(&a.data, &m.data) != Ordering::Less {
            a = BigInt::from_vec(Sign::Plus, sub2(&a.data, &m.data));
        }
    }
    Ok(a)
}

impl Reducer for Montgomery {
    fn modulus(&self) -> &BigInt {
        &self.m
    }

    fn convert_in(&self, a: &BigInt) -> Result<BigInt, Error> {
        // a*R mod m
        let a = a.rem_euclid(&self.m)?;
        (&a * &self.r_mod_m).rem_euclid(&self.m)
    }

    fn one(&self) -> Result<BigInt, Error> {
        Ok(self.r_mod_m.clone())
    }

    fn reduce(&self, x: &mut BigInt) -> Result<(), Error> {
        debug_assert!(x.sign != Sign::Minus);
        let k = self.m.len();
        let digs = 2 * k + 1;
        if x.data.len() < digs {
            x.data.resize(digs, 0);
        }

        for i in 0..k {
            // mu = x[i] * rho mod base; adding mu*m*base^i zeroes digit i
            let mu = x.data[i].wrapping_mul(self.rho);

            let mut carry: BigDigit = 0;
            for j in 0..k {
                let r = DoubleBigDigit::from(mu) * DoubleBigDigit::from(self.m.data[j])
                    + DoubleBigDigit::from(carry)
                    + DoubleBigDigit::from(x.data[i + j]);
                x.data[i + j] = r as BigDigit;
                carry = (r >> BITS) as BigDigit;
            }

            let mut j = k;
            while carry > 0 {
                if i + j == x.data.len() {
                    x.data.push(0);
                }
                let r = DoubleBigDigit::from(x.data[i + j]) + DoubleBigDigit::from(carry);
                x.data[i + j] = r as BigDigit;
                carry = (r >> BITS) as BigDigit;
                j += 1;
            }
        }

        x.normalize();
        shr_digits_in_place(x, k);

        if cmp_slice(&x.data, &self.m.data) != Ordering::Less {
            *x = BigInt::from_vec(Sign::Plus, sub2(&x.data, &self.m.data));
        }
        Ok(())
    }

    fn convert_out(&self, x: &mut BigInt) -> Result<(), Error> {
        self.reduce(x)
    }
}
