//! Plain and modular exponentiation.
//!
//! `pow_mod` layers a left-to-right k-ary sliding window over a
//! [`Reducer`] chosen by modulus shape: diminished-radix for moduli close
//! to a power of two, Montgomery for odd moduli, Barrett otherwise.

use num_traits::{One, Pow, Signed, Zero};

use crate::big_digit::{BigDigit, BITS};
use crate::error::Error;

use super::reduce::{is_dr_modulus, Barrett, DiminishedRadix, Montgomery, Reducer};
use super::{BigInt, Sign};

/// Window width for an exponent of `bits` bits (HAC 14.85 schedule).
fn window_size(bits: u64) -> usize {
    if bits <= 7 {
        2
    } else if bits <= 36 {
        3
    } else if bits <= 140 {
        4
    } else if bits <= 450 {
        5
    } else if bits <= 1303 {
        6
    } else if bits <= 3529 {
        7
    } else {
        8
    }
}

/// The sliding-window loop, generic over the reduction strategy.
///
/// The exponent is walked most-significant bit first in three modes:
/// skipping leading zeros, squaring through zero runs, and accumulating a
/// `winsize`-bit window which is discharged by `winsize` squarings and one
/// table multiplication.
pub(crate) fn pow_mod_windowed<R: Reducer>(
    a: &BigInt,
    e: &BigInt,
    red: &R,
) -> Result<BigInt, Error> {
    debug_assert!(e.sign != Sign::Minus);

    let winsize = window_size(e.bits());

    // Table of odd powers: M[1], then M[2^(w-1)] by squaring, then the
    // upper half by multiplying M[1] back in.
    let mut table = vec![BigInt::new(); 1 << winsize];
    table[1] = red.convert_in(a)?;

    let top = 1usize << (winsize - 1);
    table[top] = table[1].clone();
    for _ in 0..winsize - 1 {
        let mut sq = &table[top] * &table[top];
        red.reduce(&mut sq)?;
        table[top] = sq;
    }
    for x in top + 1..1 << winsize {
        let mut next = &table[x - 1] * &table[1];
        red.reduce(&mut next)?;
        table[x] = next;
    }

    let mut res = red.one()?;

    let mut mode = 0u8;
    let mut bitcnt = 1u32;
    let mut buf: BigDigit = 0;
    let mut bitcpy = 0usize;
    let mut bitbuf = 0usize;
    let mut digidx = e.data.len() as isize - 1;

    loop {
        bitcnt -= 1;
        if bitcnt == 0 {
            if digidx < 0 {
                break;
            }
            buf = e.data[digidx as usize];
            digidx -= 1;
            bitcnt = BITS as u32;
        }

        let y = (buf >> (BITS - 1)) as usize & 1;
        buf <<= 1;

        // Leading zeros cost nothing.
        if mode == 0 && y == 0 {
            continue;
        }

        // A zero bit between windows is a plain squaring.
        if mode == 1 && y == 0 {
            res = &res * &res;
            red.reduce(&mut res)?;
            continue;
        }

        bitcpy += 1;
        bitbuf |= y << (winsize - bitcpy);
        mode = 2;

        if bitcpy == winsize {
            for _ in 0..winsize {
                res = &res * &res;
                red.reduce(&mut res)?;
            }
            res = &res * &table[bitbuf];
            red.reduce(&mut res)?;
            bitcpy = 0;
            bitbuf = 0;
            mode = 1;
        }
    }

    // Drain a partially filled window bit by bit.
    if mode == 2 && bitcpy > 0 {
        for _ in 0..bitcpy {
            res = &res * &res;
            red.reduce(&mut res)?;

            bitbuf <<= 1;
            if bitbuf & (1 << winsize) != 0 {
                res = &res * &table[1];
                red.reduce(&mut res)?;
            }
        }
    }

    red.convert_out(&mut res)?;
    Ok(res)
}

impl BigInt {
    /// `self^e` by binary square-and-multiply; `0^0 == 1`.
    pub fn pow(&self, e: u64) -> BigInt {
        if e == 0 {
            return BigInt::one();
        }
        if e == 1 {
            return self.clone();
        }

        let sign = if self.sign == Sign::Minus && e & 1 == 1 {
            Sign::Minus
        } else {
            Sign::Plus
        };

        let mut res = BigInt::one();
        let mut sq = self.abs();
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                res *= &sq;
            }
            e >>= 1;
            if e > 0 {
                sq = &sq * &sq;
            }
        }

        if sign == Sign::Minus {
            -res
        } else {
            res
        }
    }

    /// `(self * b) mod n`, normalised into `[0, n)`.
    pub fn mul_mod(&self, b: &BigInt, n: &BigInt) -> Result<BigInt, Error> {
        (self * b).rem_euclid(n)
    }

    /// `self^e mod n` by sliding-window exponentiation.
    ///
    /// The modulus must be positive. A negative exponent first inverts
    /// `self` modulo `n` and raises the inverse to `|e|`, failing with
    /// [`Error::NoInverse`] when no inverse exists.
    pub fn pow_mod(&self, e: &BigInt, n: &BigInt) -> Result<BigInt, Error> {
        if n.sign == Sign::Minus {
            return Err(Error::NegativeArgument);
        }
        if n.is_zero() {
            return Err(Error::DivideByZero);
        }
        if n.is_one() {
            return Ok(BigInt::new());
        }

        if e.sign == Sign::Minus {
            let inv = crate::algorithms::mod_inverse(&self.rem_euclid(n)?, n)?;
            return inv.pow_mod(&e.abs(), n);
        }

        if is_dr_modulus(n) {
            pow_mod_windowed(self, e, &DiminishedRadix::new(n)?)
        } else if n.is_odd() {
            pow_mod_windowed(self, e, &Montgomery::new(n)?)
        } else {
            pow_mod_windowed(self, e, &Barrett::new(n)?)
        }
    }

    /// `self^e mod n` for a single-digit exponent.
    pub fn pow_mod_digit(&self, e: BigDigit, n: &BigInt) -> Result<BigInt, Error> {
        self.pow_mod(&BigInt::from(e), n)
    }

    /// `self^e mod n` by plain square-and-multiply with a full division
    /// per step. Reference path for the windowed reducers.
    pub fn pow_mod_slow(&self, e: &BigInt, n: &BigInt) -> Result<BigInt, Error> {
        if n.sign == Sign::Minus {
            return Err(Error::NegativeArgument);
        }
        if n.is_zero() {
            return Err(Error::DivideByZero);
        }
        if e.sign == Sign::Minus {
            let inv = crate::algorithms::mod_inverse(&self.rem_euclid(n)?, n)?;
            return inv.pow_mod_slow(&e.abs(), n);
        }

        let mut res = BigInt::one().rem_euclid(n)?;
        let mut sq = self.rem_euclid(n)?;
        let mut e1 = e.clone();
        while !e1.is_zero() {
            if e1.is_odd() {
                res = res.mul_mod(&sq, n)?;
            }
            e1 >>= 1;
            if !e1.is_zero() {
                sq = sq.mul_mod(&sq.clone(), n)?;
            }
        }
        Ok(res)
    }

    /// RSA private-key operation `self^d mod pq` recombined through the
    /// CRT (HAC note 14.75).
    ///
    /// Takes the primes and the per-prime exponents `dp = d mod (p-1)`,
    /// `dq = d mod (q-1)` plus `qinv = q^(-1) mod p`; the result needs no
    /// final reduction modulo `p*q`.
    pub fn pow_mod_crt(
        &self,
        p: &BigInt,
        q: &BigInt,
        dp: &BigInt,
        dq: &BigInt,
        qinv: &BigInt,
    ) -> Result<BigInt, Error> {
        let m1 = self.pow_mod(dp, p)?;
        let m2 = self.pow_mod(dq, q)?;

        // h = (m1 - m2) * qinv mod p; the Euclidean step absorbs m1 < m2.
        let h = (&(&m1 - &m2) * qinv).rem_euclid(p)?;

        Ok(&m2 + &(&h * q))
    }
}

impl Pow<u64> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, e: u64) -> BigInt {
        BigInt::pow(self, e)
    }
}

impl Pow<u32> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, e: u32) -> BigInt {
        BigInt::pow(self, u64::from(e))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, Error, RandBigInt};
    use num_traits::{One, Zero};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_pow_vector() {
        let a = BigInt::from(3u32).pow(300);
        assert_eq!(
            a.to_str_radix(16).unwrap(),
            "B39CFFF485A5DBF4D6AAE030B91BFB0EC6BBA389CD8D7F85BBA3985C19C5E24E40C543A123C6E028A873E9E3874E1B4623A44BE39B34E67DC5C2671"
        );
        assert_eq!(
            a.to_base64(),
            "AAs5z/9IWl2/TWquAwuRv7Dsa7o4nNjX+Fu6OYXBnF4k5AxUOhI8bgKKhz6eOHThtGI6RL45s05n3FwmcQ=="
        );
    }

    #[test]
    fn test_pow_signs() {
        assert_eq!(BigInt::from(-2i32).pow(3), BigInt::from(-8i32));
        assert_eq!(BigInt::from(-2i32).pow(4), BigInt::from(16u32));
        assert_eq!(BigInt::new().pow(0), BigInt::one());
        assert_eq!(BigInt::new().pow(5), BigInt::new());
    }

    #[test]
    fn test_pow_mod_trivia() {
        let a = BigInt::from(9u32);
        let e = BigInt::from(13u32);
        assert_eq!(
            a.pow_mod(&e, &BigInt::from(-5i32)),
            Err(Error::NegativeArgument)
        );
        assert_eq!(a.pow_mod(&e, &BigInt::new()), Err(Error::DivideByZero));
        assert!(a.pow_mod(&e, &BigInt::one()).unwrap().is_zero());
        assert_eq!(
            a.pow_mod(&BigInt::new(), &BigInt::from(7u32)).unwrap(),
            BigInt::one()
        );
    }

    #[test]
    fn test_windowed_matches_slow_all_reducers() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);

        // odd modulus (Montgomery), even modulus (Barrett), DR modulus
        let mut odd = rng.gen_bigint_bits(192).unwrap();
        if odd.is_even() {
            odd += 1u32;
        }
        let even = &odd + 1u32;
        let dr = BigInt::from_str_radix("FFFFFFFFFFFFFFFFFF002B", 16).unwrap();

        for n in [odd, even, dr] {
            for _ in 0..8 {
                let a = rng.gen_bigint_bits(190).unwrap();
                let e = rng.gen_bigint_bits(64).unwrap();
                assert_eq!(
                    a.pow_mod(&e, &n).unwrap(),
                    a.pow_mod_slow(&e, &n).unwrap(),
                    "disagreement for n = {}",
                    n
                );
            }
        }
    }

    #[test]
    fn test_negative_exponent_inverts() {
        let a = BigInt::from(3u32);
        let n = BigInt::from(11u32);
        let e = BigInt::from(-1i32);
        // 3^-1 mod 11 == 4
        assert_eq!(a.pow_mod(&e, &n).unwrap(), BigInt::from(4u32));
        // no inverse for a sharing a factor with n
        let a = BigInt::from(22u32);
        assert_eq!(a.pow_mod(&e, &n), Err(Error::NoInverse));
    }

    #[test]
    fn test_modular_congruence() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for _ in 0..20 {
            let a = rng.gen_bigint_bits(200).unwrap();
            let b = rng.gen_bigint_bits(180).unwrap();
            let mut m = rng.gen_bigint_bits(100).unwrap();
            if m.is_zero() {
                m = BigInt::from(2u32);
            }
            let lhs = (&a * &b).rem_euclid(&m).unwrap();
            let rhs = a
                .rem_euclid(&m)
                .unwrap()
                .mul_mod(&b.rem_euclid(&m).unwrap(), &m)
                .unwrap();
            assert_eq!(lhs, rhs);
        }
    }
}
