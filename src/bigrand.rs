//! Randomization of big integers.
//!
//! Every randomized operation is generic over [`rand::Rng`], so the caller
//! chooses the entropy source. [`InsecureRng`] is the built-in
//! non-cryptographic fallback; the convenience forms that reach for it
//! return [`Advisory`] values flagged with [`Warning::InsecureRng`] and
//! must never feed key material.

use std::time::{SystemTime, UNIX_EPOCH};

use num_integer::Integer;
use rand::{Rng, RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::big_digit::BITS;
use crate::bigint::check_digits;
use crate::error::{Advisory, Error, Warning};
use crate::BigInt;

/// A trait for sampling random big integers.
pub trait RandBigInt {
    /// Generate a random non-negative [`BigInt`] from `nbytes` bytes of
    /// the generator's output. Fails when `nbytes` is zero.
    fn gen_bigint_bytes(&mut self, nbytes: usize) -> Result<BigInt, Error>;

    /// Generate a random [`BigInt`] of exactly `bit_size` bits: the top
    /// bit is forced on.
    fn gen_bigint_bits(&mut self, bit_size: u64) -> Result<BigInt, Error>;

    /// Generate a random probable prime of `nbytes` bytes by drawing a
    /// random value and walking to the nearest prime above it.
    fn gen_prime(&mut self, nbytes: usize) -> Result<BigInt, Error>;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_bigint_bytes(&mut self, nbytes: usize) -> Result<BigInt, Error> {
        if nbytes == 0 {
            return Err(Error::BadArgument(1));
        }
        check_digits(Integer::div_ceil(&nbytes, &(BITS / 8)) + 1)?;

        let mut bytes = vec![0u8; nbytes];
        self.fill_bytes(&mut bytes);
        BigInt::from_bytes_be(&bytes)
    }

    fn gen_bigint_bits(&mut self, bit_size: u64) -> Result<BigInt, Error> {
        if bit_size == 0 {
            return Ok(BigInt::new());
        }
        let nbytes = ((bit_size + 7) / 8) as usize;
        let mut n = self.gen_bigint_bytes(nbytes)?;

        // Trim to size, then pin the top bit so the width is exact.
        n = n.mod_pow2(bit_size);
        n.set_bit(bit_size - 1, true)?;
        Ok(n)
    }

    fn gen_prime(&mut self, nbytes: usize) -> Result<BigInt, Error> {
        let n = self.gen_bigint_bytes(nbytes)?;
        crate::prime::next_prime(&n, self)
    }
}

/// The built-in non-cryptographic generator.
///
/// A time-seeded xorshift; cheap, deterministic given its seed, and
/// completely unsuitable for secrets. It exists so operations whose
/// randomness only affects error probability (Miller-Rabin bases) work
/// without caller-supplied entropy, and every such use is surfaced
/// through [`Warning::InsecureRng`].
pub struct InsecureRng(XorShiftRng);

impl InsecureRng {
    pub fn new() -> InsecureRng {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x853C49E6748FEA9B);
        InsecureRng(XorShiftRng::seed_from_u64(nanos))
    }
}

impl Default for InsecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for InsecureRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

impl BigInt {
    /// A random value of exactly `bit_size` bits from the built-in
    /// generator; flagged [`Warning::InsecureRng`].
    pub fn random_bits(bit_size: u64) -> Result<Advisory<BigInt>, Error> {
        let mut rng = InsecureRng::new();
        Ok(Advisory::warned(
            rng.gen_bigint_bits(bit_size)?,
            Warning::InsecureRng,
        ))
    }

    /// A random `nbytes`-byte value from the built-in generator; flagged
    /// [`Warning::InsecureRng`]. Never use this for key material.
    pub fn random_bytes(nbytes: usize) -> Result<Advisory<BigInt>, Error> {
        let mut rng = InsecureRng::new();
        Ok(Advisory::warned(
            rng.gen_bigint_bytes(nbytes)?,
            Warning::InsecureRng,
        ))
    }

    /// A random `nbytes`-byte probable prime from the built-in generator;
    /// flagged [`Warning::InsecureRng`]. Never use this for key material.
    pub fn random_prime(nbytes: usize) -> Result<Advisory<BigInt>, Error> {
        let mut rng = InsecureRng::new();
        Ok(Advisory::warned(
            rng.gen_prime(nbytes)?,
            Warning::InsecureRng,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_gen_bits_exact_width() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for bits in [1u64, 7, 31, 32, 33, 64, 100, 1023] {
            let n = rng.gen_bigint_bits(bits).unwrap();
            assert_eq!(n.bits(), bits, "requested {} bits", bits);
        }
        assert!(rng.gen_bigint_bits(0).unwrap().is_empty());
    }

    #[test]
    fn test_gen_bytes_bounds() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        assert_eq!(rng.gen_bigint_bytes(0), Err(Error::BadArgument(1)));
        let n = rng.gen_bigint_bytes(16).unwrap();
        assert!(n.bits() <= 128);
        assert!(rng.gen_bigint_bytes(1 << 20).is_err());
    }

    #[test]
    fn test_gen_prime() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        let p = rng.gen_prime(16).unwrap();
        assert!(crate::prime::probably_prime(&p, &mut rng).unwrap());
    }

    #[test]
    fn test_fallback_is_flagged() {
        let n = BigInt::random_bits(64).unwrap();
        assert_eq!(n.warning(), Some(Warning::InsecureRng));
        assert_eq!(n.value().bits(), 64);
    }
}
