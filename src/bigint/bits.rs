//! Bit-level views of the magnitude.

use core::ops::BitXor;

use crate::big_digit::{BigDigit, BITS};
use crate::error::Error;

use super::BigInt;

impl BigInt {
    /// Number of significant bits of the magnitude; zero for zero.
    pub fn bits(&self) -> u64 {
        match self.data.last() {
            None => 0,
            Some(&top) => {
                (self.data.len() as u64 - 1) * BITS as u64
                    + u64::from(BigDigit::BITS - top.leading_zeros())
            }
        }
    }

    /// Number of zero bits below the lowest one bit; zero for zero.
    pub fn trailing_zeros(&self) -> u64 {
        let i = match self.data.iter().position(|&d| d != 0) {
            None => return 0,
            Some(i) => i,
        };
        i as u64 * BITS as u64 + u64::from(self.data[i].trailing_zeros())
    }

    /// Value of bit `i` of the magnitude; bits above the top digit read 0.
    pub fn bit(&self, i: u64) -> bool {
        let dig = (i / BITS as u64) as usize;
        let pos = (i % BITS as u64) as u32;
        match self.data.get(dig) {
            None => false,
            Some(&d) => d & (1 << pos) != 0,
        }
    }

    /// Set bit `i` of the magnitude to `value`, growing as needed.
    pub fn set_bit(&mut self, i: u64, value: bool) -> Result<(), Error> {
        let dig = (i / BITS as u64) as usize;
        let pos = (i % BITS as u64) as u32;
        if dig >= self.data.len() {
            if !value {
                return Ok(());
            }
            self.grow(dig + 1)?;
            self.data.resize(dig + 1, 0);
        }
        if value {
            self.data[dig] |= 1 << pos;
        } else {
            self.data[dig] &= !(1 << pos);
        }
        self.normalize();
        Ok(())
    }

    /// The magnitude reduced modulo `2^bits`, keeping the sign.
    pub fn mod_pow2(&self, bits: u64) -> BigInt {
        if bits == 0 {
            return BigInt::new();
        }
        if bits >= self.data.len() as u64 * BITS as u64 {
            return self.clone();
        }
        let mut out = self.clone();
        let keep = ((bits + BITS as u64 - 1) / BITS as u64) as usize;
        out.data.truncate(keep);
        let partial = (bits % BITS as u64) as u32;
        if partial > 0 {
            out.data[keep - 1] &= (1 << partial) - 1;
        }
        out.normalize();
        out
    }
}

impl BitXor<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Bitwise xor of the magnitudes; the result takes the left operand's
    /// sign (reset to `Plus` when the result is zero).
    fn bitxor(self, other: &BigInt) -> BigInt {
        let (long, short) = if self.data.len() >= other.data.len() {
            (&self.data, &other.data)
        } else {
            (&other.data, &self.data)
        };
        let mut data = long.clone();
        for (d, &s) in data.iter_mut().zip(short.iter()) {
            *d ^= s;
        }
        BigInt::from_vec(self.sign, data)
    }
}

forward_all_binop_to_ref_ref!(impl BitXor for BigInt, bitxor);
