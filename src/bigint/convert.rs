//! Text, base-64 and binary-buffer conversions.

use num_integer::Integer;
use num_traits::Zero;

use crate::big_digit::{BigDigit, BITS};
use crate::error::Error;

use super::addition::add_scalar;
use super::division::div_rem_digit;
use super::multiplication::scalar_mul;
use super::{check_digits, BigInt, Sign};

const DIG_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Bits consumed per character when sizing a parse buffer for `radix`.
fn bits_per_char(radix: usize) -> usize {
    let mut b = 8;
    for shift in 2..=8 {
        if radix < 1 << shift {
            b -= 1;
        }
    }
    b.max(1)
}

#[inline]
fn digit_value(c: char) -> Option<BigDigit> {
    match c {
        '0'..='9' => Some(c as BigDigit - '0' as BigDigit),
        'A'..='F' => Some(c as BigDigit - 'A' as BigDigit + 10),
        'a'..='f' => Some(c as BigDigit - 'a' as BigDigit + 10),
        _ => None,
    }
}

impl BigInt {
    /// Parse from text in `radix` (2..=16).
    ///
    /// Accepts the alphabet `0-9A-F` in either case with an optional
    /// leading `-`. The empty string is invalid.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, Error> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadArgument(2));
        }
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(Error::InvalidCharacter);
        }

        let len = body.len();
        let needs = Integer::div_ceil(&(bits_per_char(radix as usize) * len), &BITS);
        check_digits(needs + 1)?;

        let data = if radix == 16 {
            // Nibble-packing fast path: walk the text from its least
            // significant character. Four bits per character makes the
            // up-front size exact.
            let mut data = vec![0 as BigDigit; needs];
            for (j, c) in body.chars().rev().enumerate() {
                let dig = digit_value(c).ok_or(Error::InvalidCharacter)?;
                data[j / 8] |= dig << ((j % 8) * 4);
            }
            data
        } else {
            // The up-front estimate rounds the bits-per-character down, so
            // the ceiling is re-checked as the accumulator grows.
            let mut data: Vec<BigDigit> = Vec::with_capacity(needs);
            for c in body.chars() {
                let dig = digit_value(c)
                    .filter(|&d| d < radix)
                    .ok_or(Error::InvalidCharacter)?;
                data = scalar_mul(&data, radix);
                data = add_scalar(&data, dig);
                check_digits(data.len())?;
            }
            data
        };

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_vec(sign, data))
    }

    /// Parse from text over a caller-supplied alphabet whose length is the
    /// radix (2..=256). A leading `-` still marks the sign.
    pub fn from_str_custom(s: &str, alphabet: &str) -> Result<BigInt, Error> {
        let chars: Vec<char> = alphabet.chars().collect();
        let radix = chars.len();
        if !(2..=256).contains(&radix) {
            return Err(Error::BadArgument(2));
        }
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(Error::InvalidCharacter);
        }

        let len = body.chars().count();
        check_digits(Integer::div_ceil(&(bits_per_char(radix) * len), &BITS) + 1)?;

        let mut data: Vec<BigDigit> = Vec::new();
        for c in body.chars() {
            let dig = chars
                .iter()
                .position(|&a| a == c)
                .ok_or(Error::InvalidCharacter)? as BigDigit;
            data = scalar_mul(&data, radix as BigDigit);
            data = add_scalar(&data, dig);
            check_digits(data.len())?;
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_vec(sign, data))
    }

    /// Format in `radix` (2..=16), uppercase, `-` prefix when negative;
    /// zero formats as `"0"`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, Error> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadArgument(2));
        }
        let mag = self.magnitude_str_radix(radix, false);
        if self.sign == Sign::Minus {
            Ok(format!("-{}", mag))
        } else {
            Ok(mag)
        }
    }

    /// Format over a caller-supplied alphabet whose length is the radix
    /// (2..=256). Zero formats as the alphabet's zero character.
    pub fn to_str_custom(&self, alphabet: &str) -> Result<String, Error> {
        let chars: Vec<char> = alphabet.chars().collect();
        let radix = chars.len();
        if !(2..=256).contains(&radix) {
            return Err(Error::BadArgument(2));
        }
        if self.is_zero() {
            return Ok(chars[0].to_string());
        }

        let mut digits = Vec::new();
        let mut v = self.data.clone();
        while !v.is_empty() {
            let (q, r) = div_rem_digit(&v, radix as BigDigit);
            digits.push(chars[r as usize]);
            v = q;
        }
        let mut out = String::with_capacity(digits.len() + 1);
        if self.sign == Sign::Minus {
            out.push('-');
        }
        out.extend(digits.iter().rev());
        Ok(out)
    }

    /// The magnitude formatted in `radix` without a sign.
    pub(crate) fn magnitude_str_radix(&self, radix: u32, lower: bool) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut out;
        if radix == 16 {
            out = String::with_capacity(self.data.len() * 8);
            for (k, &d) in self.data.iter().enumerate().rev() {
                if k == self.data.len() - 1 {
                    out.push_str(&format!("{:X}", d));
                } else {
                    out.push_str(&format!("{:08X}", d));
                }
            }
        } else {
            let mut digits = Vec::new();
            let mut v = self.data.clone();
            while !v.is_empty() {
                let (q, r) = div_rem_digit(&v, radix);
                digits.push(DIG_CHARS[r as usize] as char);
                v = q;
            }
            out = digits.iter().rev().collect();
        }

        if lower {
            out.make_ascii_lowercase();
        }
        out
    }

    /// Import an unsigned big-endian magnitude; the sign is `Plus`.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<BigInt, Error> {
        let needs = Integer::div_ceil(&bytes.len(), &(BITS / 8));
        check_digits(needs)?;
        let mut data = vec![0 as BigDigit; needs];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            data[i / 4] |= BigDigit::from(byte) << ((i % 4) * 8);
        }
        Ok(BigInt::from_vec(Sign::Plus, data))
    }

    /// Export the magnitude as big-endian bytes, `⌈bits/8⌉` long; zero
    /// exports as the empty vector.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let nbytes = ((self.bits() + 7) / 8) as usize;
        let mut out = Vec::with_capacity(nbytes);
        for i in (0..nbytes).rev() {
            out.push((self.data[i / 4] >> ((i % 4) * 8)) as u8);
        }
        out
    }

    /// Write the magnitude right-aligned into a caller-sized buffer,
    /// zero-filling the rest; [`Error::BufferTooSmall`] when the buffer
    /// cannot hold `⌈bits/8⌉` bytes.
    pub fn write_bytes_be(&self, buf: &mut [u8]) -> Result<(), Error> {
        buf.fill(0);
        let nbytes = ((self.bits() + 7) / 8) as usize;
        if nbytes > buf.len() {
            return Err(Error::BufferTooSmall);
        }
        let offset = buf.len() - nbytes;
        for i in 0..nbytes {
            buf[offset + i] = (self.data[(nbytes - 1 - i) / 4] >> (((nbytes - 1 - i) % 4) * 8)) as u8;
        }
        Ok(())
    }
}

// --- base-64 with a one-byte sign prefix ---

const BASE64_CHARS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Value of one base-64 character; `None` for `=`.
fn base64_value(c: u8) -> Result<Option<u8>, Error> {
    match c {
        b'A'..=b'Z' => Ok(Some(c - b'A')),
        b'a'..=b'z' => Ok(Some(c - b'a' + 26)),
        b'0'..=b'9' => Ok(Some(c - b'0' + 52)),
        b'+' => Ok(Some(62)),
        b'/' => Ok(Some(63)),
        b'=' => Ok(None),
        _ => Err(Error::InvalidCharacter),
    }
}

impl BigInt {
    /// Encode as base-64 of a sign byte (`0x00` positive, `0x01`
    /// negative) followed by the big-endian magnitude.
    pub fn to_base64(&self) -> String {
        let mag = self.to_bytes_be();
        let mut bytes = Vec::with_capacity(mag.len() + 1);
        bytes.push(u8::from(self.sign == Sign::Minus));
        bytes.extend_from_slice(&mag);

        let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
        for chunk in bytes.chunks(3) {
            let b0 = chunk[0];
            let b1 = chunk.get(1).copied().unwrap_or(0);
            let b2 = chunk.get(2).copied().unwrap_or(0);
            out.push(BASE64_CHARS[(b0 >> 2) as usize] as char);
            out.push(BASE64_CHARS[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
            if chunk.len() > 1 {
                out.push(BASE64_CHARS[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize] as char);
            } else {
                out.push('=');
            }
            if chunk.len() > 2 {
                out.push(BASE64_CHARS[(b2 & 0x3F) as usize] as char);
            } else {
                out.push('=');
            }
        }
        out
    }

    /// Decode the base-64 convention of [`to_base64`](Self::to_base64).
    ///
    /// The empty string decodes to zero. Padding is only accepted at the
    /// tail of the final quad.
    pub fn from_base64(s: &str) -> Result<BigInt, Error> {
        if s.is_empty() {
            return Ok(BigInt::new());
        }
        let raw = s.as_bytes();
        if raw.len() % 4 != 0 {
            return Err(Error::BadArgument(1));
        }

        let quads = raw.len() / 4;
        let mut bytes = Vec::with_capacity(quads * 3);
        for (qi, quad) in raw.chunks(4).enumerate() {
            let n0 = base64_value(quad[0])?;
            let n1 = base64_value(quad[1])?;
            let n2 = base64_value(quad[2])?;
            let n3 = base64_value(quad[3])?;

            // A quad starts with two data characters, and padding may only
            // close the final quad.
            let (n0, n1) = match (n0, n1) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(Error::InvalidCharacter),
            };
            if (n2.is_none() || n3.is_none()) && qi != quads - 1 {
                return Err(Error::InvalidCharacter);
            }
            if n2.is_none() && n3.is_some() {
                return Err(Error::InvalidCharacter);
            }

            bytes.push((n0 << 2) | (n1 >> 4));
            if let Some(n2) = n2 {
                bytes.push(((n1 & 0x0F) << 4) | (n2 >> 2));
                if let Some(n3) = n3 {
                    bytes.push(((n2 & 0x03) << 6) | n3);
                }
            }
        }

        let mut n = BigInt::from_bytes_be(&bytes[1..])?;
        if bytes[0] != 0 {
            n = -n;
        }
        Ok(n)
    }
}
