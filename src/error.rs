//! Error and warning types shared by every fallible operation.
//!
//! Hard failures are [`Error`]; advisory conditions that do not abort an
//! operation are [`Warning`], carried beside the value in [`Advisory`] so a
//! caller cannot mistake a flagged success for a clean one.

use core::fmt;

/// Hard failure of an arithmetic or conversion operation.
///
/// Errors propagate unchanged: a failing primitive aborts its caller with
/// the same error, and no operation leaves a [`BigInt`](crate::BigInt) in a
/// non-canonical state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A digit count exceeded [`MAX_DIGITS`](crate::MAX_DIGITS).
    MemoryExceeded,
    /// A caller-sized output buffer cannot hold the value.
    BufferTooSmall,
    /// A character outside the radix alphabet was encountered.
    InvalidCharacter,
    /// Positional argument `1..=4` is unusable for this operation.
    BadArgument(u8),
    /// A bit or byte index lies outside the value.
    OutOfRange,
    /// Division or reduction by zero.
    DivideByZero,
    /// A negative operand where only non-negative values are defined.
    NegativeArgument,
    /// `gcd(a, m) != 1`, so no modular inverse exists.
    NoInverse,
    /// Detected self-inconsistency; should be unreachable.
    Unexpected,
}

impl Error {
    /// The flat status code of this error in the wire-compatible numbering
    /// shared with non-Rust consumers.
    pub fn code(&self) -> u32 {
        match self {
            Error::MemoryExceeded => 10,
            Error::BufferTooSmall => 13,
            Error::InvalidCharacter => 14,
            Error::BadArgument(n) => 20 + u32::from(*n),
            Error::OutOfRange => 25,
            Error::DivideByZero => 26,
            Error::NegativeArgument => 27,
            Error::NoInverse => 28,
            Error::Unexpected => 100,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MemoryExceeded => write!(f, "digit capacity ceiling exceeded"),
            Error::BufferTooSmall => write!(f, "output buffer too small"),
            Error::InvalidCharacter => write!(f, "invalid character for radix"),
            Error::BadArgument(n) => write!(f, "bad argument {}", n),
            Error::OutOfRange => write!(f, "index out of range"),
            Error::DivideByZero => write!(f, "division by zero"),
            Error::NegativeArgument => write!(f, "negative argument"),
            Error::NoInverse => write!(f, "no modular inverse exists"),
            Error::Unexpected => write!(f, "unexpected internal state"),
        }
    }
}

impl std::error::Error for Error {}

/// Advisory condition raised alongside a successful result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Warning {
    /// The built-in non-cryptographic generator supplied randomness for
    /// this operation. Never acceptable for key material.
    InsecureRng,
}

impl Warning {
    /// Status code of this warning in the shared flat numbering.
    pub fn code(&self) -> u32 {
        match self {
            Warning::InsecureRng => 200,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InsecureRng => write!(f, "insecure fallback RNG was used"),
        }
    }
}

/// A successful result that may carry an advisory [`Warning`].
///
/// Returned by the convenience operations that fall back to the built-in
/// generator when the caller supplies no RNG. The distinct type keeps the
/// warning channel separate from both the value and the error path.
#[must_use = "an Advisory may flag that the insecure fallback RNG was used"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advisory<T> {
    value: T,
    warning: Option<Warning>,
}

impl<T> Advisory<T> {
    /// A result with no warning attached.
    pub fn clean(value: T) -> Self {
        Advisory { value, warning: None }
    }

    /// A result carrying an advisory warning.
    pub fn warned(value: T, warning: Warning) -> Self {
        Advisory {
            value,
            warning: Some(warning),
        }
    }

    /// The computed value, discarding any warning.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Borrow the computed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The warning attached to this result, if any.
    pub fn warning(&self) -> Option<Warning> {
        self.warning
    }

    /// True when the insecure fallback generator was consumed.
    pub fn used_insecure_rng(&self) -> bool {
        self.warning == Some(Warning::InsecureRng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::MemoryExceeded.code(), 10);
        assert_eq!(Error::BufferTooSmall.code(), 13);
        assert_eq!(Error::InvalidCharacter.code(), 14);
        assert_eq!(Error::BadArgument(1).code(), 21);
        assert_eq!(Error::BadArgument(4).code(), 24);
        assert_eq!(Error::OutOfRange.code(), 25);
        assert_eq!(Error::DivideByZero.code(), 26);
        assert_eq!(Error::NegativeArgument.code(), 27);
        assert_eq!(Error::NoInverse.code(), 28);
        assert_eq!(Error::Unexpected.code(), 100);
        assert_eq!(Warning::InsecureRng.code(), 200);
    }

    #[test]
    fn test_advisory_flags() {
        let clean = Advisory::clean(5u32);
        assert!(!clean.used_insecure_rng());
        assert_eq!(clean.into_value(), 5);

        let warned = Advisory::warned(7u32, Warning::InsecureRng);
        assert!(warned.used_insecure_rng());
        assert_eq!(warned.warning(), Some(Warning::InsecureRng));
        assert_eq!(warned.into_value(), 7);
    }
}
