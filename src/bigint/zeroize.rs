#![cfg(feature = "zeroize")]

use zeroize::Zeroize;

use super::{BigInt, Sign};

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.data.zeroize();
        self.data.clear();
        self.sign = Sign::Plus;
    }
}
