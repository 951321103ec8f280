//! Algebraic laws over random operands, canonical-form and aliasing
//! checks.

use mpint::{BigInt, RandBigInt, Sign};
use num_traits::{Signed, Zero};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn assert_canonical(x: &BigInt) {
    assert_ne!(x.digits().last(), Some(&0), "top digit is zero: {}", x);
    if x.digits().is_empty() {
        assert_eq!(x.sign(), Sign::Plus, "zero must be positive");
    }
}

fn random_signed(rng: &mut XorShiftRng, bits: u64, flip: bool) -> BigInt {
    let n = rng.gen_bigint_bits(bits).unwrap();
    if flip {
        -n
    } else {
        n
    }
}

#[test]
fn test_ring_laws() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);
    for i in 0..60u64 {
        let a = random_signed(&mut rng, i % 300 + 5, i % 2 == 0);
        let b = random_signed(&mut rng, i % 200 + 5, i % 3 == 0);
        let c = random_signed(&mut rng, i % 100 + 5, i % 5 == 0);

        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        assert_eq!(&(&a * &b) / &b, a);

        for v in [&a + &b, &a - &b, &a * &b, -&a] {
            assert_canonical(&v);
        }
    }
}

#[test]
fn test_division_identity() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);
    for i in 0..60u64 {
        let a = random_signed(&mut rng, i % 400 + 3, i % 2 == 0);
        let b = random_signed(&mut rng, i % 150 + 3, i % 3 == 0);

        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&(&q * &b) + &r, a);
        assert!(r.abs() < b.abs());
        if !r.is_zero() {
            assert_eq!(r.sign(), a.sign());
        }
        assert_canonical(&q);
        assert_canonical(&r);
    }
}

#[test]
fn test_compound_assignment_aliases_self() {
    // destination == source must behave like a disjoint computation, and
    // both operands may be the same value
    let mut rng = XorShiftRng::from_seed([1u8; 16]);
    for _ in 0..20 {
        let a = rng.gen_bigint_bits(190).unwrap();

        let doubled = &a + &a;
        assert_eq!(doubled, &a * &BigInt::from(2u32));
        assert_eq!(&a * &a, a.pow(2));
        let (q, r) = a.div_rem(&a).unwrap();
        assert_eq!(q, BigInt::from(1u32));
        assert!(r.is_zero());

        let mut x = a.clone();
        x += x.clone();
        assert_eq!(x, &a + &a);

        let mut x = a.clone();
        x -= x.clone();
        assert!(x.is_zero());
        assert_canonical(&x);

        let mut x = a.clone();
        x *= x.clone();
        assert_eq!(x, &a * &a);

        let mut x = a.clone();
        x /= x.clone();
        assert_eq!(x, BigInt::from(1u32));

        let x = &a ^ &a;
        assert!(x.is_zero());
        assert_canonical(&x);
    }
}

#[test]
fn test_string_roundtrips_random() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);
    for i in 0..20u64 {
        let a = random_signed(&mut rng, i * 13 + 1, i % 2 == 0);
        for radix in 2..=16 {
            let s = a.to_str_radix(radix).unwrap();
            assert_eq!(BigInt::from_str_radix(&s, radix).unwrap(), a);
        }
        assert_eq!(BigInt::from_base64(&a.to_base64()).unwrap(), a);
        assert_eq!(
            BigInt::from_bytes_be(&a.to_bytes_be()).unwrap(),
            a.abs()
        );
    }
}

#[test]
fn test_swap_is_field_exchange() {
    let mut a = BigInt::from(-7i32);
    let mut b = BigInt::from(1u32) << 200;
    let (a0, b0) = (a.clone(), b.clone());
    core::mem::swap(&mut a, &mut b);
    assert_eq!(a, b0);
    assert_eq!(b, a0);
}

#[test]
fn test_negation_of_zero_stays_canonical() {
    let z = BigInt::zero();
    assert_eq!((-&z).sign(), Sign::Plus);
    let a = BigInt::from(5u32);
    let z = &a - &a;
    assert_eq!(z.sign(), Sign::Plus);
    assert_canonical(&z);
}
