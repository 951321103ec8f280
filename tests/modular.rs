//! Modular exponentiation across all reducer paths, Diffie-Hellman key
//! agreement and the RSA vectors.

use mpint::{BigInt, RandBigInt};
use num_traits::One;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

/// RFC 5114 1024-bit MODP group prime.
const DH_P: &str = "B10B8F96A080E01DDE92DE5EAE5D54EC52C99FBCFB06A3C69A6A9DCA52D23B61\
                    6073E28675A23D189838EF1E2EE652C013ECB4AEA906112324975C3CD49B83BF\
                    ACCBDD7D90C4BD7098488E9C219A73724EFFD6FAE5644738FAA31A4FF55BCCC0\
                    A151AF5F0DC8B4BD45BF37DF365C1A65E68CFDA76D4DA708DF1FB2BC2E4A4371";

/// RFC 5114 generator for [`DH_P`].
const DH_G: &str = "A4D1CBD5C3FD34126765A442EFB99905F8104DD258AC507FD6406CFF14266D31\
                    266FEA1E5C41564B777E690F5504F213160217B4B01B886A5E91547F9E2749F4\
                    D7FBD7D3B9A92EE1909D0D2263F80A76A6A24C087A091F531DBF0A0169B6A28A\
                    D662A4D18E73AFA32D779D5918D08BC8858F4DCEF97C2A24855E6EEB22B3B2E5";

const RSA_N: &str = "BED310CB2BBFE6BBEE0B3168CD47711AEC9CDACFAA560748C76FA5A6A9381782\
                     A1D71D866E7A52F01926BBDB6610A6449BA65E9611D55F1CC0C2F72E157F174A\
                     CA26B6AE36560B84E7E325970D52A2591FBD2578D454D22E52F8CC52B7E64419\
                     8FC4FCD3928E2924FBC64F3F5F586E4542A73948F02FA04DCE0FF9DF1141E2C5";

const RSA_D: &str = "04f4aa4cfc77e16024107a5a046ac48f3471e664da419db2d02b201c31ecd8ff\
                     758086adc514bc2eac188b6c693c297542ad916b484f484710e27f54dd0e0de6\
                     c1c4b58e54064e9483e9957c9a66f5fa8a58fec97758e2778a3dc453093475f8\
                     a3dffdd1bb68ede240643a3d5a8fd71eff09bcbb362dd8f8ed9d8688067b5d89";

const RSA_P: &str = "f9805c758fce4a9502a6090b1d355869e3e8571a747429d3c5ca12347fa3f0b8\
                     03a002960df03aa264728af0f2baff0ed4d479186069020cfead8210baf20b63";

const RSA_Q: &str = "c3cb7489a2862898e2372f7866b43e94090fe5c36e43a7fd30a228662fe967f8\
                     e262b12e97c525150ce074f3c19172ff5ac2d782d99e6f824d0f6b3d3032f5b7";

const RSA_DP: &str = "09616a18816fa01e3a1b43fbc6fd5a75a0bbfb8a63167afc1b539d9b9bb0ee3b\
                      fce6e731fd142b202fe69e92b08d97495777259665098daa2f69169aca6c8f41";

const RSA_DQ: &str = "77fc5ca463e6d746298b2c1a1ac6667b0dbaa2514b6746b150766f4f80190750\
                      6c5b92bd3ce0e1c2aeab76c052653215eea6ecaf117198603f9d2d58c80ad2ad";

const RSA_QINV: &str = "21e7230c187496bc72ea56e6516e45f0ed0ba434ca6a763caa75d6939ffb98cd\
                        326fd9be3267565d29f817a8535a39f2fed84de66e2551f0384f8fd3f628345f";

fn hex(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 16).unwrap()
}

#[test]
fn test_pow_mod_matches_slow_on_every_reducer_path() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    let mut odd = rng.gen_bigint_bits(512).unwrap();
    if odd.is_even() {
        odd += 1u32;
    }
    let even = &odd + 1u32;
    // a diminished-radix modulus: 2^88 - 0xFFD5
    let dr = hex("FFFFFFFFFFFFFFFFFF002B");

    for n in [odd, even, dr] {
        for _ in 0..4 {
            let a = rng.gen_bigint_bits(500).unwrap();
            let e = rng.gen_bigint_bits(96).unwrap();
            assert_eq!(
                a.pow_mod(&e, &n).unwrap(),
                a.pow_mod_slow(&e, &n).unwrap(),
                "reducer disagreement for modulus {}",
                n.to_str_radix(16).unwrap()
            );
        }
    }
}

#[test]
fn test_diffie_hellman_agreement() {
    let p = hex(DH_P);
    let g = hex(DH_G);
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    assert!(p.probably_prime_with(&mut rng).unwrap());

    let a = rng.gen_bigint_bits(1023).unwrap();
    let b = rng.gen_bigint_bits(1023).unwrap();
    assert_eq!(a.bits(), 1023);
    assert_eq!(b.bits(), 1023);

    let ga = g.pow_mod(&a, &p).unwrap();
    let gb = g.pow_mod(&b, &p).unwrap();
    let gab = ga.pow_mod(&b, &p).unwrap();
    let gba = gb.pow_mod(&a, &p).unwrap();
    assert_eq!(gab, gba);
}

#[test]
fn test_rsa_roundtrip() {
    let n = hex(RSA_N);
    let e = BigInt::from(65537u32);
    let d = hex(RSA_D);
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    assert_eq!(n.to_str_radix(16).unwrap(), RSA_N);
    assert!(!n.probably_prime_with(&mut rng).unwrap());

    let m = BigInt::from(9999u32);
    let c = m.pow_mod(&e, &n).unwrap();
    assert_ne!(c, m);
    assert_eq!(c.pow_mod(&d, &n).unwrap(), m);
}

#[test]
fn test_rsa_crt_matches_plain_decrypt() {
    let n = hex(RSA_N);
    let e = BigInt::from(65537u32);
    let p = hex(RSA_P);
    let q = hex(RSA_Q);
    let dp = hex(RSA_DP);
    let dq = hex(RSA_DQ);
    let qinv = hex(RSA_QINV);

    assert_eq!(&p * &q, n);

    let m = BigInt::from(9999u32);
    let c = m.pow_mod(&e, &n).unwrap();
    assert_eq!(c.pow_mod_crt(&p, &q, &dp, &dq, &qinv).unwrap(), m);

    // m1 < m2 recombination stays in range
    let mut rng = XorShiftRng::from_seed([7u8; 16]);
    let d = hex(RSA_D);
    for _ in 0..5 {
        let x = rng.gen_bigint_bits(1000).unwrap();
        let c = x.pow_mod(&e, &n).unwrap();
        let plain = c.pow_mod(&d, &n).unwrap();
        let crt = c.pow_mod_crt(&p, &q, &dp, &dq, &qinv).unwrap();
        assert_eq!(crt, plain);
        assert!(crt < n);
        assert_eq!(crt, x);
    }
}

#[test]
fn test_big_product_high_and_low_digits() {
    let a = BigInt::from(2u32).pow(8000);
    let b = BigInt::from(3u32).pow(7000);
    let c = &a * &b;
    let m = BigInt::from_str_radix("1000000000000", 10).unwrap();

    let s = c.to_str_radix(10).unwrap();
    assert!(s.starts_with("12267282015427807746869624803940836185908536859923312606641454087554"));
    assert_eq!(
        c.rem_euclid(&m).unwrap().to_str_radix(10).unwrap(),
        "699033829376"
    );
}

#[test]
fn test_pow_mod_digit_sized_exponent() {
    let n = hex(RSA_N);
    let a = BigInt::from(9999u32);
    let e = BigInt::from(65537u32);
    let slow = a.pow_mod_slow(&e, &n).unwrap();
    assert_eq!(a.pow_mod(&e, &n).unwrap(), slow);
    assert_eq!(a.pow_mod_digit(65537, &n).unwrap(), slow);
    assert!(BigInt::one().pow_mod(&e, &n).unwrap().is_one());
}
