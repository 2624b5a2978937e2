//! Edwards to Montgomery conversion checked against an independent
//! implementation

use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::montgomery::MontgomeryPoint;
use edmont_curve::{Blake2b512Hash, Curve25519Field, Ed25519Group};
use edmont_keygen::{
    CurveConverter, DerivationMode, Ed25519Converter, Ed25519KeypairDeriver, KeypairDeriver,
};
use edmont_tests::{hex32, RFC8032_VECTORS};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn reference_montgomery(pk: &[u8; 32]) -> [u8; 32] {
    CompressedEdwardsY(*pk)
        .decompress()
        .expect("valid point")
        .to_montgomery()
        .to_bytes()
}

#[test]
fn rfc8032_public_keys_convert_like_reference() {
    let converter = Ed25519Converter::default();
    let deriver = Ed25519KeypairDeriver::default();

    for vector in RFC8032_VECTORS {
        let (pk, sk) = deriver.seed_keypair(&hex32(vector.seed));
        let (xpk, xsk) = converter.edwards_to_montgomery_keypair(&pk, &sk).unwrap();

        assert_eq!(xpk.to_bytes(), reference_montgomery(pk.as_bytes()), "{}", vector.name);
        assert_eq!(
            xpk.to_bytes(),
            MontgomeryPoint::mul_base_clamped(*xsk.as_bytes()).to_bytes(),
            "{}",
            vector.name
        );
    }
}

#[test]
fn converted_keys_agree_on_shared_secret() {
    let deriver = Ed25519KeypairDeriver::default();
    let converter = Ed25519Converter::default();
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);

    for _ in 0..16 {
        let (alice_pk, alice_sk) = deriver.generate_keypair(&mut rng).unwrap();
        let (bob_pk, bob_sk) = deriver.generate_keypair(&mut rng).unwrap();

        let (alice_xpk, alice_xsk) = converter
            .edwards_to_montgomery_keypair(&alice_pk, &alice_sk)
            .unwrap();
        let (bob_xpk, bob_xsk) = converter
            .edwards_to_montgomery_keypair(&bob_pk, &bob_sk)
            .unwrap();

        let alice_shared = MontgomeryPoint(bob_xpk.to_bytes()).mul_clamped(*alice_xsk.as_bytes());
        let bob_shared = MontgomeryPoint(alice_xpk.to_bytes()).mul_clamped(*bob_xsk.as_bytes());
        assert_eq!(alice_shared, bob_shared);
    }
}

#[test]
fn every_backend_and_mode_is_cross_curve_consistent() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut seed);

    for mode in [DerivationMode::Hashed, DerivationMode::Raw] {
        let deriver = KeypairDeriver::<Blake2b512Hash, Ed25519Group>::with_mode(mode);
        let converter =
            CurveConverter::<Blake2b512Hash, Ed25519Group, Curve25519Field>::with_mode(mode);

        let (pk, sk) = deriver.seed_keypair(&seed);
        let xpk = converter.edwards_to_montgomery_public(&pk).unwrap();
        let xsk = converter.edwards_to_montgomery_secret(&sk);

        assert_eq!(
            xpk.to_bytes(),
            MontgomeryPoint::mul_base_clamped(*xsk.as_bytes()).to_bytes()
        );
        assert!(converter.check_exchange_keypair(&xpk, &xsk).is_ok());
    }
}

#[test]
fn secret_conversion_is_idempotent() {
    let deriver = Ed25519KeypairDeriver::default();
    let converter = Ed25519Converter::default();
    let (_, sk) = deriver.seed_keypair(&hex32(RFC8032_VECTORS[1].seed));

    let first = converter.edwards_to_montgomery_secret(&sk);
    for _ in 0..4 {
        assert_eq!(converter.edwards_to_montgomery_secret(&sk), first);
    }
}
