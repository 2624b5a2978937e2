//! Property-based tests for derivation and conversion

use curve25519_dalek::montgomery::MontgomeryPoint;
use edmont_keygen::{
    is_clamped, DerivationMode, Ed25519Converter, Ed25519KeypairDeriver, ScalarDeriver,
};
use edmont_curve::Sha512Hash;
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = DerivationMode> {
    prop_oneof![Just(DerivationMode::Hashed), Just(DerivationMode::Raw)]
}

proptest! {
    #[test]
    fn derived_scalars_are_clamped(seed in any::<[u8; 32]>(), mode in any_mode()) {
        let scalars = ScalarDeriver::<Sha512Hash>::with_mode(mode);
        let scalar = scalars.derive_scalar(&seed);
        prop_assert!(is_clamped(scalar.as_bytes()));
    }

    #[test]
    fn public_key_rederives_from_secret(seed in any::<[u8; 32]>()) {
        let deriver = Ed25519KeypairDeriver::default();
        let (pk, sk) = deriver.seed_keypair(&seed);
        prop_assert_eq!(deriver.derive_public_from_secret(&sk), pk);
        prop_assert!(deriver.check_secret_key(&sk).is_ok());
    }

    #[test]
    fn converted_keypair_is_an_x25519_keypair(seed in any::<[u8; 32]>(), mode in any_mode()) {
        let deriver = Ed25519KeypairDeriver::with_mode(mode);
        let converter = Ed25519Converter::with_mode(mode);

        let (pk, sk) = deriver.seed_keypair(&seed);
        let (xpk, xsk) = converter.edwards_to_montgomery_keypair(&pk, &sk).unwrap();

        prop_assert!(is_clamped(xsk.as_bytes()));
        prop_assert_eq!(
            xpk.to_bytes(),
            MontgomeryPoint::mul_base_clamped(*xsk.as_bytes()).to_bytes()
        );
    }

    #[test]
    fn secret_conversion_ignores_public_half(seed in any::<[u8; 32]>(), junk in any::<[u8; 32]>()) {
        let converter = Ed25519Converter::default();
        let mut layout = seed.to_vec();
        layout.extend_from_slice(&junk);

        let from_layout = converter.edwards_to_montgomery_secret_bytes(&layout).unwrap();
        let from_seed = converter.edwards_to_montgomery_secret_bytes(&seed).unwrap();
        prop_assert_eq!(from_layout, from_seed);
    }
}
