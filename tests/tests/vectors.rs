//! Known-answer tests for seed derivation

use edmont_keygen::{
    DerivationMode, Ed25519KeypairDeriver, KeypairDeriver, SigningSecretKey,
};
use edmont_curve::{Blake2b512Hash, Ed25519Group};
use edmont_tests::{hex32, RFC8032_VECTORS};

#[test]
fn rfc8032_seed_keypair() {
    let deriver = Ed25519KeypairDeriver::default();

    for vector in RFC8032_VECTORS {
        let seed = hex32(vector.seed);
        let (pk, sk) = deriver.seed_keypair(&seed);

        assert_eq!(hex::encode(pk.as_bytes()), vector.public, "{}", vector.name);
        assert_eq!(sk.seed(), &seed, "{}", vector.name);

        let layout = sk.to_bytes();
        assert_eq!(hex::encode(&layout[..32]), vector.seed);
        assert_eq!(hex::encode(&layout[32..]), vector.public);
    }
}

#[test]
fn rfc8032_derive_public_from_secret() {
    let deriver = Ed25519KeypairDeriver::default();

    for vector in RFC8032_VECTORS {
        let seed = hex32(vector.seed);
        let expected = hex32(vector.public);

        let sk = SigningSecretKey::from_slice(&[seed, expected].concat()).unwrap();
        assert_eq!(deriver.derive_public_from_secret(&sk).as_bytes(), &expected);
        assert!(deriver.check_secret_key(&sk).is_ok());

        let from_seed = deriver.derive_public_from_secret_bytes(&seed).unwrap();
        assert_eq!(from_seed.as_bytes(), &expected);
    }
}

#[test]
fn seed_keypair_is_deterministic() {
    let deriver = Ed25519KeypairDeriver::default();
    let seed = [0x17u8; 32];

    let (pk1, sk1) = deriver.seed_keypair(&seed);
    let (pk2, sk2) = deriver.seed_keypair(&seed);
    assert_eq!(pk1, pk2);
    assert_eq!(sk1, sk2);
}

#[test]
fn seed_argument_is_what_gets_hashed() {
    // Two different seeds must never collapse to the same key, whatever the
    // state of the output buffer
    let deriver = Ed25519KeypairDeriver::default();
    let (pk_a, _) = deriver.seed_keypair(&[0u8; 32]);
    let (pk_b, _) = deriver.seed_keypair(&[1u8; 32]);
    assert_ne!(pk_a, pk_b);
}

#[test]
fn blake2b_backend_is_self_consistent() {
    let deriver = KeypairDeriver::<Blake2b512Hash, Ed25519Group>::default();
    let seed = hex32(RFC8032_VECTORS[0].seed);

    let (pk, sk) = deriver.seed_keypair(&seed);
    assert_ne!(hex::encode(pk.as_bytes()), RFC8032_VECTORS[0].public);
    assert_eq!(deriver.derive_public_from_secret(&sk), pk);
}

#[test]
fn raw_mode_is_self_consistent() {
    let deriver = Ed25519KeypairDeriver::with_mode(DerivationMode::Raw);
    assert_eq!(deriver.mode(), DerivationMode::Raw);

    let (pk, sk) = deriver.seed_keypair(&[0x99u8; 32]);
    assert_eq!(deriver.derive_public_from_secret(&sk), pk);
    assert!(deriver.check_secret_key(&sk).is_ok());
}
