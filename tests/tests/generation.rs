//! Fresh keypair generation

use edmont_keygen::Ed25519KeypairDeriver;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

#[test]
fn generated_keypairs_do_not_repeat() {
    let deriver = Ed25519KeypairDeriver::default();
    let mut publics = HashSet::new();
    let mut seeds = HashSet::new();

    for _ in 0..2048 {
        let (pk, sk) = deriver.generate_keypair(&mut OsRng).unwrap();
        assert!(publics.insert(pk.to_bytes()), "public key repeated");
        assert!(seeds.insert(*sk.seed()), "seed repeated");
    }
}

#[test]
fn generation_with_seeded_rng_is_reproducible() {
    let deriver = Ed25519KeypairDeriver::default();

    let mut a = ChaCha20Rng::seed_from_u64(1234);
    let mut b = ChaCha20Rng::seed_from_u64(1234);
    for _ in 0..8 {
        let (pk_a, sk_a) = deriver.generate_keypair(&mut a).unwrap();
        let (pk_b, sk_b) = deriver.generate_keypair(&mut b).unwrap();
        assert_eq!(pk_a, pk_b);
        assert_eq!(sk_a, sk_b);
    }
}

#[test]
fn generated_keypairs_are_consistent() {
    let deriver = Ed25519KeypairDeriver::default();
    let mut rng = ChaCha20Rng::seed_from_u64(77);

    for _ in 0..32 {
        let (pk, sk) = deriver.generate_keypair(&mut rng).unwrap();
        assert_eq!(sk.public_key(), &pk);
        assert_eq!(deriver.derive_public_from_secret(&sk), pk);
        assert_eq!(deriver.seed_keypair(sk.seed()).0, pk);
    }
}

#[test]
fn deriver_is_shareable_across_threads() {
    let deriver = Ed25519KeypairDeriver::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0u64..4)
            .map(|i| {
                let deriver = &deriver;
                scope.spawn(move || {
                    let mut rng = ChaCha20Rng::seed_from_u64(i);
                    deriver.generate_keypair(&mut rng).unwrap().0
                })
            })
            .collect();

        let publics: HashSet<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().to_bytes())
            .collect();
        assert_eq!(publics.len(), 4);
    });
}
