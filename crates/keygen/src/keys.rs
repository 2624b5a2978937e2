//! Fixed-size key types
//!
//! Public keys are plain byte arrays. Secret keys wrap their bytes in
//! zeroizing containers and print as `[REDACTED]`.

use core::fmt;
use edmont_api::error::validation;
use edmont_api::Result;
use edmont_common::SecretBuffer;
use edmont_params::ed25519::{ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE, ED25519_SEED_SIZE};
use edmont_params::x25519::{X25519_PUBLIC_KEY_SIZE, X25519_SECRET_KEY_SIZE};
use zeroize::{Zeroize, Zeroizing};

/// 32 bytes of secret entropy a keypair is derived from
pub type Seed = SecretBuffer<ED25519_SEED_SIZE>;

/// Ed25519 public key: a compressed Edwards point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SigningPublicKey([u8; ED25519_PUBLIC_KEY_SIZE]);

impl SigningPublicKey {
    pub fn new(bytes: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validation::length(
            "SigningPublicKey::from_slice",
            bytes.len(),
            ED25519_PUBLIC_KEY_SIZE,
        )?;
        let mut key = [0u8; ED25519_PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl From<[u8; ED25519_PUBLIC_KEY_SIZE]> for SigningPublicKey {
    fn from(bytes: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for SigningPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Ed25519 secret key in the 64-byte `seed || public_key` layout
///
/// The seed half is the only secret; the public half is carried along so
/// signers do not need to recompute it. Use
/// [`KeypairDeriver::check_secret_key`](crate::KeypairDeriver::check_secret_key)
/// to verify that both halves belong together.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecretKey {
    seed: Seed,
    public: SigningPublicKey,
}

impl SigningSecretKey {
    /// Assemble a secret key from its two halves
    pub fn from_parts(seed: &[u8; ED25519_SEED_SIZE], public: SigningPublicKey) -> Self {
        Self {
            seed: Seed::new(*seed),
            public,
        }
    }

    /// Parse the 64-byte layout
    ///
    /// The halves are not checked against each other here.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validation::length(
            "SigningSecretKey::from_slice",
            bytes.len(),
            ED25519_SECRET_KEY_SIZE,
        )?;
        let (seed, public) = bytes.split_at(ED25519_SEED_SIZE);
        Ok(Self {
            seed: Seed::from_slice(seed)?,
            public: SigningPublicKey::from_slice(public)?,
        })
    }

    /// The 32-byte seed half
    pub fn seed(&self) -> &[u8; ED25519_SEED_SIZE] {
        self.seed.as_bytes()
    }

    /// The public key half
    pub fn public_key(&self) -> &SigningPublicKey {
        &self.public
    }

    /// The 64-byte `seed || public_key` encoding, zeroized when dropped
    pub fn to_bytes(&self) -> Zeroizing<[u8; ED25519_SECRET_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; ED25519_SECRET_KEY_SIZE]);
        out[..ED25519_SEED_SIZE].copy_from_slice(self.seed.as_bytes());
        out[ED25519_SEED_SIZE..].copy_from_slice(self.public.as_bytes());
        out
    }
}

impl Zeroize for SigningSecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}

impl fmt::Debug for SigningSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecretKey")
            .field("seed", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}

/// X25519 public key: a Montgomery u-coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExchangePublicKey([u8; X25519_PUBLIC_KEY_SIZE]);

impl ExchangePublicKey {
    pub fn new(bytes: [u8; X25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; X25519_PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; X25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for ExchangePublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// X25519 secret key: a clamped scalar
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct ExchangeSecretKey(SecretBuffer<X25519_SECRET_KEY_SIZE>);

impl ExchangeSecretKey {
    pub fn new(bytes: [u8; X25519_SECRET_KEY_SIZE]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; X25519_SECRET_KEY_SIZE] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ExchangeSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExchangeSecretKey([REDACTED])")
    }
}
