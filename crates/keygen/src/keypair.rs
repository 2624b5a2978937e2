//! Ed25519 keypair derivation
//!
//! A keypair is a pure function of its 32-byte seed:
//!
//! ```text
//! a  = clamp(H(seed)[0..32])
//! A  = a · B
//! pk = encode(A)
//! sk = seed || pk
//! ```
//!
//! Fresh keypairs draw the seed from a caller-supplied CSPRNG. The seed copy
//! held during generation is wiped on every path, including RNG failure.

use crate::keys::{SigningPublicKey, SigningSecretKey};
use crate::scalar::{DerivationMode, ScalarDeriver};
use edmont_api::error::validation;
use edmont_api::{Error, GroupArithmetic, Hash512, Result, SecureWipe};
use edmont_common::{WipeOnDrop, ZeroizeWipe};
use edmont_internal::constant_time::ct_eq;
use edmont_params::ed25519::{ED25519_SECRET_KEY_SIZE, ED25519_SEED_SIZE};
use rand::{CryptoRng, RngCore};

/// Derives Ed25519 keypairs from seeds
#[derive(Clone, Debug, Default)]
pub struct KeypairDeriver<H, G, W = ZeroizeWipe> {
    scalars: ScalarDeriver<H, W>,
    group: G,
}

impl<H, G, W> KeypairDeriver<H, G, W>
where
    H: Hash512,
    G: GroupArithmetic,
    W: SecureWipe,
{
    pub fn new(scalars: ScalarDeriver<H, W>, group: G) -> Self {
        Self { scalars, group }
    }

    pub fn mode(&self) -> DerivationMode {
        self.scalars.mode()
    }

    pub fn scalar_deriver(&self) -> &ScalarDeriver<H, W> {
        &self.scalars
    }

    /// Deterministically derive the keypair for `seed`
    ///
    /// The seed argument itself is what gets expanded; the returned secret
    /// key is assembled only after the public key is known.
    pub fn seed_keypair(
        &self,
        seed: &[u8; ED25519_SEED_SIZE],
    ) -> (SigningPublicKey, SigningSecretKey) {
        let public = self.public_from_seed(seed);
        let secret = SigningSecretKey::from_parts(seed, public);

        #[cfg(feature = "trace")]
        tracing::trace!(
            hash = self.scalars.hash_name(),
            mode = ?self.scalars.mode(),
            "derived Ed25519 keypair from seed"
        );

        (public, secret)
    }

    /// Generate a keypair from 32 bytes of fresh randomness
    ///
    /// # Errors
    ///
    /// [`Error::EntropySourceFailure`] if the RNG reports a failure. The
    /// request is not retried.
    pub fn generate_keypair<R>(&self, rng: &mut R) -> Result<(SigningPublicKey, SigningSecretKey)>
    where
        R: RngCore + CryptoRng,
    {
        let mut seed = WipeOnDrop::<_, ED25519_SEED_SIZE>::new(self.scalars.wiper());

        rng.try_fill_bytes(&mut seed[..]).map_err(|e| {
            #[cfg(feature = "trace")]
            tracing::warn!(error = %e, "entropy source failed during keypair generation");

            Error::EntropySourceFailure {
                context: "generate_keypair",
                message: e.to_string(),
            }
        })?;

        #[cfg(feature = "trace")]
        tracing::debug!("generating Ed25519 keypair from fresh seed");

        Ok(self.seed_keypair(&seed))
    }

    /// Recompute the public key of a secret key
    pub fn derive_public_from_secret(&self, secret: &SigningSecretKey) -> SigningPublicKey {
        self.public_from_seed(secret.seed())
    }

    /// Recompute the public key from raw secret key bytes
    ///
    /// Accepts the 64-byte `seed || public_key` layout or a bare 32-byte seed.
    /// Only the seed half is read.
    pub fn derive_public_from_secret_bytes(&self, secret: &[u8]) -> Result<SigningPublicKey> {
        validation::length_one_of(
            "derive_public_from_secret_bytes",
            secret.len(),
            &[ED25519_SECRET_KEY_SIZE, ED25519_SEED_SIZE],
        )?;

        let mut seed = WipeOnDrop::<_, ED25519_SEED_SIZE>::new(self.scalars.wiper());
        seed.copy_from_slice(&secret[..ED25519_SEED_SIZE]);
        Ok(self.public_from_seed(&seed))
    }

    /// Check that the public half of `secret` belongs to its seed
    ///
    /// # Errors
    ///
    /// [`Error::KeyMismatch`] if the embedded public key differs from the
    /// re-derived one.
    pub fn check_secret_key(&self, secret: &SigningSecretKey) -> Result<()> {
        let derived = self.derive_public_from_secret(secret);
        if ct_eq(derived.as_bytes(), secret.public_key().as_bytes()) {
            Ok(())
        } else {
            #[cfg(feature = "trace")]
            tracing::debug!("secret key public half does not match its seed");

            Err(Error::KeyMismatch {
                context: "check_secret_key",
            })
        }
    }

    fn public_from_seed(&self, seed: &[u8; ED25519_SEED_SIZE]) -> SigningPublicKey {
        let scalar = self.scalars.derive_scalar(seed);
        let point = self.group.scalar_mult_base(scalar.as_bytes());
        SigningPublicKey::new(self.group.encode(&point))
    }
}

impl<H, G, W> KeypairDeriver<H, G, W>
where
    H: Hash512 + Default,
    G: GroupArithmetic + Default,
    W: SecureWipe + Default,
{
    /// Create a deriver with default backends and the given mode
    pub fn with_mode(mode: DerivationMode) -> Self {
        Self::new(ScalarDeriver::with_mode(mode), G::default())
    }
}
