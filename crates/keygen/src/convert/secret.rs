//! Secret key conversion

use super::CurveConverter;
use crate::keys::{ExchangePublicKey, ExchangeSecretKey, SigningPublicKey, SigningSecretKey};
use edmont_api::error::validation;
use edmont_api::{Error, FieldArithmetic, GroupArithmetic, Hash512, Result, SecureWipe};
use edmont_common::WipeOnDrop;
use edmont_internal::constant_time::ct_eq;
use edmont_params::ed25519::{ED25519_SECRET_KEY_SIZE, ED25519_SEED_SIZE};

impl<H, G, F, W> CurveConverter<H, G, F, W>
where
    H: Hash512,
    G: GroupArithmetic,
    F: FieldArithmetic,
    W: SecureWipe,
{
    /// The X25519 secret for an Ed25519 secret key: its clamped scalar
    ///
    /// Only the seed half of `secret` is read.
    pub fn edwards_to_montgomery_secret(&self, secret: &SigningSecretKey) -> ExchangeSecretKey {
        self.secret_from_seed(secret.seed())
    }

    /// Like [`edwards_to_montgomery_secret`](Self::edwards_to_montgomery_secret)
    /// on raw bytes: the 64-byte `seed || public_key` layout or a bare seed
    pub fn edwards_to_montgomery_secret_bytes(&self, secret: &[u8]) -> Result<ExchangeSecretKey> {
        validation::length_one_of(
            "edwards_to_montgomery_secret_bytes",
            secret.len(),
            &[ED25519_SECRET_KEY_SIZE, ED25519_SEED_SIZE],
        )?;

        let mut seed = WipeOnDrop::<_, ED25519_SEED_SIZE>::new(self.scalars.wiper());
        seed.copy_from_slice(&secret[..ED25519_SEED_SIZE]);
        Ok(self.secret_from_seed(&seed))
    }

    /// Convert a whole keypair
    ///
    /// The public key is converted first; if it is rejected no secret is
    /// derived.
    ///
    /// Keys do not record the [`DerivationMode`](crate::DerivationMode) they
    /// were derived with. Converting with a converter in a different mode
    /// succeeds but yields a secret that does not match the public key; use
    /// [`check_exchange_keypair`](Self::check_exchange_keypair) when the mode
    /// is not known for certain.
    pub fn edwards_to_montgomery_keypair(
        &self,
        public: &SigningPublicKey,
        secret: &SigningSecretKey,
    ) -> Result<(ExchangePublicKey, ExchangeSecretKey)> {
        let exchange_public = self.edwards_to_montgomery_public(public)?;

        #[cfg(feature = "trace")]
        tracing::trace!("converted Ed25519 keypair to X25519");

        Ok((exchange_public, self.edwards_to_montgomery_secret(secret)))
    }

    /// Check that an X25519 secret produces the given X25519 public key
    ///
    /// # Errors
    ///
    /// [`Error::KeyMismatch`] if `secret · B` does not have u-coordinate
    /// `public`.
    pub fn check_exchange_keypair(
        &self,
        public: &ExchangePublicKey,
        secret: &ExchangeSecretKey,
    ) -> Result<()> {
        let point = self.group.scalar_mult_base(secret.as_bytes());
        if ct_eq(self.montgomery_u(&point), public.as_bytes()) {
            Ok(())
        } else {
            #[cfg(feature = "trace")]
            tracing::debug!("X25519 secret does not match its public key");

            Err(Error::KeyMismatch {
                context: "check_exchange_keypair",
            })
        }
    }

    fn secret_from_seed(&self, seed: &[u8; ED25519_SEED_SIZE]) -> ExchangeSecretKey {
        let scalar = self.scalars.derive_scalar(seed);
        ExchangeSecretKey::new(*scalar.as_bytes())
    }
}
