//! Public key conversion

use super::CurveConverter;
use crate::keys::{ExchangePublicKey, SigningPublicKey};
use edmont_api::{Error, FieldArithmetic, GroupArithmetic, Hash512, Result, SecureWipe};

const CONTEXT: &str = "edwards_to_montgomery_public";

impl<H, G, F, W> CurveConverter<H, G, F, W>
where
    H: Hash512,
    G: GroupArithmetic,
    F: FieldArithmetic,
    W: SecureWipe,
{
    /// Map an Ed25519 public key to its X25519 u-coordinate
    ///
    /// The key is rejected unless it decodes to a point of the prime-order
    /// subgroup. Small-order points are checked first, on the encoding, so
    /// that the identity (y = 1, where the map divides by zero) never reaches
    /// the field arithmetic.
    ///
    /// Runs in variable time; public keys are public.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPublicKeyPoint`] if the encoding has small order, is
    /// not a curve point, or has a torsion component.
    pub fn edwards_to_montgomery_public(
        &self,
        public: &SigningPublicKey,
    ) -> Result<ExchangePublicKey> {
        let encoded = public.as_bytes();

        if self.group.has_small_order(encoded) {
            return Err(rejected("small order"));
        }

        let point = self
            .group
            .decode_vartime(encoded)
            .ok_or_else(|| rejected("not on curve"))?;

        if !self.group.is_in_prime_subgroup(&point) {
            return Err(rejected("outside prime-order subgroup"));
        }

        Ok(ExchangePublicKey::new(self.montgomery_u(&point)))
    }

    /// u = (1 + y) / (1 - y) for a point other than the identity
    pub(super) fn montgomery_u(&self, point: &G::Point) -> [u8; 32] {
        let field = &self.field;
        let y = field.from_bytes(&self.group.y_coordinate(point));
        let one = field.one();
        let numerator = field.add(&one, &y);
        let denominator = field.invert(&field.sub(&one, &y));
        let u = field.mul(&numerator, &denominator);
        field.to_bytes(&u)
    }
}

#[cfg_attr(not(feature = "trace"), allow(unused_variables))]
fn rejected(check: &'static str) -> Error {
    #[cfg(feature = "trace")]
    tracing::debug!(check, "rejected Edwards public key");

    Error::InvalidPublicKeyPoint { context: CONTEXT }
}
