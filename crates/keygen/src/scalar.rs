//! Seed to scalar derivation
//!
//! Ed25519 secret scalars are derived by expanding 32 bytes of secret
//! material with a 512-bit hash, keeping the low half and clamping it:
//!
//! - bits 0..=2 of byte 0 are cleared, making the scalar a multiple of the
//!   cofactor 8
//! - bit 7 of byte 31 is cleared
//! - bit 6 of byte 31 is set, fixing the position of the top bit
//!
//! The same clamped scalar is the X25519 secret for the converted keypair.

use core::fmt;
use edmont_api::{Hash512, SecureWipe};
use edmont_common::{WipeOnDrop, ZeroizeWipe};
use edmont_params::ed25519::{
    CLAMP_HIGH_BIT, CLAMP_HIGH_MASK, CLAMP_LOW_MASK, ED25519_EXPANDED_HASH_SIZE,
    ED25519_SCALAR_SIZE, ED25519_SEED_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// How secret material becomes a scalar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DerivationMode {
    /// Hash the material and clamp the low 32 bytes of the digest (RFC 8032)
    #[default]
    Hashed,
    /// Clamp the material as-is
    ///
    /// For inputs that are already uniformly random hash outputs, and for
    /// deterministic tests. Keys derived this way do not match RFC 8032.
    Raw,
}

/// A clamped secret scalar
///
/// Zeroized on drop. `Debug` never prints the value.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ClampedScalar([u8; ED25519_SCALAR_SIZE]);

impl ClampedScalar {
    /// The little-endian scalar bytes
    pub fn as_bytes(&self) -> &[u8; ED25519_SCALAR_SIZE] {
        &self.0
    }
}

impl fmt::Debug for ClampedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClampedScalar([REDACTED])")
    }
}

/// Apply Ed25519/X25519 clamping in place
#[inline]
pub fn clamp(scalar: &mut [u8; ED25519_SCALAR_SIZE]) {
    scalar[0] &= CLAMP_LOW_MASK;
    scalar[31] &= CLAMP_HIGH_MASK;
    scalar[31] |= CLAMP_HIGH_BIT;
}

/// Whether `scalar` satisfies the clamping invariant
pub fn is_clamped(scalar: &[u8; ED25519_SCALAR_SIZE]) -> bool {
    scalar[0] & !CLAMP_LOW_MASK == 0
        && scalar[31] & !CLAMP_HIGH_MASK == 0
        && scalar[31] & CLAMP_HIGH_BIT != 0
}

/// Turns 32 bytes of secret material into a [`ClampedScalar`]
#[derive(Clone, Debug, Default)]
pub struct ScalarDeriver<H, W = ZeroizeWipe> {
    mode: DerivationMode,
    hasher: H,
    wiper: W,
}

impl<H: Hash512, W: SecureWipe> ScalarDeriver<H, W> {
    /// Create a deriver from explicit collaborators
    pub fn new(mode: DerivationMode, hasher: H, wiper: W) -> Self {
        Self {
            mode,
            hasher,
            wiper,
        }
    }

    /// The configured derivation mode
    pub fn mode(&self) -> DerivationMode {
        self.mode
    }

    /// Name of the hash used in [`DerivationMode::Hashed`]
    pub fn hash_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// The wiping backend shared with callers that hold secret scratch space
    pub fn wiper(&self) -> &W {
        &self.wiper
    }

    /// Derive the clamped scalar for `material`
    ///
    /// The 64-byte digest lives in a guard that is wiped through the
    /// configured [`SecureWipe`] before this returns.
    pub fn derive_scalar(&self, material: &[u8; ED25519_SEED_SIZE]) -> ClampedScalar {
        let mut scalar = ClampedScalar([0u8; ED25519_SCALAR_SIZE]);

        match self.mode {
            DerivationMode::Hashed => {
                let mut digest =
                    WipeOnDrop::<_, ED25519_EXPANDED_HASH_SIZE>::new(&self.wiper);
                self.hasher.digest_into(material, &mut digest);
                scalar.0.copy_from_slice(&digest[..ED25519_SCALAR_SIZE]);
            }
            DerivationMode::Raw => scalar.0.copy_from_slice(material),
        }

        clamp(&mut scalar.0);
        scalar
    }
}

impl<H: Hash512 + Default, W: SecureWipe + Default> ScalarDeriver<H, W> {
    /// Create a deriver with default collaborators and the given mode
    pub fn with_mode(mode: DerivationMode) -> Self {
        Self::new(mode, H::default(), W::default())
    }
}
