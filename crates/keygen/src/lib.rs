//! Ed25519 seed derivation and Edwards to Montgomery key conversion
//!
//! - [`ScalarDeriver`] expands 32 bytes of secret material into a clamped
//!   scalar
//! - [`KeypairDeriver`] turns seeds (given or freshly drawn) into Ed25519
//!   keypairs
//! - [`CurveConverter`] maps those keypairs to their X25519 equivalents
//!
//! Every type is generic over its collaborators (hash, group, field and
//! wiping backends). [`Ed25519KeypairDeriver`] and [`Ed25519Converter`] bind
//! the RFC 8032 defaults from `edmont-curve`.
//!
//! ```
//! use edmont_keygen::{Ed25519Converter, Ed25519KeypairDeriver};
//!
//! let deriver = Ed25519KeypairDeriver::default();
//! let (pk, sk) = deriver.seed_keypair(&[7u8; 32]);
//!
//! let converter = Ed25519Converter::default();
//! let (xpk, xsk) = converter.edwards_to_montgomery_keypair(&pk, &sk).unwrap();
//! assert_eq!(xpk.as_bytes().len(), 32);
//! assert_eq!(xsk.as_bytes().len(), 32);
//! ```

pub mod convert;
pub mod keypair;
pub mod keys;
pub mod scalar;

pub use convert::CurveConverter;
pub use keypair::KeypairDeriver;
pub use keys::{
    ExchangePublicKey, ExchangeSecretKey, Seed, SigningPublicKey, SigningSecretKey,
};
pub use scalar::{clamp, is_clamped, ClampedScalar, DerivationMode, ScalarDeriver};

use edmont_curve::{Curve25519Field, Ed25519Group, Sha512Hash};

/// Keypair deriver with SHA-512 expansion, as in RFC 8032
pub type Ed25519KeypairDeriver = KeypairDeriver<Sha512Hash, Ed25519Group>;

/// Converter matching [`Ed25519KeypairDeriver`]
pub type Ed25519Converter = CurveConverter<Sha512Hash, Ed25519Group, Curve25519Field>;
