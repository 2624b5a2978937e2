//! # edmont
//!
//! Ed25519 keypair derivation from 32-byte seeds, and conversion of Ed25519
//! keypairs into the equivalent X25519 key-exchange keypairs.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edmont = "0.3"
//! ```
//!
//! ```
//! use edmont::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let deriver = Ed25519KeypairDeriver::default();
//! let (pk, sk) = deriver.generate_keypair(&mut OsRng)?;
//! assert_eq!(deriver.derive_public_from_secret(&sk), pk);
//!
//! let converter = Ed25519Converter::default();
//! let (x25519_pk, x25519_sk) = converter.edwards_to_montgomery_keypair(&pk, &sk)?;
//! # let _ = (x25519_pk, x25519_sk);
//! # Ok::<(), edmont::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `trace`: emit `tracing` events for rejected keys and entropy failures.
//!   Key material is never logged.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edmont-api`]: error type and collaborator traits
//! - [`edmont-common`]: secret containers and wiping guards
//! - [`edmont-internal`]: constant-time comparison and zeroing
//! - [`edmont-params`]: key and hash sizes
//! - [`edmont-curve`]: default field, group and hash backends
//! - [`edmont-keygen`]: seed derivation and curve conversion

// Core re-exports
pub use edmont_api as api;
pub use edmont_common as common;
pub use edmont_internal as internal;
pub use edmont_params as params;

pub use edmont_curve as curve;
pub use edmont_keygen as keygen;

/// Common imports for edmont users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::api::{FieldArithmetic, GroupArithmetic, Hash512, SecureWipe};

    pub use crate::common::{SecretBuffer, ZeroizeWipe};

    pub use crate::curve::{Blake2b512Hash, Curve25519Field, Ed25519Group, Sha512Hash};

    pub use crate::keygen::{
        CurveConverter, DerivationMode, Ed25519Converter, Ed25519KeypairDeriver,
        ExchangePublicKey, ExchangeSecretKey, KeypairDeriver, ScalarDeriver, Seed,
        SigningPublicKey, SigningSecretKey,
    };

    pub use rand::{CryptoRng, RngCore};
    pub use zeroize::Zeroize;
}
