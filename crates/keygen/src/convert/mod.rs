//! Edwards to Montgomery key conversion
//!
//! Ed25519 and X25519 share the same prime-order group through the
//! birational map
//!
//! ```text
//! u = (1 + y) / (1 - y)
//! ```
//!
//! between the Edwards y-coordinate and the Montgomery u-coordinate. The
//! secret scalar needs no mapping at all: the clamped Ed25519 scalar is
//! already a valid X25519 secret. The two paths live in [`public`] and
//! [`secret`].

pub mod public;
pub mod secret;

use crate::scalar::{DerivationMode, ScalarDeriver};
use edmont_api::{FieldArithmetic, GroupArithmetic, Hash512, SecureWipe};
use edmont_common::ZeroizeWipe;

/// Converts Ed25519 keys into X25519 keys
///
/// Holds no state beyond its collaborators, so a shared reference can be used
/// from several threads when they are `Sync`.
#[derive(Clone, Debug, Default)]
pub struct CurveConverter<H, G, F, W = ZeroizeWipe> {
    scalars: ScalarDeriver<H, W>,
    group: G,
    field: F,
}

impl<H, G, F, W> CurveConverter<H, G, F, W>
where
    H: Hash512,
    G: GroupArithmetic,
    F: FieldArithmetic,
    W: SecureWipe,
{
    pub fn new(scalars: ScalarDeriver<H, W>, group: G, field: F) -> Self {
        Self {
            scalars,
            group,
            field,
        }
    }

    pub fn mode(&self) -> DerivationMode {
        self.scalars.mode()
    }
}

impl<H, G, F, W> CurveConverter<H, G, F, W>
where
    H: Hash512 + Default,
    G: GroupArithmetic + Default,
    F: FieldArithmetic + Default,
    W: SecureWipe + Default,
{
    /// Create a converter with default backends and the given mode
    ///
    /// The mode must match the one the Ed25519 keys were derived with.
    pub fn with_mode(mode: DerivationMode) -> Self {
        Self::new(ScalarDeriver::with_mode(mode), G::default(), F::default())
    }
}
