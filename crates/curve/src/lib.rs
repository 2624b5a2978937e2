//! Default collaborator backends for edmont
//!
//! - [`Curve25519Field`]: arithmetic modulo p = 2^255 - 19
//! - [`Ed25519Group`]: the Ed25519 group, backed by `curve25519-dalek`
//! - [`Sha512Hash`] and [`Blake2b512Hash`]: 512-bit hashes for seed expansion
//!
//! These types carry no state; they are zero-sized handles implementing the
//! traits from `edmont-api`.

pub mod edwards;
pub mod field;
pub mod hash;

pub use edwards::Ed25519Group;
pub use field::{Curve25519Field, FieldElement};
pub use hash::{Blake2b512Hash, Sha512Hash};
