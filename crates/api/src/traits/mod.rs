//! Collaborator traits consumed by the key derivation core
//!
//! Each trait is deliberately narrow: it names only the operations the
//! derivation and conversion code calls, so deterministic substitutes can be
//! dropped in for tests.

pub mod field;
pub mod group;
pub mod hash;
pub mod wipe;

pub use field::FieldArithmetic;
pub use group::GroupArithmetic;
pub use hash::Hash512;
pub use wipe::SecureWipe;
