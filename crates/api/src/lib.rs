//! Public API traits and types for the edmont library
//!
//! This crate provides the error type shared by every edmont crate and the
//! narrow collaborator traits the key derivation core is written against:
//! wide hashing, field arithmetic, group arithmetic and memory wiping.
//! Secure randomness is taken as `rand::RngCore + rand::CryptoRng` directly.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{FieldArithmetic, GroupArithmetic, Hash512, SecureWipe};
