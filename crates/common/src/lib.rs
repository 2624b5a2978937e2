//! Common implementations and shared functionality for the edmont library
//!
//! This crate provides the secret containers and wiping guards used by the
//! key derivation crates.

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, WipeOnDrop, ZeroizeWipe};
