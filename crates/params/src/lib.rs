//! Constant values for the edmont library
//!
//! Sizes are in bytes. The crate has no dependencies and is always `no_std`.

#![no_std]

pub mod ed25519;
pub mod x25519;
