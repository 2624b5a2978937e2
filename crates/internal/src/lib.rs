//! Internal utilities for the edmont library
//!
//! Constant-time helpers and memory wiping shared by every other crate in
//! the workspace. Nothing here is specific to a curve.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod zeroing;

pub use constant_time::{ct_eq, ct_eq_choice};
pub use zeroing::{is_zeroed, secure_zero};
