//! Testing utilities for the edmont library
//!
//! Shared by the integration tests and benches of this crate: published test
//! vectors, an instrumented wiping backend and misbehaving RNGs.

pub mod vectors;

pub use rng::{FailingRng, PartialRng};
pub use vectors::{hex32, Rfc8032Vector, RFC8032_VECTORS};
pub use wipe::{RecordingWipe, WipeRecord};
