//! Security primitives and memory safety utilities
//!
//! This module provides the types used throughout edmont to hold secret
//! material and to guarantee it is wiped on every exit path.

pub mod secret;
pub mod wipe;

// Re-export core security types
pub use secret::SecretBuffer;
pub use wipe::{WipeOnDrop, ZeroizeWipe};
