//! Constants for X25519 key exchange

/// Size of a Montgomery u-coordinate public key
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of a Montgomery secret scalar
pub const X25519_SECRET_KEY_SIZE: usize = 32;
