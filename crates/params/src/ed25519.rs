//! Constants for Ed25519 key derivation

/// Size of the secret seed a keypair is derived from
pub const ED25519_SEED_SIZE: usize = 32;

/// Size of a compressed Edwards public key
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the `seed || public_key` secret key layout
pub const ED25519_SECRET_KEY_SIZE: usize = 64;

/// Size of a clamped scalar
pub const ED25519_SCALAR_SIZE: usize = 32;

/// Output size of the wide hash used to expand a seed
pub const ED25519_EXPANDED_HASH_SIZE: usize = 64;

/// Cofactor of the curve group over the prime-order subgroup
pub const ED25519_COFACTOR: u8 = 8;

/// Mask applied to byte 0 of a scalar (clears the cofactor bits 0..=2)
pub const CLAMP_LOW_MASK: u8 = 0b1111_1000;

/// Mask applied to byte 31 of a scalar (clears bit 255)
pub const CLAMP_HIGH_MASK: u8 = 0b0111_1111;

/// Bit set in byte 31 of a scalar (bit 254)
pub const CLAMP_HIGH_BIT: u8 = 0b0100_0000;
