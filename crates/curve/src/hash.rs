//! 512-bit hash backends for seed expansion
//!
//! Both backends hash straight into the caller's buffer so no second copy
//! of the digest is left on the stack.

use blake2::Blake2b512;
use edmont_api::Hash512;
use edmont_params::ed25519::ED25519_EXPANDED_HASH_SIZE;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512};

/// SHA-512, the hash RFC 8032 uses to expand an Ed25519 seed
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512Hash;

impl Hash512 for Sha512Hash {
    fn name(&self) -> &'static str {
        "SHA-512"
    }

    fn digest_into(&self, data: &[u8], out: &mut [u8; ED25519_EXPANDED_HASH_SIZE]) {
        let mut hasher = Sha512::new();
        hasher.update(data);
        hasher.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    }
}

/// BLAKE2b with a 512-bit digest and no key
///
/// Keys derived with this backend are not interoperable with RFC 8032
/// implementations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake2b512Hash;

impl Hash512 for Blake2b512Hash {
    fn name(&self) -> &'static str {
        "BLAKE2b-512"
    }

    fn digest_into(&self, data: &[u8], out: &mut [u8; ED25519_EXPANDED_HASH_SIZE]) {
        let mut hasher = Blake2b512::new();
        hasher.update(data);
        hasher.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    }
}
