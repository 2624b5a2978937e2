//! Wide hash trait

use edmont_params::ed25519::ED25519_EXPANDED_HASH_SIZE;

/// A deterministic cryptographic hash with a 512-bit output
///
/// The output is written into a caller-owned buffer so the caller controls
/// where the digest lives and when it is wiped.
pub trait Hash512 {
    /// Name of the hash algorithm
    fn name(&self) -> &'static str;

    /// Hash `data` and write the 64-byte digest into `out`
    fn digest_into(&self, data: &[u8], out: &mut [u8; ED25519_EXPANDED_HASH_SIZE]);
}

impl<T: Hash512 + ?Sized> Hash512 for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn digest_into(&self, data: &[u8], out: &mut [u8; ED25519_EXPANDED_HASH_SIZE]) {
        (**self).digest_into(data, out)
    }
}
