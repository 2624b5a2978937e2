//! Secure memory wiping trait

/// Overwrites memory that held secret material
///
/// Implementations must guarantee the write is not elided by the compiler.
/// After `wipe` returns every byte of `buf` must be zero.
pub trait SecureWipe {
    /// Wipe the buffer in place
    fn wipe(&self, buf: &mut [u8]);
}

impl<T: SecureWipe + ?Sized> SecureWipe for &T {
    fn wipe(&self, buf: &mut [u8]) {
        (**self).wipe(buf)
    }
}
