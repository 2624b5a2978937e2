//! Wiping backends and drop guards
//!
//! [`WipeOnDrop`] owns a fixed-size scratch buffer and hands it to a
//! [`SecureWipe`] implementation when it goes out of scope, so the wipe runs
//! on normal return, early `?` return and unwinding alike.

use core::fmt;
use core::ops::{Deref, DerefMut};
use edmont_api::SecureWipe;
use edmont_internal::zeroing::secure_zero;

/// Default wiping backend built on `zeroize`
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroizeWipe;

impl SecureWipe for ZeroizeWipe {
    fn wipe(&self, buf: &mut [u8]) {
        secure_zero(buf);
    }
}

/// Scratch buffer that is wiped when dropped
pub struct WipeOnDrop<'w, W: SecureWipe + ?Sized, const N: usize> {
    buf: [u8; N],
    wiper: &'w W,
}

impl<'w, W: SecureWipe + ?Sized, const N: usize> WipeOnDrop<'w, W, N> {
    /// Create a zeroed scratch buffer wiped by `wiper` on drop
    pub fn new(wiper: &'w W) -> Self {
        Self {
            buf: [0u8; N],
            wiper,
        }
    }

    /// Create a scratch buffer holding a copy of `data`
    pub fn with_contents(wiper: &'w W, data: &[u8; N]) -> Self {
        Self { buf: *data, wiper }
    }
}

impl<W: SecureWipe + ?Sized, const N: usize> Deref for WipeOnDrop<'_, W, N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<W: SecureWipe + ?Sized, const N: usize> DerefMut for WipeOnDrop<'_, W, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<W: SecureWipe + ?Sized, const N: usize> Drop for WipeOnDrop<'_, W, N> {
    fn drop(&mut self) {
        self.wiper.wipe(&mut self.buf);
    }
}

impl<W: SecureWipe + ?Sized, const N: usize> fmt::Debug for WipeOnDrop<'_, W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WipeOnDrop<{}>([REDACTED])", N)
    }
}
