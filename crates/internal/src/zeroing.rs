//! Secure memory zeroing utilities

use zeroize::Zeroize;

/// Securely zero a slice of memory
///
/// The write goes through `zeroize`, so it is not removed by the optimizer
/// even when the buffer is never read again.
pub fn secure_zero(data: &mut [u8]) {
    data.zeroize();
}

/// Returns true if every byte of `data` is zero
///
/// Runs over the whole slice regardless of where the first non-zero byte is.
pub fn is_zeroed(data: &[u8]) -> bool {
    data.iter().fold(0u8, |acc, b| acc | b) == 0
}
