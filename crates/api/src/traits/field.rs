//! Prime field arithmetic trait

/// Arithmetic over the base field of the curve
///
/// Elements are encoded as 32 little-endian bytes. `from_bytes` ignores the
/// top bit and reduces non-canonical encodings; `to_bytes` always produces
/// the canonical encoding.
pub trait FieldArithmetic {
    /// Field element representation
    type Element: Clone;

    /// Multiplicative identity
    fn one(&self) -> Self::Element;

    /// a + b
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// a - b
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// a * b
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// a^-1, with the convention that the inverse of zero is zero
    fn invert(&self, a: &Self::Element) -> Self::Element;

    /// Decode a little-endian field element
    fn from_bytes(&self, bytes: &[u8; 32]) -> Self::Element;

    /// Canonical little-endian encoding
    fn to_bytes(&self, a: &Self::Element) -> [u8; 32];
}
