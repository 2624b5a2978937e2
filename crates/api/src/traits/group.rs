//! Edwards group arithmetic trait

/// Operations on the twisted Edwards curve group
///
/// Points are exchanged as 32-byte compressed encodings (the y-coordinate
/// with the sign of x in the top bit).
pub trait GroupArithmetic {
    /// Internal point representation
    type Point;

    /// `scalar · B` for the standard base point
    ///
    /// The scalar is secret; implementations must run in constant time.
    fn scalar_mult_base(&self, scalar: &[u8; 32]) -> Self::Point;

    /// Decode a compressed point, or `None` if the encoding is not on the curve
    ///
    /// Variable time. Only call this with public data.
    fn decode_vartime(&self, encoded: &[u8; 32]) -> Option<Self::Point>;

    /// Whether the encoding names a point whose order divides the cofactor
    ///
    /// Variable time. Only call this with public data.
    fn has_small_order(&self, encoded: &[u8; 32]) -> bool;

    /// Whether the point lies in the prime-order subgroup
    fn is_in_prime_subgroup(&self, point: &Self::Point) -> bool;

    /// Compressed encoding of a point
    fn encode(&self, point: &Self::Point) -> [u8; 32];

    /// Canonical little-endian encoding of the affine y-coordinate
    fn y_coordinate(&self, point: &Self::Point) -> [u8; 32];
}
