//! Field arithmetic modulo p = 2^255 - 19
//!
//! This module implements arithmetic operations on field elements
//! for the Curve25519 / Ed25519 base field.

use edmont_api::FieldArithmetic;
use edmont_internal::constant_time::ct_eq;
use zeroize::Zeroize;

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement {
    // Represented as 5 51-bit limbs, little-endian
    pub(crate) v: [u64; 5],
}

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// 16·p in limb representation, added before subtracting so limbs never underflow
const SIXTEEN_P: [u64; 5] = [
    36028797018963664,
    36028797018963952,
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// (p-2) = 2^255 - 21 in little-endian form
const P_MINUS_2: [u8; 32] = [
    0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

#[inline(always)]
fn load8(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(word)
}

#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Carry every limb into the next one, folding the top carry back times 19
///
/// Output limbs are below 2^51 + 2^18, which every other operation accepts.
fn weak_reduce(mut limbs: [u64; 5]) -> [u64; 5] {
    let c0 = limbs[0] >> 51;
    let c1 = limbs[1] >> 51;
    let c2 = limbs[2] >> 51;
    let c3 = limbs[3] >> 51;
    let c4 = limbs[4] >> 51;

    limbs[0] &= LOW_51_BIT_MASK;
    limbs[1] &= LOW_51_BIT_MASK;
    limbs[2] &= LOW_51_BIT_MASK;
    limbs[3] &= LOW_51_BIT_MASK;
    limbs[4] &= LOW_51_BIT_MASK;

    limbs[0] += c4 * 19;
    limbs[1] += c0;
    limbs[2] += c1;
    limbs[3] += c2;
    limbs[4] += c3;

    limbs
}

impl FieldElement {
    /// Zero element
    pub fn zero() -> Self {
        FieldElement { v: [0; 5] }
    }

    /// One element
    pub fn one() -> Self {
        FieldElement { v: [1, 0, 0, 0, 0] }
    }

    /// Create a field element from bytes (little-endian)
    ///
    /// Bit 255 is ignored. Encodings of values in [p, 2^255) are accepted and
    /// behave as their residue.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        FieldElement {
            v: [
                load8(&bytes[0..]) & LOW_51_BIT_MASK,
                (load8(&bytes[6..]) >> 3) & LOW_51_BIT_MASK,
                (load8(&bytes[12..]) >> 6) & LOW_51_BIT_MASK,
                (load8(&bytes[19..]) >> 1) & LOW_51_BIT_MASK,
                (load8(&bytes[24..]) >> 12) & LOW_51_BIT_MASK,
            ],
        }
    }

    /// Convert to canonical bytes (little-endian), always below p
    pub fn to_bytes(self) -> [u8; 32] {
        let mut limbs = weak_reduce(self.v);

        // q = 1 iff the value is at least p, computed from the carry of value + 19
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // value - q·p = value + 19·q - q·2^255
        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        // Dropping the carry out of limb 4 subtracts q·2^255
        limbs[4] &= LOW_51_BIT_MASK;

        // Pack 5 x 51 bits into 255 bits
        let mut s = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0u32;
        let mut idx = 0usize;
        for limb in limbs {
            acc |= (limb as u128) << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                s[idx] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                idx += 1;
            }
        }
        // The last 7 bits land in byte 31
        s[idx] = acc as u8;

        s
    }

    /// Add two field elements
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0u64; 5];
        for (i, item) in v.iter_mut().enumerate() {
            *item = self.v[i] + other.v[i];
        }
        FieldElement { v: weak_reduce(v) }
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0u64; 5];
        for (i, item) in v.iter_mut().enumerate() {
            *item = (self.v[i] + SIXTEEN_P[i]) - other.v[i];
        }
        FieldElement { v: weak_reduce(v) }
    }

    /// Multiply two field elements (constant-time)
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        let a = &self.v;
        let b = &other.v;

        // ---- pre-scaled limbs: 2^255 ≡ 19, so wrapped terms pick up ×19 ----
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        // ---- schoolbook product, wrapped limbs folded in ----
        let c0: u128 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1: u128 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2: u128 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3: u128 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4: u128 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        // ---- carry propagation ----
        let mut out = [0u64; 5];

        c1 += c0 >> 51;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        c2 += c1 >> 51;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;

        c3 += c2 >> 51;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;

        c4 += c3 >> 51;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement { v: out }
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Multiplicative inverse using Fermat's little theorem: a^(p-2) (constant-time)
    ///
    /// The inverse of zero is zero.
    pub fn invert(&self) -> FieldElement {
        let mut result = FieldElement::one();

        // Scan bits from MSB → LSB (bit 254 down to bit 0); the exponent is public
        for bit in (0..255).rev() {
            result = result.square();
            if (P_MINUS_2[bit >> 3] >> (bit & 7)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }

    /// Negate
    pub fn neg(&self) -> FieldElement {
        FieldElement::zero().sub(self)
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        ct_eq(self.to_bytes(), [0u8; 32])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.to_bytes(), other.to_bytes())
    }
}

impl Eq for FieldElement {}

impl core::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement({:02x?})", self.to_bytes())
    }
}

/// Curve25519 base field backend
#[derive(Clone, Copy, Debug, Default)]
pub struct Curve25519Field;

impl FieldArithmetic for Curve25519Field {
    type Element = FieldElement;

    fn one(&self) -> FieldElement {
        FieldElement::one()
    }

    fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        a.add(b)
    }

    fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        a.sub(b)
    }

    fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        a.mul(b)
    }

    fn invert(&self, a: &FieldElement) -> FieldElement {
        a.invert()
    }

    fn from_bytes(&self, bytes: &[u8; 32]) -> FieldElement {
        FieldElement::from_bytes(bytes)
    }

    fn to_bytes(&self, a: &FieldElement) -> [u8; 32] {
        a.to_bytes()
    }
}
