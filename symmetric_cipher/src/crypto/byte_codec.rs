//! Fixed-width big-endian encoding of unsigned big integers.
//!
//! Both the random-delta counter and the Diffie-Hellman encodings go through
//! [`to_fixed`], so its reduction rule is part of the wire format: values that
//! do not fit keep their low-order `len` bytes.

use num_bigint::BigUint;

/// Encodes `x` as exactly `len` big-endian bytes.
///
/// Shorter values are left-padded with zeros, longer values are reduced
/// modulo `2^(8 * len)`.
pub fn to_fixed(x: &BigUint, len: usize) -> Vec<u8> {
    let bytes = x.to_bytes_be();
    let mut out = vec![0u8; len];

    if bytes.len() <= len {
        out[len - bytes.len()..].copy_from_slice(&bytes);
    } else {
        out.copy_from_slice(&bytes[bytes.len() - len..]);
    }

    out
}

/// Interprets big-endian bytes as a non-negative integer.
pub fn from_unsigned(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
