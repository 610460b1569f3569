//! The MAGENTA round function `F(R, k) = E3(R || k)`.
//!
//! Built from the S table over GF(2^8):
//! `f(x) = S[x]`, `A(x, y) = f(x ^ f(y))`, `PE(x, y) = (A(x, y), A(y, x))`,
//! `PI` applies `PE` across the two 8-byte halves, `T` is four `PI` passes.

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::gf256::s_box;
use crate::crypto::utils::{split_even_odd, xor_bytes};

pub const ROUND_FUNCTION_DEPTH: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct MagentaTransformation;

#[inline]
fn f(x: u8) -> u8 {
    s_box()[x as usize]
}

#[inline]
fn a(x: u8, y: u8) -> u8 {
    f(x ^ f(y))
}

#[inline]
fn pe(x: u8, y: u8) -> (u8, u8) {
    (a(x, y), a(y, x))
}

fn pi(block: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for i in 0..8 {
        let (even, odd) = pe(block[i], block[i + 8]);
        out[2 * i] = even;
        out[2 * i + 1] = odd;
    }
    out
}

fn t(block: &[u8; 16]) -> [u8; 16] {
    let mut out = *block;
    for _ in 0..4 {
        out = pi(&out);
    }
    out
}

fn cj(block: &[u8; 16], rounds: usize) -> [u8; 16] {
    let mut c = t(block);
    for _ in 1..rounds {
        let (even, odd) = split_even_odd(&c);
        let mut next = [0u8; 16];
        next[..8].copy_from_slice(&xor_bytes(&block[..8], &even));
        next[8..].copy_from_slice(&xor_bytes(&block[8..], &odd));
        c = t(&next);
    }
    c
}

/// Even-indexed bytes of `C^rounds(block)`.
pub fn e(block: &[u8; 16], rounds: usize) -> [u8; 8] {
    let c = cj(block, rounds);
    let mut out = [0u8; 8];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = c[2 * i];
    }
    out
}

impl EncryptionTransformation for MagentaTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8> {
        let mut state = [0u8; 16];
        state[..8].copy_from_slice(&input_block[..8]);
        state[8..].copy_from_slice(&round_key[..8]);
        e(&state, ROUND_FUNCTION_DEPTH).to_vec()
    }
}
