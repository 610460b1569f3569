use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{swap_halves, xor_bytes};
use std::sync::Arc;

/// Balanced Feistel network driven by an explicit round-key list.
///
/// One round per round key: `(L, R) -> (R, L ^ F(R, k))`.
#[derive(Clone)]
pub struct FeistelNetwork {
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(transformation: Arc<dyn EncryptionTransformation + Send + Sync>) -> Self {
        Self { transformation }
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        debug_assert_eq!(block.len() % 2, 0, "Block size must be even");

        let (left, right) = block.split_at(block.len() / 2);

        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round_key in round_keys {
            let feistel_out = self.transformation.transform(&right, round_key);
            let new_right = xor_bytes(&left, &feistel_out);
            left = right;
            right = new_right;
        }

        [left, right].concat()
    }

    /// Runs the rounds backwards with the key list reversed.
    pub fn decrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        debug_assert_eq!(block.len() % 2, 0, "Block size must be even");

        let (left, right) = block.split_at(block.len() / 2);

        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round_key in round_keys.iter().rev() {
            let feistel_out = self.transformation.transform(&left, round_key);
            let new_left = xor_bytes(&right, &feistel_out);
            right = left;
            left = new_left;
        }

        [left, right].concat()
    }

    /// Inverts [`Self::encrypt_with_round_keys`] by running it forward on the
    /// half-swapped block and swapping back.
    ///
    /// Only valid when `round_keys` reads the same in both directions.
    pub fn decrypt_by_half_swap(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        debug_assert!(is_palindrome(round_keys), "round keys must be palindromic");

        swap_halves(&self.encrypt_with_round_keys(&swap_halves(block), round_keys))
    }
}

pub fn is_palindrome(round_keys: &[Vec<u8>]) -> bool {
    round_keys.iter().eq(round_keys.iter().rev())
}
