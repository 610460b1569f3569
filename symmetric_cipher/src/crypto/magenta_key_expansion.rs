use crate::crypto::cipher_error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;

pub const KEY_SIZES: &[usize] = &[16, 24, 32];
pub const SUBKEY_SIZE: usize = 8;

/// Splits the key into 8-byte words and lays them out as a palindrome:
///
/// * 16 bytes: `K1 K1 K2 K2 K1 K1`
/// * 24 bytes: `K1 K2 K3 K3 K2 K1`
/// * 32 bytes: `K1 K2 K3 K4 K4 K3 K2 K1`
///
/// Decryption relies on the palindrome, see
/// [`FeistelNetwork::decrypt_by_half_swap`](crate::crypto::feistel_network::FeistelNetwork::decrypt_by_half_swap).
#[derive(Clone, Copy, Debug, Default)]
pub struct MagentaKeyExpansion;

impl KeyExpansion for MagentaKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        let words: Vec<Vec<u8>> = key.chunks(SUBKEY_SIZE).map(<[u8]>::to_vec).collect();

        let order: &[usize] = match key.len() {
            16 => &[0, 0, 1, 1, 0, 0],
            24 => &[0, 1, 2, 2, 1, 0],
            32 => &[0, 1, 2, 3, 3, 2, 1, 0],
            actual => {
                return Err(CipherError::InvalidKeyLength {
                    actual,
                    expected: KEY_SIZES,
                })
            }
        };

        Ok(order.iter().map(|&i| words[i].clone()).collect())
    }
}
