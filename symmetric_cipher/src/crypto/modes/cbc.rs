use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode};
use crate::crypto::modes::{check_aligned, check_iv};
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// Cipher block chaining: `C_i = E(P_i ^ C_{i-1})`, `C_0 = IV`.
pub struct CbcMode {
    cipher: Arc<dyn BlockCipher>,
}

impl CbcMode {
    pub fn new(cipher: Arc<dyn BlockCipher>) -> Self {
        Self { cipher }
    }
}

impl BlockMode for CbcMode {
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;
        check_aligned(data, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut prev = iv.to_vec();

        for block in data.chunks(block_size) {
            let encrypted = self.cipher.encrypt_block(&xor_bytes(block, &prev))?;
            result.extend_from_slice(&encrypted);
            prev = encrypted;
        }

        Ok(result)
    }

    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;
        check_aligned(data, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut prev: &[u8] = iv;

        for block in data.chunks(block_size) {
            let decrypted = self.cipher.decrypt_block(block)?;
            result.extend(xor_bytes(&decrypted, prev));
            prev = block;
        }

        Ok(result)
    }
}
