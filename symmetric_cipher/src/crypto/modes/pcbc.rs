use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode};
use crate::crypto::modes::check_iv;
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// Propagating CBC: `C_i = E(P_i ^ P_{i-1} ^ C_{i-1})`, seeded with the IV.
///
/// Works on whole blocks only; a trailing partial block is dropped from the
/// output.
pub struct PcbcMode {
    cipher: Arc<dyn BlockCipher>,
}

impl PcbcMode {
    pub fn new(cipher: Arc<dyn BlockCipher>) -> Self {
        Self { cipher }
    }
}

impl BlockMode for PcbcMode {
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut feedback = iv.to_vec();

        for block in data.chunks_exact(block_size) {
            let encrypted = self.cipher.encrypt_block(&xor_bytes(block, &feedback))?;
            feedback = xor_bytes(block, &encrypted);
            result.extend_from_slice(&encrypted);
        }

        Ok(result)
    }

    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut feedback = iv.to_vec();

        for block in data.chunks_exact(block_size) {
            let plain = xor_bytes(&self.cipher.decrypt_block(block)?, &feedback);
            feedback = xor_bytes(block, &plain);
            result.extend_from_slice(&plain);
        }

        Ok(result)
    }
}
