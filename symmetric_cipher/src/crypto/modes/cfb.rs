use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode};
use crate::crypto::modes::check_iv;
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// Full-block cipher feedback. Handles a trailing partial block.
pub struct CfbMode {
    cipher: Arc<dyn BlockCipher>,
}

impl CfbMode {
    pub fn new(cipher: Arc<dyn BlockCipher>) -> Self {
        Self { cipher }
    }
}

impl BlockMode for CfbMode {
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut feedback = iv.to_vec();

        for block in data.chunks(block_size) {
            let keystream = self.cipher.encrypt_block(&feedback)?;
            let encrypted = xor_bytes(block, &keystream);
            result.extend_from_slice(&encrypted);
            feedback = encrypted;
        }

        Ok(result)
    }

    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut feedback: &[u8] = iv;

        for block in data.chunks(block_size) {
            let keystream = self.cipher.encrypt_block(feedback)?;
            result.extend(xor_bytes(block, &keystream));
            feedback = block;
        }

        Ok(result)
    }
}
