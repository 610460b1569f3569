use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode};
use crate::crypto::modes::check_iv;
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// Output feedback. The keystream never depends on the data, so decryption
/// is the same operation as encryption.
pub struct OfbMode {
    cipher: Arc<dyn BlockCipher>,
}

impl OfbMode {
    pub fn new(cipher: Arc<dyn BlockCipher>) -> Self {
        Self { cipher }
    }
}

impl BlockMode for OfbMode {
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;

        let mut result = Vec::with_capacity(data.len());
        let mut keystream = iv.to_vec();

        for block in data.chunks(block_size) {
            keystream = self.cipher.encrypt_block(&keystream)?;
            result.extend(xor_bytes(block, &keystream));
        }

        Ok(result)
    }

    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt(data, iv)
    }
}
