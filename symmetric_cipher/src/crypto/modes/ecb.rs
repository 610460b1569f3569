use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode};
use crate::crypto::modes::{check_aligned, PARALLELISM_THRESHOLD};
use rayon::prelude::*;
use std::sync::Arc;

/// Electronic codebook. The IV is ignored.
pub struct EcbMode {
    cipher: Arc<dyn BlockCipher>,
}

impl EcbMode {
    pub fn new(cipher: Arc<dyn BlockCipher>) -> Self {
        Self { cipher }
    }

    fn process(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_aligned(data, block_size)?;

        let transform = |block: &[u8]| {
            if encrypt {
                self.cipher.encrypt_block(block)
            } else {
                self.cipher.decrypt_block(block)
            }
        };

        let blocks: Vec<Vec<u8>> = if data.len() > PARALLELISM_THRESHOLD {
            data.par_chunks(block_size)
                .map(transform)
                .collect::<Result<_, _>>()?
        } else {
            data.chunks(block_size)
                .map(transform)
                .collect::<Result<_, _>>()?
        };

        Ok(blocks.concat())
    }
}

impl BlockMode for EcbMode {
    fn encrypt(&self, data: &[u8], _iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(data, true)
    }

    fn decrypt(&self, data: &[u8], _iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(data, false)
    }
}
