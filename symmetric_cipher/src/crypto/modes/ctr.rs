use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode};
use crate::crypto::modes::{check_iv, PARALLELISM_THRESHOLD};
use crate::crypto::utils::{increment_block, xor_bytes};
use rayon::prelude::*;
use std::sync::Arc;

/// Counter mode. Block `i` is XORed with `E(IV + i)`, the counter being the
/// whole block read as a big-endian integer that wraps on overflow.
pub struct CtrMode {
    cipher: Arc<dyn BlockCipher>,
}

impl CtrMode {
    pub fn new(cipher: Arc<dyn BlockCipher>) -> Self {
        Self { cipher }
    }

    pub fn counter_block(iv: &[u8], index: u64) -> Vec<u8> {
        let mut counter = iv.to_vec();
        increment_block(&mut counter, index);
        counter
    }

    fn process_block(&self, iv: &[u8], index: usize, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let keystream = self
            .cipher
            .encrypt_block(&Self::counter_block(iv, index as u64))?;
        Ok(xor_bytes(block, &keystream))
    }
}

impl BlockMode for CtrMode {
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.cipher.block_size();
        check_iv(iv, block_size)?;

        let blocks: Vec<Vec<u8>> = if data.len() > PARALLELISM_THRESHOLD {
            data.par_chunks(block_size)
                .enumerate()
                .map(|(i, block)| self.process_block(iv, i, block))
                .collect::<Result<_, _>>()?
        } else {
            data.chunks(block_size)
                .enumerate()
                .map(|(i, block)| self.process_block(iv, i, block))
                .collect::<Result<_, _>>()?
        };

        Ok(blocks.concat())
    }

    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt(data, iv)
    }
}
