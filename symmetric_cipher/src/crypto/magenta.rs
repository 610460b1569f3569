use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
pub use crate::crypto::magenta_key_expansion::{MagentaKeyExpansion, KEY_SIZES};
use crate::crypto::magenta_transformation::MagentaTransformation;
use std::fmt;
use std::sync::Arc;

pub const BLOCK_SIZE: usize = 16;

/// MAGENTA: a 128-bit Feistel cipher over GF(2^8) taking 128/192/256-bit keys.
#[derive(Clone)]
pub struct Magenta {
    feistel_network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl Magenta {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let round_keys = MagentaKeyExpansion.generate_round_keys(key)?;
        let feistel_network = FeistelNetwork::new(Arc::new(MagentaTransformation));

        Ok(Self {
            feistel_network,
            round_keys,
        })
    }

    pub fn rounds(&self) -> usize {
        self.round_keys.len()
    }

    fn check_block(block: &[u8]) -> Result<(), CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                actual: block.len(),
                expected: BLOCK_SIZE,
            });
        }
        Ok(())
    }
}

impl BlockCipher for Magenta {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_block(block)?;
        Ok(self
            .feistel_network
            .encrypt_with_round_keys(block, &self.round_keys))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_block(block)?;
        Ok(self
            .feistel_network
            .decrypt_by_half_swap(block, &self.round_keys))
    }
}

impl fmt::Debug for Magenta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Magenta")
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}
