//! Modes of operation. Each mode owns a shared handle to a keyed
//! [`BlockCipher`] and is itself stateless between calls.

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod pcbc;
pub mod random_delta;

pub use cbc::CbcMode;
pub use cfb::CfbMode;
pub use ctr::CtrMode;
pub use ecb::EcbMode;
pub use ofb::OfbMode;
pub use pcbc::PcbcMode;
pub use random_delta::RandomDeltaMode;

use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode};
use crate::crypto::cipher_types::CipherMode;
use std::sync::Arc;

/// Inputs above this size are split across the rayon pool (ECB and CTR).
pub(crate) const PARALLELISM_THRESHOLD: usize = 64 * 1024;

pub fn for_mode(mode: CipherMode, cipher: Arc<dyn BlockCipher>) -> Box<dyn BlockMode> {
    match mode {
        CipherMode::ECB => Box::new(EcbMode::new(cipher)),
        CipherMode::CBC => Box::new(CbcMode::new(cipher)),
        CipherMode::PCBC => Box::new(PcbcMode::new(cipher)),
        CipherMode::CFB => Box::new(CfbMode::new(cipher)),
        CipherMode::OFB => Box::new(OfbMode::new(cipher)),
        CipherMode::CTR => Box::new(CtrMode::new(cipher)),
        CipherMode::RandomDelta => Box::new(RandomDeltaMode::new(cipher)),
    }
}

pub(crate) fn check_iv(iv: &[u8], block_size: usize) -> Result<(), CipherError> {
    if iv.len() != block_size {
        return Err(CipherError::InvalidIvLength {
            actual: iv.len(),
            expected: block_size,
        });
    }
    Ok(())
}

pub(crate) fn check_aligned(data: &[u8], block_size: usize) -> Result<(), CipherError> {
    if data.len() % block_size != 0 {
        return Err(CipherError::UnalignedData {
            len: data.len(),
            block_size,
        });
    }
    Ok(())
}
