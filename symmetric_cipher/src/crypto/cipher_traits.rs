use crate::crypto::cipher_error::CipherError;

/// A keyed block cipher.
///
/// Implementations are keyed at construction and never mutated afterwards,
/// so a single instance can be shared between threads and modes.
pub trait BlockCipher: Send + Sync {
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// A padding scheme that extends data to a positive multiple of a block size.
pub trait Padding: Send + Sync {
    /// Always appends at least one byte, a whole block when `data` is
    /// already aligned.
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CipherError>;
    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// A mode of operation over an injected [`BlockCipher`].
pub trait BlockMode: Send + Sync {
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError>;
}
