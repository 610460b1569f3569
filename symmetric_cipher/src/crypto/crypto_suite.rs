use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, BlockMode, Padding};
use crate::crypto::cipher_types::{Algorithm, CipherMode, PaddingMode};
use crate::crypto::magenta::Magenta;
use crate::crypto::{modes, padding};
use std::fmt;
use std::sync::Arc;

/// One cipher, one mode and an optional padding behind a single
/// encrypt/decrypt API.
///
/// Immutable once built; clones share the keyed cipher.
#[derive(Clone)]
pub struct CryptoSuite {
    cipher: Arc<dyn BlockCipher>,
    mode: Arc<dyn BlockMode>,
    padding: Option<Arc<dyn Padding>>,
    cipher_mode: CipherMode,
    padding_mode: Option<PaddingMode>,
    block_size: usize,
}

impl CryptoSuite {
    pub fn new(
        algorithm: Algorithm,
        mode: CipherMode,
        padding: Option<PaddingMode>,
        key: &[u8],
    ) -> Result<Self, CipherError> {
        let cipher: Arc<dyn BlockCipher> = match algorithm {
            Algorithm::Magenta => Arc::new(Magenta::new(key)?),
        };

        log::debug!(
            "built {} suite: mode={}, padding={}",
            algorithm,
            mode,
            padding.map_or_else(|| "none".to_string(), |p| p.to_string())
        );

        Ok(Self::with_cipher(cipher, mode, padding))
    }

    /// Builds a suite around an already keyed cipher, such as an external
    /// implementation of [`BlockCipher`].
    pub fn with_cipher(
        cipher: Arc<dyn BlockCipher>,
        mode: CipherMode,
        padding: Option<PaddingMode>,
    ) -> Self {
        let block_size = cipher.block_size();

        Self {
            mode: Arc::from(modes::for_mode(mode, cipher.clone())),
            padding: padding.map(|p| Arc::from(padding::for_mode(p))),
            cipher,
            cipher_mode: mode,
            padding_mode: padding,
            block_size,
        }
    }

    pub fn builder() -> SuiteBuilder {
        SuiteBuilder::default()
    }

    pub fn encrypt(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        match &self.padding {
            Some(padding) => {
                let padded = padding.pad(plaintext, self.block_size)?;
                self.mode.encrypt(&padded, iv)
            }
            None => self.mode.encrypt(plaintext, iv),
        }
    }

    pub fn decrypt(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let data = self.mode.decrypt(ciphertext, iv)?;
        match &self.padding {
            Some(padding) => padding.unpad(&data),
            None => Ok(data),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// IV length callers must supply to [`Self::encrypt`]/[`Self::decrypt`].
    pub fn iv_len(&self) -> usize {
        self.cipher_mode.iv_len(self.block_size)
    }

    pub fn cipher_mode(&self) -> CipherMode {
        self.cipher_mode
    }

    pub fn padding_mode(&self) -> Option<PaddingMode> {
        self.padding_mode
    }

    pub fn cipher(&self) -> &Arc<dyn BlockCipher> {
        &self.cipher
    }
}

impl fmt::Debug for CryptoSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoSuite")
            .field("mode", &self.cipher_mode)
            .field("padding", &self.padding_mode)
            .field("block_size", &self.block_size)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Default)]
pub struct SuiteBuilder {
    algorithm: Option<Algorithm>,
    mode: Option<CipherMode>,
    padding: Option<PaddingMode>,
    key: Option<Vec<u8>>,
}

impl SuiteBuilder {
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn mode(mut self, mode: CipherMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn padding(mut self, padding: PaddingMode) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn key(mut self, key: &[u8]) -> Self {
        self.key = Some(key.to_vec());
        self
    }

    pub fn build(self) -> Result<CryptoSuite, CipherError> {
        let algorithm = self
            .algorithm
            .ok_or(CipherError::IncompleteConfiguration("algorithm"))?;
        let mode = self
            .mode
            .ok_or(CipherError::IncompleteConfiguration("cipher mode"))?;
        let key = self
            .key
            .ok_or(CipherError::IncompleteConfiguration("key"))?;

        CryptoSuite::new(algorithm, mode, self.padding, &key)
    }
}
