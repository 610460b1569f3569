use crate::crypto::dh_error::DhError;
use rand::{CryptoRng, RngCore};

/// A private scalar and its public value, both as fixed-length big-endian
/// encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: Vec<u8>,
    pub public_key: Vec<u8>,
}

pub trait KeyAgreement {
    fn generate_private<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Vec<u8>;
    fn derive_public(&self, private_key: &[u8]) -> Result<Vec<u8>, DhError>;
    fn derive_shared(&self, own_private: &[u8], peer_public: &[u8]) -> Result<Vec<u8>, DhError>;

    /// Length in bytes of every value this agreement produces.
    fn encoded_len(&self) -> usize;

    fn generate_keypair<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyPair, DhError> {
        let private_key = self.generate_private(rng);
        let public_key = self.derive_public(&private_key)?;
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }
}
