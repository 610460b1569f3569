use crate::crypto::dh_error::DhError;
use crate::crypto::dh_params::DhParams;
use crate::crypto::key_exchange_traits::{KeyAgreement, KeyPair};
use num_bigint::{BigUint, RandBigInt};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use symmetric_cipher::{from_unsigned, to_fixed};

/// Diffie-Hellman key agreement over the order-q subgroup of a safe prime.
#[derive(Clone, Debug)]
pub struct DiffieHellman {
    params: DhParams,
}

impl DiffieHellman {
    pub fn new(params: DhParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DhParams {
        &self.params
    }

    /// Key pair drawn from the operating system's generator.
    pub fn random_keypair(&self) -> Result<KeyPair, DhError> {
        self.generate_keypair(&mut OsRng)
    }

    fn decode_private(&self, private_key: &[u8]) -> Result<BigUint, DhError> {
        let x = from_unsigned(private_key);
        if x < BigUint::from(2u32) || &x >= self.params.q() {
            return Err(DhError::InvalidPrivateKey);
        }
        Ok(x)
    }

    fn decode_peer(&self, peer_public: &[u8]) -> Result<BigUint, DhError> {
        let y = from_unsigned(peer_public);
        let upper = self.params.p() - 2u32;
        if y < BigUint::from(2u32) || y > upper {
            log::warn!("rejecting peer public value outside [2, p-2]");
            return Err(DhError::InvalidPeerPublicKey);
        }
        Ok(y)
    }
}

impl KeyAgreement for DiffieHellman {
    fn generate_private<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Vec<u8> {
        let q = self.params.q();
        let two = BigUint::from(2u32);

        let x = loop {
            let candidate = rng.gen_biguint(q.bits());
            if candidate >= two && &candidate < q {
                break candidate;
            }
        };

        to_fixed(&x, self.encoded_len())
    }

    fn derive_public(&self, private_key: &[u8]) -> Result<Vec<u8>, DhError> {
        let x = self.decode_private(private_key)?;
        let y = self.params.g().modpow(&x, self.params.p());
        Ok(to_fixed(&y, self.encoded_len()))
    }

    fn derive_shared(&self, own_private: &[u8], peer_public: &[u8]) -> Result<Vec<u8>, DhError> {
        let peer = self.decode_peer(peer_public)?;
        let x = self.decode_private(own_private)?;
        let secret = peer.modpow(&x, self.params.p());
        Ok(to_fixed(&secret, self.encoded_len()))
    }

    fn encoded_len(&self) -> usize {
        self.params.encoded_len()
    }
}
