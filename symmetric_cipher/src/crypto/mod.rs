pub mod byte_codec;
pub mod cipher_error;
pub mod cipher_io;
pub mod cipher_traits;
pub mod cipher_types;
pub mod crypto_suite;
pub mod encryption_transformation;
pub mod feistel_network;
pub mod gf256;
pub mod key_expansion;
pub mod magenta;
pub mod magenta_key_expansion;
pub mod magenta_transformation;
pub mod modes;
pub mod padding;
pub mod utils;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use std::sync::Arc;

impl EncryptionTransformation for Arc<dyn EncryptionTransformation + Send + Sync> {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8> {
        (**self).transform(input_block, round_key)
    }
}
