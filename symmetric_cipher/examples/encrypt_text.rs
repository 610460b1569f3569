use rand::rngs::OsRng;
use rand::RngCore;
use symmetric_cipher::crypto::cipher_io::{CipherInput, CipherOutput};
use symmetric_cipher::crypto::cipher_types::{Algorithm, CipherMode, PaddingMode};
use symmetric_cipher::crypto::crypto_suite::CryptoSuite;
use symmetric_cipher::CipherError;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    buf
}

#[tokio::main]
async fn main() -> Result<(), CipherError> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let data = text.as_bytes().to_vec();
    let key = random_bytes(32);

    for mode in CipherMode::ALL {
        let padding = if mode.is_stream_mode() {
            None
        } else {
            Some(PaddingMode::PKCS7)
        };
        let suite = CryptoSuite::new(Algorithm::Magenta, mode, padding, &key)?;
        let iv = random_bytes(suite.iv_len());

        let mut enc_out = CipherOutput::Buffer(Vec::new());
        suite
            .encrypt_async(CipherInput::Bytes(data.clone()), &mut enc_out, &iv)
            .await?;
        let encrypted = enc_out.into_bytes().unwrap_or_default();

        let mut dec_out = CipherOutput::Buffer(Vec::new());
        suite
            .decrypt_async(CipherInput::Bytes(encrypted.clone()), &mut dec_out, &iv)
            .await?;
        let decrypted = dec_out.into_bytes().unwrap_or_default();

        assert_eq!(data, decrypted);
        println!(
            "MAGENTA {:<12} {:>3} bytes -> {:>3} bytes  {}...",
            mode.to_string(),
            data.len(),
            encrypted.len(),
            hex::encode(&encrypted[..16])
        );
    }

    Ok(())
}
