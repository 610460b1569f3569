use dh_crypto::{DhError, DhParams, DiffieHellman, KeyAgreement};
use rand::rngs::OsRng;
use symmetric_cipher::{Algorithm, CipherMode, CryptoSuite, PaddingMode};

fn preview(bytes: &[u8]) -> String {
    let shown = bytes.len().min(16);
    format!("{}...", hex::encode(&bytes[..shown]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Diffie-Hellman Key Exchange Demo ===");

    println!("Generating 512-bit safe-prime parameters...");
    let params = DhParams::generate(512, 64, &mut OsRng)?;
    let (p, _, g) = params.to_decimal();
    println!("  p = {}", p);
    println!("  g = {}\n", g);

    // Bob receives the parameters in decimal form
    let (p, q, g) = params.to_decimal();
    let alice = DiffieHellman::new(params);
    let bob = DiffieHellman::new(DhParams::from_decimal(&p, &q, &g)?);

    let alice_keys = alice.generate_keypair(&mut OsRng)?;
    let bob_keys = bob.generate_keypair(&mut OsRng)?;
    println!("  Alice's public value: {}", preview(&alice_keys.public_key));
    println!("  Bob's public value:   {}\n", preview(&bob_keys.public_key));

    let alice_secret = alice.derive_shared(&alice_keys.private_key, &bob_keys.public_key)?;
    let bob_secret = bob.derive_shared(&bob_keys.private_key, &alice_keys.public_key)?;

    if alice_secret != bob_secret {
        return Err("shared secret mismatch".into());
    }
    println!("SUCCESS: Shared secrets match: {}", preview(&alice_secret));

    match alice.derive_shared(&alice_keys.private_key, &[1]) {
        Err(DhError::InvalidPeerPublicKey) => println!("Peer value 1 rejected as expected.\n"),
        other => return Err(format!("unexpected result for peer value 1: {:?}", other).into()),
    }

    // raw secret bytes used directly as a MAGENTA key
    let suite = CryptoSuite::new(
        Algorithm::Magenta,
        CipherMode::CBC,
        Some(PaddingMode::PKCS7),
        &alice_secret[..32],
    )?;
    let iv = vec![0u8; suite.iv_len()];
    let ciphertext = suite.encrypt(b"hello from alice", &iv)?;
    let plaintext = suite.decrypt(&ciphertext, &iv)?;
    println!("Ciphertext: {}", hex::encode(&ciphertext));
    println!("Decrypted:  {}", String::from_utf8_lossy(&plaintext));

    Ok(())
}
