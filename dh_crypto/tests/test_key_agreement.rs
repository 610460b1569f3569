#[cfg(test)]
mod tests {
    use dh_crypto::{DhError, DhParams, DiffieHellman, KeyAgreement};
    use num_bigint::BigUint;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;
    use std::sync::OnceLock;

    fn params_512() -> &'static DhParams {
        static PARAMS: OnceLock<DhParams> = OnceLock::new();
        PARAMS.get_or_init(|| DhParams::generate(512, 64, &mut OsRng).unwrap())
    }

    fn encode(dh: &DiffieHellman, value: &BigUint) -> Vec<u8> {
        symmetric_cipher::to_fixed(value, dh.encoded_len())
    }

    #[test]
    fn test_shared_secrets_match() {
        let _ = env_logger::builder().is_test(true).try_init();
        let alice = DiffieHellman::new(params_512().clone());
        // the peer rebuilds the parameters from their decimal form
        let (p, q, g) = params_512().to_decimal();
        let bob = DiffieHellman::new(DhParams::from_decimal(&p, &q, &g).unwrap());

        let alice_keys = alice.generate_keypair(&mut OsRng).unwrap();
        let bob_keys = bob.generate_keypair(&mut OsRng).unwrap();

        let alice_secret = alice
            .derive_shared(&alice_keys.private_key, &bob_keys.public_key)
            .unwrap();
        let bob_secret = bob
            .derive_shared(&bob_keys.private_key, &alice_keys.public_key)
            .unwrap();

        assert_eq!(alice_secret, bob_secret);
        assert_eq!(alice_secret.len(), 64);
    }

    #[test]
    fn test_values_are_fixed_length() {
        let dh = DiffieHellman::new(params_512().clone());
        let mut rng = StdRng::seed_from_u64(0xD1FF1E);

        for _ in 0..20 {
            let keys = dh.generate_keypair(&mut rng).unwrap();
            assert_eq!(keys.private_key.len(), dh.encoded_len());
            assert_eq!(keys.public_key.len(), dh.encoded_len());
        }
    }

    #[test]
    fn test_private_scalar_range() {
        let dh = DiffieHellman::new(params_512().clone());
        let mut rng = StdRng::seed_from_u64(7);
        let two = BigUint::from(2u32);

        for _ in 0..50 {
            let x = symmetric_cipher::from_unsigned(&dh.generate_private(&mut rng));
            assert!(x >= two && &x < dh.params().q());
        }
    }

    #[test]
    fn test_public_value_matches_definition() {
        let dh = DiffieHellman::new(params_512().clone());
        let x = BigUint::from(123_456_789u32);

        let public = dh.derive_public(&encode(&dh, &x)).unwrap();
        let expected = dh.params().g().modpow(&x, dh.params().p());
        assert_eq!(public, encode(&dh, &expected));
    }

    #[test]
    fn test_rejects_degenerate_peer_values() {
        let dh = DiffieHellman::new(params_512().clone());
        let keys = dh.random_keypair().unwrap();
        let p = dh.params().p();

        let bad = [
            BigUint::from(0u32),
            BigUint::from(1u32),
            p - 1u32,
            p.clone(),
            p + 5u32,
        ];
        for value in &bad {
            assert_eq!(
                dh.derive_shared(&keys.private_key, &value.to_bytes_be()),
                Err(DhError::InvalidPeerPublicKey),
                "accepted peer value {}",
                value
            );
        }

        // the boundaries themselves are fine
        assert!(dh.derive_shared(&keys.private_key, &[2]).is_ok());
        assert!(dh
            .derive_shared(&keys.private_key, &(p - 2u32).to_bytes_be())
            .is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_private_keys() {
        let dh = DiffieHellman::new(params_512().clone());
        let q = dh.params().q();

        for x in [BigUint::from(0u32), BigUint::from(1u32), q.clone(), q + 1u32] {
            assert_eq!(
                dh.derive_public(&encode(&dh, &x)),
                Err(DhError::InvalidPrivateKey)
            );
        }
    }

    #[test]
    fn test_shared_secret_keys_a_cipher() {
        use symmetric_cipher::{Algorithm, CipherMode, CryptoSuite, PaddingMode};

        let dh = DiffieHellman::new(params_512().clone());
        let a = dh.random_keypair().unwrap();
        let b = dh.random_keypair().unwrap();
        let secret = dh.derive_shared(&a.private_key, &b.public_key).unwrap();

        let suite = CryptoSuite::new(
            Algorithm::Magenta,
            CipherMode::CBC,
            Some(PaddingMode::PKCS7),
            &secret[..32],
        )
        .unwrap();
        let iv = [0x42u8; 16];
        let ciphertext = suite.encrypt(b"agreed over diffie-hellman", &iv).unwrap();
        assert_eq!(
            suite.decrypt(&ciphertext, &iv).unwrap(),
            b"agreed over diffie-hellman"
        );
    }
}
