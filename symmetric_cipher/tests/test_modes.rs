#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::sync::Arc;
    use symmetric_cipher::crypto::cipher_error::CipherError;
    use symmetric_cipher::crypto::cipher_traits::{BlockCipher, BlockMode};
    use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
    use symmetric_cipher::crypto::magenta::Magenta;
    use symmetric_cipher::crypto::modes::{self, CtrMode, PcbcMode, RandomDeltaMode};
    use symmetric_cipher::crypto::padding;

    const LENGTHS: [usize; 7] = [0, 1, 15, 16, 17, 64, 257];

    fn cipher(seed: u64) -> Arc<dyn BlockCipher> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut key = [0u8; 32];
        rng.fill_bytes(&mut key);
        Arc::new(Magenta::new(&key).unwrap())
    }

    fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        rng.fill_bytes(&mut buf);
        buf
    }

    #[test]
    fn test_every_mode_round_trips_with_padding() {
        let mut rng = StdRng::seed_from_u64(1);
        let cipher = cipher(2);
        let pkcs7 = padding::for_mode(PaddingMode::PKCS7);

        for mode in CipherMode::ALL {
            let engine = modes::for_mode(mode, cipher.clone());
            for len in LENGTHS {
                let message = random_bytes(&mut rng, len);
                let iv = random_bytes(&mut rng, 16);

                let padded = pkcs7.pad(&message, 16).unwrap();
                let encrypted = engine.encrypt(&padded, &iv).unwrap();
                assert_eq!(encrypted.len(), padded.len(), "{} len={}", mode, len);

                let decrypted = engine.decrypt(&encrypted, &iv).unwrap();
                assert_eq!(pkcs7.unpad(&decrypted).unwrap(), message, "{} len={}", mode, len);
            }
        }
    }

    #[test]
    fn test_stream_modes_round_trip_without_padding() {
        let mut rng = StdRng::seed_from_u64(3);
        let cipher = cipher(4);

        for mode in CipherMode::ALL.into_iter().filter(|m| m.is_stream_mode()) {
            let engine = modes::for_mode(mode, cipher.clone());
            for len in LENGTHS {
                let message = random_bytes(&mut rng, len);
                let iv = random_bytes(&mut rng, 16);

                let encrypted = engine.encrypt(&message, &iv).unwrap();
                assert_eq!(encrypted.len(), len);
                if len >= 16 {
                    assert_ne!(encrypted, message, "{} len={}", mode, len);
                }
                assert_eq!(engine.decrypt(&encrypted, &iv).unwrap(), message, "{} len={}", mode, len);
            }
        }
    }

    #[test]
    fn test_ecb_ignores_iv_and_repeats_blocks() {
        let engine = modes::for_mode(CipherMode::ECB, cipher(5));
        let data = [0x42u8; 32];
        let first = engine.encrypt(&data, &[]).unwrap();
        let second = engine.encrypt(&data, &[1u8; 16]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[..16], first[16..]);
    }

    #[test]
    fn test_cbc_hides_repeated_blocks() {
        let engine = modes::for_mode(CipherMode::CBC, cipher(6));
        let encrypted = engine.encrypt(&[0x42u8; 32], &[0u8; 16]).unwrap();
        assert_ne!(encrypted[..16], encrypted[16..]);
    }

    #[test]
    fn test_block_modes_reject_unaligned_data() {
        for mode in [CipherMode::ECB, CipherMode::CBC] {
            let engine = modes::for_mode(mode, cipher(7));
            assert!(matches!(
                engine.encrypt(&[0u8; 17], &[0u8; 16]),
                Err(CipherError::UnalignedData { len: 17, block_size: 16 })
            ));
            assert!(matches!(
                engine.decrypt(&[0u8; 5], &[0u8; 16]),
                Err(CipherError::UnalignedData { len: 5, block_size: 16 })
            ));
        }
    }

    #[test]
    fn test_pcbc_drops_partial_tail() {
        let engine = PcbcMode::new(cipher(8));
        let iv = [9u8; 16];
        let encrypted = engine.encrypt(&[3u8; 20], &iv).unwrap();
        assert_eq!(encrypted.len(), 16);
        assert_eq!(engine.decrypt(&encrypted, &iv).unwrap(), vec![3u8; 16]);
    }

    #[test]
    fn test_modes_reject_wrong_iv_length() {
        for mode in CipherMode::ALL.into_iter().filter(|m| *m != CipherMode::ECB) {
            let engine = modes::for_mode(mode, cipher(9));
            assert!(matches!(
                engine.encrypt(&[0u8; 16], &[0u8; 8]),
                Err(CipherError::InvalidIvLength { actual: 8, expected: 16 })
            ));
            assert!(matches!(
                engine.decrypt(&[0u8; 16], &[0u8; 17]),
                Err(CipherError::InvalidIvLength { actual: 17, expected: 16 })
            ));
        }
    }

    #[test]
    fn test_ctr_keystream_is_encrypted_counter() {
        let cipher = cipher(10);
        let engine = CtrMode::new(cipher.clone());
        let keystream = engine.encrypt(&[0u8; 32], &[0u8; 16]).unwrap();

        let mut one = [0u8; 16];
        one[15] = 1;
        assert_eq!(keystream[..16], cipher.encrypt_block(&[0u8; 16]).unwrap()[..]);
        assert_eq!(keystream[16..], cipher.encrypt_block(&one).unwrap()[..]);
    }

    #[test]
    fn test_ctr_counter_carries_and_wraps() {
        let mut iv = [0u8; 16];
        iv[15] = 0xFF;
        let mut expected = [0u8; 16];
        expected[14] = 0x01;
        assert_eq!(CtrMode::counter_block(&iv, 1), expected);

        assert_eq!(CtrMode::counter_block(&[0xFF; 16], 1), vec![0u8; 16]);
    }

    #[test]
    fn test_ofb_and_ctr_are_symmetric() {
        let mut rng = StdRng::seed_from_u64(11);
        let data = random_bytes(&mut rng, 40);
        let iv = random_bytes(&mut rng, 16);
        for mode in [CipherMode::OFB, CipherMode::CTR] {
            let engine = modes::for_mode(mode, cipher(12));
            assert_eq!(engine.encrypt(&data, &iv).unwrap(), engine.decrypt(&data, &iv).unwrap());
        }
    }

    #[test]
    fn test_random_delta_unit_step_matches_ctr() {
        let cipher = cipher(13);
        let mut iv = [0u8; 16];
        iv[15] = 1; // initial = 0, delta = 1

        for i in 0..5usize {
            assert_eq!(
                RandomDeltaMode::counter_block(&iv, i),
                CtrMode::counter_block(&[0u8; 16], i as u64)
            );
        }

        // on zero plaintext E(0 ^ counter) equals the CTR keystream E(counter)
        let zeros = [0u8; 48];
        let random_delta = RandomDeltaMode::new(cipher.clone()).encrypt(&zeros, &iv).unwrap();
        let ctr = CtrMode::new(cipher).encrypt(&zeros, &[0u8; 16]).unwrap();
        assert_eq!(random_delta, ctr);
    }

    #[test]
    fn test_random_delta_zero_delta_repeats_counter() {
        let engine = RandomDeltaMode::new(cipher(14));
        let mut iv = [0u8; 16];
        iv[..8].copy_from_slice(&[0xA5; 8]);

        let encrypted = engine.encrypt(&[0u8; 48], &iv).unwrap();
        assert_eq!(encrypted[..16], encrypted[16..32]);
        assert_eq!(encrypted[16..32], encrypted[32..]);
    }

    #[test]
    fn test_random_delta_counter_is_fixed_width() {
        // initial = delta = 2^64 - 1, so counter 1 = 2^65 - 2 spills into the upper half
        let iv = [0xFFu8; 16];
        let counter = RandomDeltaMode::counter_block(&iv, 1);
        let mut expected = vec![0u8; 16];
        expected[7] = 0x01;
        expected[8..15].copy_from_slice(&[0xFF; 7]);
        expected[15] = 0xFE;
        assert_eq!(counter, expected);
        assert_eq!(counter.len(), 16);
    }

    #[test]
    fn test_parallel_paths_match_sequential() {
        let mut rng = StdRng::seed_from_u64(15);
        let data = random_bytes(&mut rng, 80 * 1024);
        let iv = random_bytes(&mut rng, 16);
        let cipher = cipher(16);

        let ecb = modes::for_mode(CipherMode::ECB, cipher.clone());
        let encrypted = ecb.encrypt(&data, &iv).unwrap();
        assert_eq!(encrypted[..16], cipher.encrypt_block(&data[..16]).unwrap()[..]);
        let tail = data.len() - 16;
        assert_eq!(encrypted[tail..], cipher.encrypt_block(&data[tail..]).unwrap()[..]);
        assert_eq!(ecb.decrypt(&encrypted, &iv).unwrap(), data);

        let ctr = CtrMode::new(cipher.clone());
        let encrypted = ctr.encrypt(&data, &iv).unwrap();
        let last_index = (data.len() / 16 - 1) as u64;
        let keystream = cipher
            .encrypt_block(&CtrMode::counter_block(&iv, last_index))
            .unwrap();
        let expected: Vec<u8> = data[tail..].iter().zip(keystream.iter()).map(|(a, b)| a ^ b).collect();
        assert_eq!(encrypted[tail..], expected[..]);
        assert_eq!(ctr.decrypt(&encrypted, &iv).unwrap(), data);
    }

    quickcheck! {
        fn prop_stream_modes_round_trip(data: Vec<u8>, iv_seed: u64) -> bool {
            let cipher = cipher(17);
            let iv = random_bytes(&mut StdRng::seed_from_u64(iv_seed), 16);

            CipherMode::ALL
                .into_iter()
                .filter(|m| m.is_stream_mode())
                .all(|mode| {
                    let engine = modes::for_mode(mode, cipher.clone());
                    let encrypted = engine.encrypt(&data, &iv).unwrap();
                    engine.decrypt(&encrypted, &iv).unwrap() == data
                })
        }
    }
}
