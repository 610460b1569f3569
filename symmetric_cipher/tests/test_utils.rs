#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use symmetric_cipher::crypto::byte_codec::{from_unsigned, to_fixed};
    use symmetric_cipher::crypto::utils::*;

    #[test]
    fn test_xor_bytes() {
        assert_eq!(xor_bytes(&[0b1010, 0xFF], &[0b0110, 0x0F]), vec![0b1100, 0xF0]);
        // shorter operand wins
        assert_eq!(xor_bytes(&[1, 2, 3], &[1]), vec![0]);
    }

    #[test]
    fn test_swap_halves() {
        assert_eq!(swap_halves(&[1, 2, 3, 4]), vec![3, 4, 1, 2]);
        assert_eq!(swap_halves(&swap_halves(&[9, 8, 7, 6])), vec![9, 8, 7, 6]);
    }

    #[test]
    fn test_split_even_odd() {
        let (even, odd) = split_even_odd(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(even, vec![0, 2, 4]);
        assert_eq!(odd, vec![1, 3, 5]);
    }

    #[test]
    fn test_increment_block_carries_left() {
        let mut block = vec![0x00, 0x00, 0xFF];
        increment_block(&mut block, 1);
        assert_eq!(block, vec![0x00, 0x01, 0x00]);

        let mut block = vec![0x00, 0xFF, 0xFF];
        increment_block(&mut block, 1);
        assert_eq!(block, vec![0x01, 0x00, 0x00]);

        let mut block = vec![0x00, 0x00, 0x10];
        increment_block(&mut block, 0x1F0);
        assert_eq!(block, vec![0x00, 0x02, 0x00]);
    }

    #[test]
    fn test_increment_block_wraps() {
        let mut block = vec![0xFF; 16];
        increment_block(&mut block, 1);
        assert_eq!(block, vec![0x00; 16]);

        let mut block = vec![0xFF, 0xFE];
        increment_block(&mut block, 3);
        assert_eq!(block, vec![0x00, 0x01]);
    }

    #[test]
    fn test_to_fixed_left_pads() {
        assert_eq!(to_fixed(&BigUint::from(0x0102u32), 4), vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_to_fixed_keeps_low_order_bytes() {
        let value = BigUint::from(0x01_0203_0405u64);
        assert_eq!(to_fixed(&value, 2), vec![0x04, 0x05]);

        // 2^128 + 5 reduced to 16 bytes is 5
        let value = (BigUint::from(1u8) << 128usize) + 5u32;
        let mut expected = vec![0u8; 16];
        expected[15] = 5;
        assert_eq!(to_fixed(&value, 16), expected);
    }

    #[test]
    fn test_to_fixed_exact_width() {
        let bytes = vec![0xFFu8; 8];
        assert_eq!(to_fixed(&from_unsigned(&bytes), 8), bytes);
    }

    #[test]
    fn test_from_unsigned_ignores_sign_bit() {
        assert_eq!(from_unsigned(&[0x80]), BigUint::from(128u32));
        assert_eq!(from_unsigned(&[0x00, 0x00, 0x01]), BigUint::from(1u32));
        assert_eq!(from_unsigned(&[]), BigUint::from(0u32));
    }
}
