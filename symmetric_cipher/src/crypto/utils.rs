/// XORs `a` with `b` over the length of the shorter slice.
pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Exchanges the two halves of an even-length block.
pub fn swap_halves(block: &[u8]) -> Vec<u8> {
    let (left, right) = block.split_at(block.len() / 2);
    [right, left].concat()
}

/// Adds `value` to `block` read as a big-endian unsigned integer.
/// Overflow past the most significant byte wraps silently.
#[inline]
pub fn increment_block(block: &mut [u8], value: u64) {
    let mut carry = value as u128;
    for byte in block.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *byte as u128 + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
}

/// Even-indexed bytes followed by a separate vector of odd-indexed bytes.
pub fn split_even_odd(block: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let even = block.iter().step_by(2).copied().collect();
    let odd = block.iter().skip(1).step_by(2).copied().collect();
    (even, odd)
}
