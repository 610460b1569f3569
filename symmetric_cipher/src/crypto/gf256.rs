use std::sync::OnceLock;

/// Feedback polynomial x^8 + x^6 + x^5 + x^2 + 1.
pub const POLYNOMIAL: u16 = 0x165;

/// Generator used to build the S table.
pub const ALPHA: u8 = 0x02;

/// Multiplication in GF(2^8) reduced by [`POLYNOMIAL`].
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut result: u16 = 0;
    let mut a_val = a as u16;
    let mut b_val = b;

    for _ in 0..8 {
        if b_val & 1 != 0 {
            result ^= a_val;
        }
        b_val >>= 1;

        a_val <<= 1;
        if a_val & 0x100 != 0 {
            a_val ^= POLYNOMIAL;
        }
    }

    (result & 0xFF) as u8
}

/// Exponentiation in the same field, square-and-multiply.
pub fn gf_pow(a: u8, exp: usize) -> u8 {
    if exp == 0 {
        return 1;
    }
    if a == 0 {
        return 0;
    }

    let mut result: u8 = 1;
    let mut base = a;
    let mut exponent = exp;

    while exponent > 0 {
        if exponent & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exponent >>= 1;
    }

    result
}

fn build_s_box() -> [u8; 256] {
    let mut s = [0u8; 256];
    s[0] = 1;
    for i in 1..255 {
        s[i] = gf_mul(s[i - 1], ALPHA);
    }
    // S[255] is a sentinel, not a power of alpha
    s[255] = 0;
    s
}

/// `S[i] = ALPHA^i` for `i < 255`, `S[255] = 0`.
pub fn s_box() -> &'static [u8; 256] {
    static S_BOX: OnceLock<[u8; 256]> = OnceLock::new();
    S_BOX.get_or_init(build_s_box)
}
