use crate::crypto::dh_error::DhError;
use crate::primality::{small_mod, small_primes, MillerRabinTest, PrimalityTest};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Safe-prime domain parameters: `p = 2q + 1` with `p`, `q` prime and a
/// generator `g`.
///
/// Both parties must hold equal values; nothing here depends on object
/// identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParams {
    p: BigUint,
    q: BigUint,
    g: BigUint,
    encoded_len: usize,
}

impl DhParams {
    pub const MIN_BIT_LENGTH: u64 = 16;

    /// Generates a `bit_length`-bit safe prime and a generator for it.
    ///
    /// Blocks until a candidate is found; the number of attempts is random
    /// and unbounded, callers that need a deadline must enforce it
    /// themselves.
    pub fn generate<R: RngCore + CryptoRng>(
        bit_length: u64,
        certainty: u32,
        rng: &mut R,
    ) -> Result<Self, DhError> {
        if bit_length < Self::MIN_BIT_LENGTH {
            return Err(DhError::InvalidBitLength(bit_length));
        }

        let (p, q) = generate_safe_prime(bit_length, certainty, rng);
        let g = find_generator(&p, &q, rng);

        Ok(Self::from_parts(p, q, g))
    }

    /// Rebuilds parameters received from a peer, checking their structure.
    ///
    /// Primality of `p` and `q` is not re-tested here, see [`Self::verify`].
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self, DhError> {
        if p <= BigUint::from(5u32) || !p.bit(0) {
            return Err(DhError::InvalidParameters("p must be an odd prime greater than 5"));
        }
        if p != (&q << 1u32) + 1u32 {
            return Err(DhError::InvalidParameters("p must equal 2q + 1"));
        }
        if g < BigUint::from(2u32) || g > &p - 2u32 {
            return Err(DhError::InvalidParameters("g must lie in [2, p-2]"));
        }
        if !is_generator(&p, &q, &g) {
            return Err(DhError::InvalidParameters("g has low order"));
        }

        Ok(Self::from_parts(p, q, g))
    }

    pub fn from_decimal(p: &str, q: &str, g: &str) -> Result<Self, DhError> {
        Self::new(parse_decimal("p", p)?, parse_decimal("q", q)?, parse_decimal("g", g)?)
    }

    /// `(p, q, g)` as decimal strings for the transport layer.
    pub fn to_decimal(&self) -> (String, String, String) {
        (
            self.p.to_str_radix(10),
            self.q.to_str_radix(10),
            self.g.to_str_radix(10),
        )
    }

    /// Probabilistically checks that `p` and `q` are prime.
    pub fn verify<R: RngCore + CryptoRng>(&self, certainty: u32, rng: &mut R) -> bool {
        let test = MillerRabinTest;
        test.is_probably_prime(&self.q, certainty, rng) && test.is_probably_prime(&self.p, certainty, rng)
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// `ceil(bits(p) / 8)`: the byte length of every encoded DH value.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    fn from_parts(p: BigUint, q: BigUint, g: BigUint) -> Self {
        let encoded_len = p.bits().div_ceil(8) as usize;
        Self { p, q, g, encoded_len }
    }
}

fn parse_decimal(name: &str, value: &str) -> Result<BigUint, DhError> {
    BigUint::parse_bytes(value.trim().as_bytes(), 10)
        .ok_or_else(|| DhError::Parse(format!("{} from {:?}", name, value)))
}

/// `g^2 != 1` and `g^q != 1` (mod p).
fn is_generator(p: &BigUint, q: &BigUint, g: &BigUint) -> bool {
    let one = BigUint::one();
    g.modpow(&BigUint::from(2u32), p) != one && g.modpow(q, p) != one
}

/// Rejects `q` when `q` or `2q + 1` has a small factor. Only valid for `q`
/// above every sieving prime.
fn survives_sieve(q: &BigUint) -> bool {
    small_primes().iter().all(|&r| {
        let m = small_mod(q, r) as u64;
        m != 0 && (2 * m + 1) % r as u64 != 0
    })
}

fn generate_safe_prime(bit_length: u64, certainty: u32, rng: &mut dyn RngCore) -> (BigUint, BigUint) {
    let q_bits = bit_length - 1;
    let test = MillerRabinTest;
    let mut candidates: u64 = 0;

    loop {
        candidates += 1;

        let mut q = rng.gen_biguint(q_bits);
        q.set_bit(q_bits - 1, true);
        q.set_bit(0, true);

        if !survives_sieve(&q) {
            continue;
        }

        let p = (&q << 1u32) + 1u32;

        // one cheap round on each before paying for full certainty
        if !test.run_iteration(&q, rng) || !test.run_iteration(&p, rng) {
            continue;
        }

        if test.is_probably_prime(&q, certainty, rng) && test.is_probably_prime(&p, certainty, rng) {
            log::debug!(
                "found {}-bit safe prime after {} candidates",
                p.bits(),
                candidates
            );
            return (p, q);
        }
    }
}

fn find_generator(p: &BigUint, q: &BigUint, rng: &mut dyn RngCore) -> BigUint {
    let two = BigUint::from(2u32);
    let upper = p - 1u32;

    loop {
        // uniform in [2, p-2]
        let g = rng.gen_biguint_range(&two, &upper);
        if is_generator(p, q, &g) {
            return g;
        }
    }
}
