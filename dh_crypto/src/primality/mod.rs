pub(crate) mod miller_rabin;
pub use miller_rabin::MillerRabinTest;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::RngCore;
use std::sync::OnceLock;

const SIEVE_LIMIT: usize = 2048;

/// Probabilistic primality test with a fixed public API; implementations
/// supply a single randomized round.
pub trait PrimalityTest {
    /// `true` if `n` is prime with error probability at most `2^-certainty`.
    fn is_probably_prime(&self, n: &BigUint, certainty: u32, rng: &mut dyn RngCore) -> bool {
        if let Some(verdict) = trial_division(n) {
            return verdict;
        }

        for _ in 0..certainty_to_iterations(certainty) {
            if !self.run_iteration(n, rng) {
                return false;
            }
        }
        true
    }

    /// One round; `n` is odd and larger than every small prime.
    fn run_iteration(&self, n: &BigUint, rng: &mut dyn RngCore) -> bool;
}

/// Miller-Rabin rounds have error at most 1/4, so `c` bits of certainty need
/// `ceil(c / 2)` rounds.
pub fn certainty_to_iterations(certainty: u32) -> u32 {
    certainty.div_ceil(2).max(1)
}

/// Odd primes below `SIEVE_LIMIT`.
pub fn small_primes() -> &'static [u32] {
    static PRIMES: OnceLock<Vec<u32>> = OnceLock::new();
    PRIMES.get_or_init(|| {
        let mut composite = vec![false; SIEVE_LIMIT];
        let mut primes = Vec::new();
        for i in 2..SIEVE_LIMIT {
            if composite[i] {
                continue;
            }
            if i > 2 {
                primes.push(i as u32);
            }
            for multiple in (i * i..SIEVE_LIMIT).step_by(i) {
                composite[multiple] = true;
            }
        }
        primes
    })
}

/// Remainder of `n` modulo a small divisor.
pub(crate) fn small_mod(n: &BigUint, divisor: u32) -> u32 {
    (n % divisor).to_u32().unwrap_or_default()
}

/// Settles small and obviously composite inputs, `None` when a real test is
/// needed.
pub fn trial_division(n: &BigUint) -> Option<bool> {
    let Some(value) = n.to_u64() else {
        return screen_by_small_primes(n);
    };

    if value < 2 {
        return Some(false);
    }
    if value == 2 {
        return Some(true);
    }
    if value % 2 == 0 {
        return Some(false);
    }
    if value < SIEVE_LIMIT as u64 {
        return Some(small_primes().binary_search(&(value as u32)).is_ok());
    }

    screen_by_small_primes(n)
}

fn screen_by_small_primes(n: &BigUint) -> Option<bool> {
    if !n.bit(0) {
        return Some(false);
    }
    if small_primes().iter().any(|&p| small_mod(n, p) == 0) {
        return Some(false);
    }
    None
}
