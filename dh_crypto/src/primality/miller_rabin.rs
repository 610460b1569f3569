use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;

pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn run_iteration(&self, n: &BigUint, rng: &mut dyn RngCore) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u32);

        if *n <= BigUint::from(3u32) {
            return *n == two || *n == BigUint::from(3u32);
        }

        let upper = n - &one;

        // n - 1 = d * 2^s with d odd
        let s = upper.trailing_zeros().unwrap_or(0);
        if s == 0 {
            return false;
        }
        let d = &upper >> s;

        let a = rng.gen_biguint_range(&two, &upper);
        let mut x = a.modpow(&d, n);

        if x == one || x == upper {
            return true;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);

            if x == upper {
                return true;
            }
            if x == one {
                return false;
            }
        }

        false
    }
}
